//! Wire and domain types shared by the client and the UI.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Accept an id as either a JSON string or a JSON number.
///
/// Collaborators in the json-server family assign either form; the id stays
/// opaque on our side, so everything is carried as its string spelling.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Num(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

/// Opaque server-assigned country identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryId(#[serde(deserialize_with = "opaque_id")] String);

impl CountryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque server-assigned city identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityId(#[serde(deserialize_with = "opaque_id")] String);

impl CityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored country. Never updated or deleted through this app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

/// A stored city, attached to exactly one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country_id: CountryId,
}

/// A country or city re-tagged for uniform search rendering.
///
/// Transient: recomputed on every search, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    Country(Country),
    City(City),
}

impl SearchHit {
    /// One display line, discriminator first.
    pub fn label(&self) -> String {
        match self {
            SearchHit::Country(c) => format!("Country: {}", c.name),
            SearchHit::City(c) => format!("City: {}", c.name),
        }
    }

    /// Stable rendering key derived from the hit's own identity, so the
    /// results list diffs idempotently across re-renders.
    pub fn dom_key(&self) -> String {
        match self {
            SearchHit::Country(c) => format!("country:{}", c.id),
            SearchHit::City(c) => format!("city:{}", c.id),
        }
    }
}
