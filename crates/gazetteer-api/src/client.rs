//! Async client, one method per collaborator endpoint.

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{City, Country, CountryId};

/// Handle to the collaborator. Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct NewCountry<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct NewCity<'a> {
    name: &'a str,
    country_id: &'a CountryId,
}

impl ApiClient {
    /// Build a client for the given collaborator.
    ///
    /// No request timeout is configured; the transport's own limits apply.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("collaborator base url: {}", base_url);
        Ok(Self { http, base_url })
    }

    /// The base URL this client was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /countries`: the full country list.
    pub async fn list_countries(&self) -> Result<Vec<Country>, ApiError> {
        let resp = self.http.get(self.url("/countries")).send().await?;
        decode(resp).await
    }

    /// `GET /countries?q=`: countries whose name matches the substring.
    /// Case sensitivity is the collaborator's call.
    pub async fn search_countries(&self, q: &str) -> Result<Vec<Country>, ApiError> {
        let resp = self
            .http
            .get(self.url("/countries"))
            .query(&[("q", q)])
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /countries`: create a country; returns the server-assigned record.
    pub async fn create_country(&self, name: &str) -> Result<Country, ApiError> {
        let resp = self
            .http
            .post(self.url("/countries"))
            .json(&NewCountry { name })
            .send()
            .await?;
        decode(resp).await
    }

    /// `GET /cities?country_id=`: the cities belonging to one country.
    pub async fn cities_of(&self, country_id: &CountryId) -> Result<Vec<City>, ApiError> {
        let resp = self
            .http
            .get(self.url("/cities"))
            .query(&[("country_id", country_id.as_str())])
            .send()
            .await?;
        decode(resp).await
    }

    /// `GET /cities?q=`: cities whose name matches the substring.
    pub async fn search_cities(&self, q: &str) -> Result<Vec<City>, ApiError> {
        let resp = self
            .http
            .get(self.url("/cities"))
            .query(&[("q", q)])
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /cities`: create a city under the given country.
    pub async fn create_city(&self, name: &str, country_id: &CountryId) -> Result<City, ApiError> {
        let resp = self
            .http
            .post(self.url("/cities"))
            .json(&NewCity { name, country_id })
            .send()
            .await?;
        decode(resp).await
    }
}

/// Reject non-success statuses before touching the body, then decode it.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            url: resp.url().to_string(),
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
