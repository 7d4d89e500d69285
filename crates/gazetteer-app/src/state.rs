//! Shared window state using Dioxus signals.
//!
//! All mutations funnel through [`GazetteerState`] so the panels stay thin
//! wrappers around it. Async replies carry a [`RequestTicket`] stamp; a reply
//! whose stamp is no longer current belongs to an abandoned request and is
//! dropped instead of clobbering newer state.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use gazetteer_api::{ApiClient, ApiError, City, Country, CountryId, SearchHit};

use crate::toast::Toaster;

/// Delay between the last keystroke and the search request it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Opaque stamp identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter behind one family of requests. Issuing a new stamp
/// invalidates every earlier one.
#[derive(Debug, Default)]
struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest == ticket.0
    }
}

/// Why a submitted name was rejected before any request went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    DuplicateCountry,
    DuplicateCity,
}

impl ValidationError {
    /// User-facing message for the rejection toast.
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::Required => "This field is required",
            ValidationError::DuplicateCountry => "This country exists in the database!",
            ValidationError::DuplicateCity => "This city exists in the database!",
        }
    }
}

/// A cities fetch the caller should now run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFetch {
    pub country_id: CountryId,
    pub ticket: RequestTicket,
}

/// A search the caller should run once the debounce delay has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchJob {
    pub query: String,
    pub ticket: RequestTicket,
}

/// Everything the window renders, in one place.
#[derive(Debug, Default)]
pub struct GazetteerState {
    /// Countries known to the collaborator, in arrival order.
    pub countries: Vec<Country>,
    /// Cities of the currently selected country.
    pub cities: Vec<City>,
    pub selected_country: Option<Country>,
    pub selected_city: Option<City>,
    pub country_draft: String,
    pub city_draft: String,
    pub search_draft: String,
    pub search_results: Vec<SearchHit>,
    city_tickets: TicketCounter,
    search_tickets: TicketCounter,
}

impl GazetteerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the full country list, as loaded on startup.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
    }

    /// Check the country draft, returning the trimmed name to submit.
    ///
    /// Emptiness is reported before duplication, and duplicates match
    /// case-insensitively.
    pub fn validate_new_country(&self) -> Result<String, ValidationError> {
        let name = self.country_draft.trim();
        if name.is_empty() {
            return Err(ValidationError::Required);
        }
        let lowered = name.to_lowercase();
        if self
            .countries
            .iter()
            .any(|c| c.name.to_lowercase() == lowered)
        {
            return Err(ValidationError::DuplicateCountry);
        }
        Ok(name.to_string())
    }

    /// Record a country the collaborator accepted and reset the draft.
    pub fn country_created(&mut self, country: Country) {
        self.countries.push(country);
        self.country_draft.clear();
    }

    /// Check the city draft against the cities of the selected country.
    pub fn validate_new_city(&self) -> Result<String, ValidationError> {
        let name = self.city_draft.trim();
        if name.is_empty() {
            return Err(ValidationError::Required);
        }
        let lowered = name.to_lowercase();
        if self.cities.iter().any(|c| c.name.to_lowercase() == lowered) {
            return Err(ValidationError::DuplicateCity);
        }
        Ok(name.to_string())
    }

    /// Record a city the collaborator accepted.
    ///
    /// The city joins the list only while its country is still the selected
    /// one; after a selection change the reply belongs to a list that left
    /// the screen. Returns whether the list took it.
    pub fn city_created(&mut self, city: City) -> bool {
        let current = self
            .selected_country
            .as_ref()
            .is_some_and(|c| c.id == city.country_id);
        if current {
            self.cities.push(city);
            self.city_draft.clear();
        }
        current
    }

    /// Switch the selected country, clearing everything scoped to the old one.
    ///
    /// The ticket advances even when the selection clears, so a cities fetch
    /// still in flight finds itself stale. Returns the fetch to run, if any.
    pub fn select_country(&mut self, country: Option<Country>) -> Option<CityFetch> {
        self.selected_city = None;
        self.cities.clear();
        let ticket = self.city_tickets.issue();
        self.selected_country = country;
        self.selected_country.as_ref().map(|c| CityFetch {
            country_id: c.id.clone(),
            ticket,
        })
    }

    /// Whether a cities reply with this stamp would still be welcome.
    pub fn city_fetch_current(&self, ticket: RequestTicket) -> bool {
        self.city_tickets.is_current(ticket)
    }

    /// Install a cities reply unless a newer selection superseded it.
    pub fn apply_cities(&mut self, ticket: RequestTicket, cities: Vec<City>) -> bool {
        if !self.city_tickets.is_current(ticket) {
            return false;
        }
        self.cities = cities;
        true
    }

    pub fn select_city(&mut self, city: Option<City>) {
        self.selected_city = city;
    }

    /// Record a new search box value.
    ///
    /// A blank box clears the results immediately and issues no job. Every
    /// call advances the ticket, so a blank box also invalidates whatever
    /// search was still in flight.
    pub fn begin_search(&mut self, text: String) -> Option<SearchJob> {
        self.search_draft = text;
        let ticket = self.search_tickets.issue();
        let query = self.search_draft.trim();
        if query.is_empty() {
            self.search_results.clear();
            return None;
        }
        Some(SearchJob {
            query: query.to_string(),
            ticket,
        })
    }

    /// Whether a search with this stamp is still the one on screen.
    pub fn search_current(&self, ticket: RequestTicket) -> bool {
        self.search_tickets.is_current(ticket)
    }

    /// Install search results unless a newer query superseded them.
    pub fn apply_search(&mut self, ticket: RequestTicket, hits: Vec<SearchHit>) -> bool {
        if !self.search_tickets.is_current(ticket) {
            return false;
        }
        self.search_results = hits;
        true
    }
}

/// Merge the two search branches into one display list, countries first.
///
/// A failed branch degrades to an empty contribution so the other still
/// shows; the failure is logged rather than surfaced.
pub fn merge_branches(
    countries: Result<Vec<Country>, ApiError>,
    cities: Result<Vec<City>, ApiError>,
) -> Vec<SearchHit> {
    let countries = countries.unwrap_or_else(|err| {
        tracing::warn!("country search failed: {}", err);
        Vec::new()
    });
    let cities = cities.unwrap_or_else(|err| {
        tracing::warn!("city search failed: {}", err);
        Vec::new()
    });
    let mut hits: Vec<SearchHit> = countries.into_iter().map(SearchHit::Country).collect();
    hits.extend(cities.into_iter().map(SearchHit::City));
    hits
}

/// Shared app state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct GazetteerContext {
    pub client: Signal<Arc<ApiClient>>,
    pub state: Signal<GazetteerState>,
    pub toaster: Toaster,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazetteer_api::{CityId, StatusCode};

    fn country(id: &str, name: &str) -> Country {
        Country {
            id: CountryId::new(id),
            name: name.to_string(),
        }
    }

    fn city(id: &str, name: &str, country_id: &str) -> City {
        City {
            id: CityId::new(id),
            name: name.to_string(),
            country_id: CountryId::new(country_id),
        }
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost:3000/countries".to_string(),
        }
    }

    #[test]
    fn test_blank_country_draft_is_rejected_as_required() {
        let mut state = GazetteerState::new();
        state.country_draft = "   ".to_string();
        assert_eq!(
            state.validate_new_country(),
            Err(ValidationError::Required)
        );
        assert_eq!(
            ValidationError::Required.message(),
            "This field is required"
        );
    }

    #[test]
    fn test_duplicate_country_matches_case_insensitively() {
        let mut state = GazetteerState::new();
        state.set_countries(vec![country("1", "France")]);
        state.country_draft = "  fRaNcE ".to_string();
        assert_eq!(
            state.validate_new_country(),
            Err(ValidationError::DuplicateCountry)
        );
        assert_eq!(
            ValidationError::DuplicateCountry.message(),
            "This country exists in the database!"
        );
    }

    #[test]
    fn test_valid_country_draft_is_trimmed() {
        let mut state = GazetteerState::new();
        state.set_countries(vec![country("1", "France")]);
        state.country_draft = "  Chad ".to_string();
        assert_eq!(state.validate_new_country(), Ok("Chad".to_string()));
    }

    #[test]
    fn test_country_created_appends_and_clears_draft() {
        let mut state = GazetteerState::new();
        state.country_draft = "Peru".to_string();
        state.country_created(country("9", "Peru"));
        assert_eq!(state.countries.len(), 1);
        assert_eq!(state.countries[0].name, "Peru");
        assert!(state.country_draft.is_empty());
    }

    #[test]
    fn test_select_country_clears_city_scope() {
        let mut state = GazetteerState::new();
        let fetch = state.select_country(Some(country("1", "France"))).unwrap();
        state
            .apply_cities(fetch.ticket, vec![city("10", "Lyon", "1")]);
        state.select_city(Some(city("10", "Lyon", "1")));

        let fetch = state.select_country(Some(country("2", "Chad"))).unwrap();
        assert_eq!(fetch.country_id, CountryId::new("2"));
        assert!(state.cities.is_empty());
        assert!(state.selected_city.is_none());
    }

    #[test]
    fn test_stale_cities_reply_is_dropped() {
        let mut state = GazetteerState::new();
        let first = state.select_country(Some(country("1", "France"))).unwrap();
        let second = state.select_country(Some(country("2", "Chad"))).unwrap();

        assert!(!state.apply_cities(first.ticket, vec![city("10", "Lyon", "1")]));
        assert!(state.cities.is_empty());

        assert!(state.apply_cities(second.ticket, vec![city("20", "Moundou", "2")]));
        assert_eq!(state.cities.len(), 1);
    }

    #[test]
    fn test_clearing_selection_invalidates_inflight_fetch() {
        let mut state = GazetteerState::new();
        let fetch = state.select_country(Some(country("1", "France"))).unwrap();
        assert!(state.select_country(None).is_none());
        assert!(!state.city_fetch_current(fetch.ticket));
        assert!(!state.apply_cities(fetch.ticket, vec![city("10", "Lyon", "1")]));
    }

    #[test]
    fn test_blank_city_draft_is_rejected_as_required() {
        let mut state = GazetteerState::new();
        state.select_country(Some(country("1", "France")));
        state.city_draft = String::new();
        assert_eq!(state.validate_new_city(), Err(ValidationError::Required));
    }

    #[test]
    fn test_duplicate_city_matches_case_insensitively() {
        let mut state = GazetteerState::new();
        let fetch = state.select_country(Some(country("1", "France"))).unwrap();
        state.apply_cities(fetch.ticket, vec![city("10", "Lyon", "1")]);
        state.city_draft = "LYON".to_string();
        assert_eq!(
            state.validate_new_city(),
            Err(ValidationError::DuplicateCity)
        );
        assert_eq!(
            ValidationError::DuplicateCity.message(),
            "This city exists in the database!"
        );
    }

    #[test]
    fn test_city_created_appends_for_current_country() {
        let mut state = GazetteerState::new();
        state.select_country(Some(country("1", "France")));
        state.city_draft = "Paris".to_string();

        assert!(state.city_created(city("11", "Paris", "1")));
        assert_eq!(state.cities.len(), 1);
        assert!(state.city_draft.is_empty());
    }

    #[test]
    fn test_city_created_for_other_country_is_dropped() {
        let mut state = GazetteerState::new();
        state.select_country(Some(country("2", "Chad")));
        state.city_draft = "Paris".to_string();

        assert!(!state.city_created(city("11", "Paris", "1")));
        assert!(state.cities.is_empty());
        // The draft belongs to the new selection now, so it stays.
        assert_eq!(state.city_draft, "Paris");
    }

    #[test]
    fn test_blank_search_clears_results_without_a_job() {
        let mut state = GazetteerState::new();
        let job = state.begin_search("par".to_string()).unwrap();
        state.apply_search(job.ticket, vec![SearchHit::Country(country("1", "Paraguay"))]);

        assert!(state.begin_search("   ".to_string()).is_none());
        assert!(state.search_results.is_empty());
        // The blank box also invalidated the earlier job.
        assert!(!state.search_current(job.ticket));
    }

    #[test]
    fn test_search_job_carries_trimmed_query() {
        let mut state = GazetteerState::new();
        let job = state.begin_search("  par  ".to_string()).unwrap();
        assert_eq!(job.query, "par");
        assert_eq!(state.search_draft, "  par  ");
    }

    #[test]
    fn test_stale_search_reply_is_dropped() {
        let mut state = GazetteerState::new();
        let first = state.begin_search("par".to_string()).unwrap();
        let second = state.begin_search("para".to_string()).unwrap();

        assert!(!state.apply_search(
            first.ticket,
            vec![SearchHit::City(city("11", "Paris", "1"))]
        ));
        assert!(state.search_results.is_empty());

        assert!(state.apply_search(
            second.ticket,
            vec![SearchHit::Country(country("3", "Paraguay"))]
        ));
        assert_eq!(state.search_results.len(), 1);
    }

    #[test]
    fn test_merge_lists_countries_before_cities() {
        let hits = merge_branches(
            Ok(vec![country("3", "Paraguay")]),
            Ok(vec![city("11", "Paris", "1")]),
        );
        let labels: Vec<String> = hits.iter().map(|h| h.label()).collect();
        assert_eq!(labels, vec!["Country: Paraguay", "City: Paris"]);
    }

    #[test]
    fn test_merge_survives_failed_country_branch() {
        let hits = merge_branches(Err(failure()), Ok(vec![city("11", "Paris", "1")]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label(), "City: Paris");
    }

    #[test]
    fn test_merge_survives_failed_city_branch() {
        let hits = merge_branches(Ok(vec![country("4", "Chad")]), Err(failure()));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label(), "Country: Chad");
    }
}
