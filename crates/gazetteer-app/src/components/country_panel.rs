//! Country entry form and the country selector driving the city panel.

use dioxus::prelude::*;

use super::REQUEST_FAILED;
use crate::state::GazetteerContext;

/// Left panel: add-country form plus the country selector.
#[component]
pub fn CountryPanel() -> Element {
    let ctx = use_context::<GazetteerContext>();
    let mut state = ctx.state;

    let countries = state.read().countries.clone();
    let country_draft = state.read().country_draft.clone();
    let selected_id = state
        .read()
        .selected_country
        .as_ref()
        .map(|c| c.id.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "panel",
            div { class: "field-row",
                label { r#for: "add-country", "Add a country" }
                input {
                    id: "add-country",
                    value: "{country_draft}",
                    oninput: move |evt| state.write().country_draft = evt.value(),
                }
                button {
                    class: "add-button",
                    onclick: move |_| submit_country(ctx),
                    "Add Country"
                }
            }

            select {
                class: "entity-select",
                value: "{selected_id}",
                onchange: move |evt| change_country(ctx, evt.value()),
                option { value: "", "Select a country..." }
                for country in countries {
                    option { key: "{country.id}", value: "{country.id}", "{country.name}" }
                }
            }
        }
    }
}

/// Validate the draft, then ask the collaborator to store it.
fn submit_country(ctx: GazetteerContext) {
    let name = match ctx.state.read().validate_new_country() {
        Ok(name) => name,
        Err(err) => {
            ctx.toaster.error(err.message());
            return;
        }
    };

    let client = ctx.client.read().clone();
    let mut state = ctx.state;
    let toaster = ctx.toaster;
    spawn(async move {
        match client.create_country(&name).await {
            Ok(country) => {
                state.write().country_created(country);
                toaster.success("Country successfully added!");
            }
            Err(e) => {
                tracing::error!("Failed to add country: {}", e);
                toaster.error(REQUEST_FAILED);
            }
        }
    });
}

/// Swap the selected country and refresh its city list.
fn change_country(ctx: GazetteerContext, raw: String) {
    let selection = if raw.is_empty() {
        None
    } else {
        ctx.state
            .read()
            .countries
            .iter()
            .find(|c| c.id.as_str() == raw)
            .cloned()
    };

    let mut state = ctx.state;
    let Some(fetch) = state.write().select_country(selection) else {
        return;
    };

    let client = ctx.client.read().clone();
    let toaster = ctx.toaster;
    spawn(async move {
        match client.cities_of(&fetch.country_id).await {
            Ok(cities) => {
                if !state.write().apply_cities(fetch.ticket, cities) {
                    tracing::debug!("Dropped cities reply for a stale selection");
                }
            }
            Err(e) => {
                tracing::error!("Failed to load cities: {}", e);
                if state.read().city_fetch_current(fetch.ticket) {
                    toaster.error(REQUEST_FAILED);
                }
            }
        }
    });
}
