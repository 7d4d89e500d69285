//! City entry form and city selector, scoped to the selected country.

use dioxus::prelude::*;

use super::REQUEST_FAILED;
use crate::state::GazetteerContext;

/// Right panel: add-city form, shown only while a country is selected, plus
/// the city selector.
#[component]
pub fn CityPanel() -> Element {
    let ctx = use_context::<GazetteerContext>();
    let mut state = ctx.state;

    let has_country = state.read().selected_country.is_some();
    let city_draft = state.read().city_draft.clone();
    let cities = state.read().cities.clone();
    let selected_id = state
        .read()
        .selected_city
        .as_ref()
        .map(|c| c.id.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "panel",
            if has_country {
                div { class: "field-row",
                    label { r#for: "add-city", "Add a city" }
                    input {
                        id: "add-city",
                        value: "{city_draft}",
                        oninput: move |evt| state.write().city_draft = evt.value(),
                    }
                    button {
                        class: "add-button",
                        onclick: move |_| submit_city(ctx),
                        "Add a city"
                    }
                }
            }

            select {
                class: "entity-select",
                value: "{selected_id}",
                onchange: move |evt| {
                    let raw = evt.value();
                    let city = if raw.is_empty() {
                        None
                    } else {
                        state.read().cities.iter().find(|c| c.id.as_str() == raw).cloned()
                    };
                    state.write().select_city(city);
                },
                option { value: "", "Select a city..." }
                for city in cities {
                    option { key: "{city.id}", value: "{city.id}", "{city.name}" }
                }
            }
        }
    }
}

/// Validate the draft, then ask the collaborator to store it.
fn submit_city(ctx: GazetteerContext) {
    let (name, country_id) = {
        let state = ctx.state.read();
        let Some(country) = state.selected_country.as_ref() else {
            return;
        };
        match state.validate_new_city() {
            Ok(name) => (name, country.id.clone()),
            Err(err) => {
                ctx.toaster.error(err.message());
                return;
            }
        }
    };

    let client = ctx.client.read().clone();
    let mut state = ctx.state;
    let toaster = ctx.toaster;
    spawn(async move {
        match client.create_city(&name, &country_id).await {
            Ok(city) => {
                if state.write().city_created(city) {
                    toaster.success("City successfully added!");
                } else {
                    tracing::debug!("Dropped city reply for a country no longer selected");
                }
            }
            Err(e) => {
                tracing::error!("Failed to add city: {}", e);
                toaster.error(REQUEST_FAILED);
            }
        }
    });
}
