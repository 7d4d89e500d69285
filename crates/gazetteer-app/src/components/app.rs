//! Root app component: client construction, shared context, initial load.

use std::sync::Arc;

use dioxus::prelude::*;
use gazetteer_api::{ApiClient, ApiConfig};

use super::city_panel::CityPanel;
use super::country_panel::CountryPanel;
use super::search_panel::SearchPanel;
use super::toast_stack::ToastStack;
use crate::state::{GazetteerContext, GazetteerState};
use crate::toast::Toaster;

/// Newtype wrapper so `Arc<ApiClient>` satisfies Dioxus `#[component]`'s `PartialEq` bound.
/// Equality is by pointer identity.
#[derive(Clone)]
pub struct ClientArc(pub Arc<ApiClient>);

impl PartialEq for ClientArc {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Root application component.
#[component]
pub fn App() -> Element {
    // Client construction only fails on a broken TLS backend; surface that
    // instead of taking the window down.
    let client = use_hook(|| {
        ApiClient::new(ApiConfig::from_env())
            .map(Arc::new)
            .map_err(|e| e.to_string())
    });

    match client {
        Ok(client) => rsx! {
            MainView { client: ClientArc(client) }
        },
        Err(reason) => rsx! {
            div { class: "startup-error",
                h3 { "Gazetteer could not start" }
                p { "{reason}" }
            }
        },
    }
}

/// Main window layout with shared context.
#[component]
fn MainView(client: ClientArc) -> Element {
    let ctx = use_context_provider(|| GazetteerContext {
        client: Signal::new(client.0.clone()),
        state: Signal::new(GazetteerState::new()),
        toaster: Toaster::new(),
    });

    // Load the country list on mount. The client signal is never written, so
    // this effect runs once.
    use_effect(move || {
        let client = ctx.client.read().clone();
        let mut state = ctx.state;
        let toaster = ctx.toaster;
        spawn(async move {
            match client.list_countries().await {
                Ok(countries) => state.write().set_countries(countries),
                Err(e) => {
                    tracing::error!("Failed to load countries: {}", e);
                    toaster.error(super::REQUEST_FAILED);
                }
            }
        });
    });

    rsx! {
        div { class: "gazetteer-window",
            div { class: "entry-row",
                CountryPanel {}
                CityPanel {}
            }
            SearchPanel {}
            ToastStack {}
        }
    }
}
