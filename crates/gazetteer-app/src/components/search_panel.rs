//! Substring search across countries and cities.

use dioxus::prelude::*;

use crate::state::{GazetteerContext, SEARCH_DEBOUNCE, merge_branches};

/// Search box plus the merged result list.
#[component]
pub fn SearchPanel() -> Element {
    let ctx = use_context::<GazetteerContext>();
    let state = ctx.state;

    let search_draft = state.read().search_draft.clone();
    let results = state.read().search_results.clone();

    rsx! {
        div { class: "search-panel",
            div { class: "field-row",
                label { r#for: "search-data", "Search the Database" }
                input {
                    id: "search-data",
                    class: "search-input",
                    value: "{search_draft}",
                    oninput: move |evt| run_search(ctx, evt.value()),
                }
            }

            if !results.is_empty() {
                div { class: "search-results",
                    h4 { "Search results:" }
                    ul {
                        for hit in results {
                            li { key: "{hit.dom_key()}", "{hit.label()}" }
                        }
                    }
                }
            }
        }
    }
}

/// Debounce the keystroke, then run both search branches concurrently.
fn run_search(ctx: GazetteerContext, text: String) {
    let mut state = ctx.state;
    let Some(job) = state.write().begin_search(text) else {
        return;
    };

    let client = ctx.client.read().clone();
    spawn(async move {
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        // A newer keystroke may have landed while we slept.
        if !state.read().search_current(job.ticket) {
            return;
        }

        let (countries, cities) = tokio::join!(
            client.search_countries(&job.query),
            client.search_cities(&job.query),
        );

        let hits = merge_branches(countries, cities);
        if !state.write().apply_search(job.ticket, hits) {
            tracing::debug!("Dropped results for a superseded search");
        }
    });
}
