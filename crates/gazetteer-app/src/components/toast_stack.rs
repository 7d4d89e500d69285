//! Overlay rendering active toasts.

use dioxus::prelude::*;

use crate::state::GazetteerContext;

/// Fixed overlay listing active toasts, oldest first.
#[component]
pub fn ToastStack() -> Element {
    let ctx = use_context::<GazetteerContext>();
    let toasts = ctx.toaster.current();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div { key: "{toast.id}", class: "{toast.kind.css_class()}", "{toast.message}" }
            }
        }
    }
}
