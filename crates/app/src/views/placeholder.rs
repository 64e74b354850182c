use dioxus::prelude::*;
use shared_ui::{Card, CardContent};

/// Shown for menu entries that have no dedicated view yet.
#[component]
pub fn Placeholder(label: String) -> Element {
    rsx! {
        Card { class: "placeholder-card",
            CardContent {
                p { class: "placeholder-text", "Content for {label}" }
                p { class: "placeholder-hint", "This section has not been built yet." }
            }
        }
    }
}
