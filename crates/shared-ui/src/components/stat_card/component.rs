use dioxus::prelude::*;

use crate::components::{Card, CardContent};

/// One aggregate counter: a big value, its label and an optional hint line.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { class: "stat-card",
            CardContent {
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
                if !hint.is_empty() {
                    span { class: "stat-hint", "{hint}" }
                }
            }
        }
    }
}
