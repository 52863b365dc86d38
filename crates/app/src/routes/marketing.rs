//! Building blocks shared by the static marketing pages.

use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// A titled blurb in a feature grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

pub const fn blurb(title: &'static str, description: &'static str) -> Blurb {
    Blurb { title, description }
}

/// Headline band at the top of a marketing page.
#[component]
pub fn Hero(eyebrow: String, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        section { class: "hero",
            span { class: "hero-eyebrow", "{eyebrow}" }
            h1 { class: "hero-title", "{title}" }
            p { class: "hero-subtitle", "{subtitle}" }
            div { class: "hero-actions", {children} }
        }
    }
}

#[component]
pub fn BlurbGrid(heading: String, items: &'static [Blurb]) -> Element {
    rsx! {
        section { class: "blurb-section",
            h2 { class: "section-heading", "{heading}" }
            div { class: "blurb-grid",
                for item in items.iter() {
                    Card { key: "{item.title}",
                        CardHeader {
                            CardTitle { "{item.title}" }
                            CardDescription { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

/// Row of headline figures.
#[component]
pub fn FigureStrip(figures: &'static [(&'static str, &'static str)]) -> Element {
    rsx! {
        section { class: "figure-strip",
            for (value, label) in figures.iter() {
                div { key: "{label}", class: "figure",
                    span { class: "figure-value", "{value}" }
                    span { class: "figure-label", "{label}" }
                }
            }
        }
    }
}

/// Narrow centered card used by the password pages.
#[component]
pub fn NoticeCard(title: String, description: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "notice-page",
            Card { class: "notice-card",
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent { {children} }
            }
        }
    }
}
