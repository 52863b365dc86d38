use dioxus::prelude::*;

/// Circular badge showing a single initial in place of a profile photo.
#[component]
pub fn Avatar(
    initial: char,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "avatar", None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            "{initial}"
        }
    }
}
