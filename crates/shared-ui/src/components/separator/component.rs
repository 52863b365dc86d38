use dioxus::prelude::*;

/// Thin rule between groups of content.
///
/// Decorative by default, so assistive tech skips it. Pass
/// `decorative: false` when the break carries meaning.
#[component]
pub fn Separator(
    #[props(default = false)] vertical: bool,
    #[props(default = true)] decorative: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let orientation = if vertical { "vertical" } else { "horizontal" };
    let mut base = vec![
        Attribute::new("class", "separator", None, false),
        Attribute::new("data-orientation", orientation, None, false),
    ];
    if decorative {
        base.push(Attribute::new("role", "none", None, false));
    } else {
        base.push(Attribute::new("role", "separator", None, false));
        base.push(Attribute::new("aria-orientation", orientation, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorative_horizontal_by_default() {
        let mut dom = VirtualDom::new(|| rsx! { Separator {} });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("data-orientation=\"horizontal\""), "{html}");
        assert!(html.contains("role=\"none\""), "{html}");
        assert!(!html.contains("aria-orientation"), "{html}");
    }

    #[test]
    fn semantic_vertical_separator_is_announced() {
        let mut dom = VirtualDom::new(|| rsx! { Separator { vertical: true, decorative: false } });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("role=\"separator\""), "{html}");
        assert!(html.contains("aria-orientation=\"vertical\""), "{html}");
    }
}
