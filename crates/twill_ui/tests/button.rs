//! Button rendering behavior

use std::collections::HashSet;

use twill_ui::prelude::*;

#[test]
fn test_default_button_renders_canonical_markup() {
    let html = button("Save").build().to_html();
    assert_eq!(
        html,
        "<button type=\"button\" class=\"inline-flex items-center justify-center gap-2 \
         font-semibold transition-colors focus-visible:outline-none focus-visible:ring-2 \
         focus-visible:ring-offset-2 rounded-md px-4 py-2 text-base bg-indigo-600 text-white \
         hover:bg-indigo-500 focus-visible:ring-indigo-500\">Save</button>"
    );
}

#[test]
fn test_defaults_match_explicit_default_variant() {
    let implicit = button("Save").build().to_html();
    let explicit = button("Save")
        .tone(Tone::Default)
        .impact(Impact::Bold)
        .shape(Shape::Rounded)
        .size(Size::Md)
        .build()
        .to_html();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_large_danger_bordered_combination() {
    let class = button("Remove")
        .size(Size::Lg)
        .tone(Tone::Danger)
        .impact(Impact::Bordered)
        .classes();
    assert!(class.contains("px-6"), "lg padding: {class}");
    assert!(class.contains("border-red-600"), "danger bordered outline: {class}");
    assert!(!class.contains("px-4"), "md padding absent: {class}");
    assert!(!class.contains("bg-red-600"), "bold fill absent: {class}");
}

#[test]
fn test_rendering_is_deterministic() {
    let build = || {
        button("Go")
            .tone(Tone::Warning)
            .impact(Impact::Light)
            .shape(Shape::Pill)
            .size(Size::Sm)
            .attr("id", "go")
            .attr("data-step", "2")
            .build()
            .to_html()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_every_variant_combination_is_distinct() {
    let mut seen = HashSet::new();
    for tone in Tone::ALL {
        for impact in Impact::ALL {
            for shape in Shape::ALL {
                for size in Size::ALL {
                    let class = button("x")
                        .tone(tone)
                        .impact(impact)
                        .shape(shape)
                        .size(size)
                        .classes();
                    assert!(
                        seen.insert(class.clone()),
                        "({tone}, {impact}, {shape}, {size}) should have unique classes: {class}"
                    );
                    assert_eq!(
                        class,
                        merge([class.as_str()]),
                        "({tone}, {impact}, {shape}, {size}) classes should be merge stable"
                    );
                }
            }
        }
    }
    assert_eq!(seen.len(), 4 * 3 * 3 * 3);
}

#[test]
fn test_disabled_button() {
    let element = button("Save").disabled(true).build();
    assert!(element.has_flag("disabled"));
    let class = element.attr_str("class").unwrap_or_default();
    assert!(class.contains("opacity-50"));
    assert!(class.contains("cursor-not-allowed"));

    let enabled = button("Save").build();
    assert!(enabled.get_attr("disabled").is_none());
    let class = enabled.attr_str("class").unwrap_or_default();
    assert!(!class.contains("opacity-50"));
}

#[test]
fn test_loading_button_gets_spinner_and_aria_busy() {
    let element = button("Save").loading(true).build();
    assert_eq!(element.attr_str("aria-busy"), Some("true"));
    let class = element.attr_str("class").unwrap_or_default();
    assert!(class.contains("cursor-wait"));

    // Children come first, then exactly one decorative spinner.
    let children = element.child_nodes();
    assert_eq!(children.len(), 2);
    match &children[0] {
        Node::Text(text) => assert_eq!(text, "Save"),
        Node::Element(_) => panic!("expected the label ahead of the spinner"),
    }
    match &children[1] {
        Node::Element(spinner) => {
            assert_eq!(spinner.tag(), "span");
            assert_eq!(spinner.attr_str("aria-hidden"), Some("true"));
            let spinner_class = spinner.attr_str("class").unwrap_or_default();
            assert!(spinner_class.contains("animate-spin"));
        }
        Node::Text(text) => panic!("expected spinner element, found text {text:?}"),
    }

    let idle = button("Save").build();
    assert_eq!(idle.child_nodes().len(), 1);
    assert!(idle.get_attr("aria-busy").is_none());
}

#[test]
fn test_caller_override_wins_its_slot_only() {
    let class = button("Go").class("bg-emerald-600 px-8").classes();
    assert!(class.contains("bg-emerald-600"));
    assert!(class.contains("px-8"));
    assert!(!class.contains("bg-indigo-600"), "tone background replaced: {class}");
    assert!(!class.contains("px-4"), "size x padding replaced: {class}");
    // Untouched slots stay.
    assert!(class.contains("py-2"));
    assert!(class.contains("rounded-md"));
    assert!(class.contains("hover:bg-indigo-500"), "hover slot untouched: {class}");
}

#[test]
fn test_custom_classes_pass_through() {
    let class = button("Go").class("analytics-cta").classes();
    assert!(class.ends_with("analytics-cta"));
}

#[test]
fn test_passthrough_attributes_render_verbatim() {
    let html = button("Open")
        .attr("id", "menu-trigger")
        .attr("data-state", "closed")
        .attr("aria-haspopup", "menu")
        .attr("hx-post", "/toggle")
        .build()
        .to_html();
    assert!(html.contains(r#"id="menu-trigger""#));
    assert!(html.contains(r#"data-state="closed""#));
    assert!(html.contains(r#"aria-haspopup="menu""#));
    assert!(html.contains(r#"hx-post="/toggle""#));
}

#[test]
fn test_passthrough_disabled_survives_unless_builder_sets_it() {
    // The builder only claims the attribute while its own flag is on.
    let forwarded = button("Save").attr("disabled", true).build();
    assert!(forwarded.has_flag("disabled"));

    let claimed = button("Save").attr("disabled", false).disabled(true).build();
    assert!(claimed.has_flag("disabled"));
    assert_eq!(claimed.to_html().matches(" disabled").count(), 1);
}

#[test]
fn test_label_text_is_escaped() {
    let html = button("Ben & Jerry's <首页>").build().to_html();
    assert!(html.contains("Ben &amp; Jerry's &lt;首页&gt;"));
    assert!(!html.contains("<首页>"));
}

#[test]
fn test_attribute_values_are_escaped() {
    let html = button("Go")
        .attr("data-note", r#"5 < 6 & "quoted""#)
        .build()
        .to_html();
    assert!(html.contains(r#"data-note="5 &lt; 6 &amp; &quot;quoted&quot;""#));
}

#[test]
fn test_extra_children_follow_the_label() {
    let element = button("Next")
        .child(span().class("text-xs").child("→"))
        .build();
    let children = element.child_nodes();
    assert_eq!(children.len(), 2);
    assert!(matches!(&children[0], Node::Text(t) if t == "Next"));
    assert!(matches!(&children[1], Node::Element(e) if e.tag() == "span"));
}

#[test]
fn test_empty_button_carries_no_text_node() {
    let element = Button::empty()
        .child(span().attr("aria-hidden", "true").child("×"))
        .build();
    assert_eq!(element.child_nodes().len(), 1);
}

#[test]
fn test_button_splices_into_maud_pages() {
    let page = html! {
        div class="flex gap-4" {
            (button("Confirm").tone(Tone::Success))
            (button("Cancel").impact(Impact::Bordered))
        }
    };
    let html = page.into_string();
    assert!(html.contains("bg-emerald-600"));
    assert!(html.contains("border-indigo-600"));
}

#[test]
fn test_variants_parse_from_config_strings() {
    let tone: Tone = "danger".parse().unwrap();
    let impact: Impact = "light".parse().unwrap();
    let size: Size = "lg".parse().unwrap();
    let class = button("Remove")
        .tone(tone)
        .impact(impact)
        .size(size)
        .classes();
    assert!(class.contains("bg-red-50"));
    assert!(class.contains("px-6"));

    let err = "enormous".parse::<Size>().unwrap_err();
    assert_eq!(err.to_string(), "unknown size `enormous`, expected one of: sm, md, lg");
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use super::*;

    #[test]
    fn test_variant_axes_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Tone::Danger).unwrap(), r#""danger""#);
        assert_eq!(serde_json::to_string(&Impact::Bordered).unwrap(), r#""bordered""#);
        assert_eq!(serde_json::to_string(&Shape::Pill).unwrap(), r#""pill""#);
        assert_eq!(serde_json::to_string(&Size::Lg).unwrap(), r#""lg""#);
    }

    #[test]
    fn test_variant_axes_deserialize() {
        let tone: Tone = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(tone, Tone::Warning);
        assert!(serde_json::from_str::<Tone>(r#""primary""#).is_err());
    }
}
