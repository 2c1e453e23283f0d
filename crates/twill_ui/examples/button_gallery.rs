//! Renders every button variant to a static HTML page on stdout.
//!
//! ```sh
//! cargo run -p twill_ui --example button_gallery > gallery.html
//! ```

use maud::{html, Markup, DOCTYPE};
use twill_ui::prelude::*;

fn section(title: &str, body: Markup) -> Markup {
    html! {
        section class="mb-10" {
            h2 class="mb-4 text-xl font-semibold text-slate-900" { (title) }
            div class="flex flex-wrap items-center gap-4" { (body) }
        }
    }
}

fn labeled(caption: &str, inner: Markup) -> Markup {
    html! {
        div class="flex flex-col items-center gap-2" {
            (inner)
            span class="text-xs text-slate-500" { (caption) }
        }
    }
}

fn tones_by_impact(impact: Impact) -> Markup {
    html! {
        @for tone in Tone::ALL {
            (labeled(tone.as_str(), html! {
                (button(capitalize(tone.as_str())).tone(tone).impact(impact))
            }))
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Twill button gallery" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-slate-50 p-10" {
                h1 class="mb-8 text-2xl font-bold text-slate-900" { "Buttons" }

                (section("Bold", tones_by_impact(Impact::Bold)))
                (section("Light", tones_by_impact(Impact::Light)))
                (section("Bordered", tones_by_impact(Impact::Bordered)))

                (section("Shapes", html! {
                    @for shape in Shape::ALL {
                        (labeled(shape.as_str(), html! {
                            (button("Continue").shape(shape))
                        }))
                    }
                }))

                (section("Sizes", html! {
                    @for size in Size::ALL {
                        (labeled(size.as_str(), html! {
                            (button("Continue").size(size))
                        }))
                    }
                }))

                (section("States", html! {
                    (labeled("disabled", html! {
                        (button("Unavailable").disabled(true))
                    }))
                    (labeled("loading", html! {
                        (button("Saving").loading(true))
                    }))
                    (labeled("override", html! {
                        (button("Retinted").class("bg-emerald-600 hover:bg-emerald-500"))
                    }))
                }))
            }
        }
    };

    println!("{}", page.into_string());
}
