use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    // Subscribe to the global language code (if provided) so we re-render
    // on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-tagline-short")} }
            p { {crate::t!("about-intro-1")} }

            ul { class: "page-about__features",
                li { {crate::t!("about-feature-sim")} }
                li { {crate::t!("about-feature-alerts")} }
                li { {crate::t!("about-feature-charts")} }
            }
            p { class: "page-about__cta",
                {crate::t!("about-cta")}
            }
        }
    }
}
