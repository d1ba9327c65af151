use crate::core::theme::ThemeMode;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (shared across platforms)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// `AppNavbar` renders localized labels inside each supplied link.
///
/// Migration steps for a platform crate (desktop/web/mobile):
/// 1. Define functions returning nav links for the monitor and about routes.
/// 2. Call `ui::components::app_navbar::register_nav(builder)` before
///    rendering the root (e.g. at top of `App()`).
/// 3. Use `AppNavbar {}` with no manual nav link children.
pub struct NavBuilder {
    // Each closure must return a Link (or element styled as a nav link)
    // whose children are exactly the localized label string passed in.
    pub monitor: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code (if provided).
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let theme_ctx: Option<Signal<ThemeMode>> = try_use_context::<Signal<ThemeMode>>();
    let theme_icon = match theme_ctx.map(|t| t()) {
        Some(ThemeMode::Light) => "☾",
        _ => "☀",
    };

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let on_theme_toggle = move |_| {
        if let Some(mut theme) = theme_ctx {
            let next = theme().toggled();
            theme.set(next);
        }
    };

    // Build internal localized nav if a NavBuilder is registered; fall back
    // to any raw `children` passed (legacy) otherwise.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let monitor = (b.monitor)(&t!("nav-monitor"));
        let about = (b.about)(&t!("nav-about"));

        rsx! {
            nav { class: "navbar__links",
                {monitor}
                {about}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    let tagline = t!("tagline");
    let theme_label = t!("nav-theme-toggle");

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-pulse", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Pulsegrid" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__controls",
                    button {
                        r#type: "button",
                        class: "navbar__theme-toggle",
                        aria_label: "{theme_label}",
                        onclick: on_theme_toggle,
                        "{theme_icon}"
                    }

                    // Locale switcher
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
