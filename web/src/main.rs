use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, MonitorRuntime};
use ui::core::theme::ThemeMode;
use ui::views::{About, Monitor};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Monitor {},
    #[route("/about")]
    About {},
}

// Single shared theme, inlined so web and desktop stay pixel-identical.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_monitor(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Monitor {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            monitor: nav_monitor,
            about: nav_about,
        });
    }

    // Global reactive language code signal; AppNavbar updates it via
    // context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Engine, theme and redraw epoch shared by every route.
    ui::components::provide_app_state();
    let theme = use_context::<Signal<ThemeMode>>();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: "app {theme().css_class()}",
            MonitorRuntime {}
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
