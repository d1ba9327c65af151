use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, MonitorRuntime};
use ui::core::theme::ThemeMode;
use ui::views::{About, Monitor};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Monitor {},
    #[route("/about")]
    About {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_monitor(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Monitor {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        monitor: nav_monitor,
        about: nav_about,
    });

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

/// A mobile-specific Router around the shared `AppNavbar` component
/// which allows us to use the mobile-specific `Route` enum.
#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
