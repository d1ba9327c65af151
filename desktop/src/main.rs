#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, MonitorRuntime};
use ui::core::theme::ThemeMode;
use ui::views::{About, Monitor};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Monitor {},
    #[route("/about")]
    About {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Pulsegrid – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_monitor(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Monitor {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Global reactive language code signal (mirrors web approach).
    // AppNavbar (shared) will update this via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register localized navigation builder (desktop)
    register_nav(NavBuilder {
        monitor: nav_monitor,
        about: nav_about,
    });

    // Engine, theme and redraw epoch shared by every route.
    ui::components::provide_app_state();
    let theme = use_context::<Signal<ThemeMode>>();

    // Runtime maximize fallback (in case initial builder maximize is
    // ignored by the WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for
        // desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div forces a full remount on language change; the
        // hidden marker keeps an explicit reactive dependency on the signal.
        div { class: "app {theme().css_class()}",
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            MonitorRuntime {}
            Router::<Route> { }
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
