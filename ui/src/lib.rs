//! Shared UI crate for Pulsegrid. Most cross-platform logic and views live here.

pub mod charting;
pub mod core;
pub mod i18n;
pub mod monitor;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Headless tick/resize driver and shared app state (components/runtime.rs)
    pub mod runtime;
    pub use runtime::provide_app_state;
    pub use runtime::MonitorRuntime;
    pub use runtime::RedrawEpoch;

    // Chart hosts and detail widgets
    pub mod export_panel;
    pub mod ring;
    pub mod spark;
    pub mod trend_chart;
}
