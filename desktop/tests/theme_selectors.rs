#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the patient
  grid, the detail screen, and the snapshot panel) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (cards, banners, chart hosts, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".page {",
    ".theme-light",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Emergency banner
    ".emergency-banner",
    ".emergency-banner__icon",
    // Monitor grid & cards
    ".monitor__header",
    ".monitor__live",
    ".patient-grid",
    ".patient-card",
    ".patient-card__vitals",
    ".patient-card__spo2",
    ".patient-spark",
    ".patient-alert-text",
    ".alert-warning",
    ".alert-active",
    // Detail screen
    ".detail__header",
    ".detail__back",
    ".detail-status--critical",
    ".detail-status--warning",
    ".detail-status--stable",
    ".detail-ring",
    ".detail-ring__fill",
    ".detail-pulse__value",
    ".detail-alert",
    ".alert-red",
    ".alert-yellow",
    ".alert-green",
    // Detail chart
    ".detail-chart",
    ".detail-chart__canvas",
    ".period-selector",
    ".period-btn",
    ".period-btn--active",
    ".detail-stats",
    ".detail-stats__value",
    // Snapshot panel
    ".detail-snapshot",
    ".detail-snapshot__actions",
    ".detail-snapshot__status",
    // Media query token (sanity check responsive block exists)
    "@media",
];

#[test]
fn required_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }

    assert!(
        missing.is_empty(),
        "Unified theme is missing selectors relied upon by desktop components:\n  {}",
        missing.join("\n  ")
    );
}
