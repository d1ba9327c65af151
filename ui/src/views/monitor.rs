//! Monitor route: the patient grid and the per-patient detail screen.
//!
//! The engine signal is the single source of truth; every handler mutates
//! it synchronously and the tick loop re-renders whatever is visible. The
//! trend series travels with the `Detail` view state, so it only changes
//! when navigation or the period selector regenerates it.

use dioxus::prelude::*;

use crate::charting::trend::{Period, TrendStats};
use crate::components::export_panel::SnapshotPanel;
use crate::components::ring::SpO2Ring;
use crate::components::spark::Sparkline;
use crate::components::trend_chart::TrendChart;
use crate::core::format;
use crate::monitor::{AlertTier, DefaultEngine, ViewState};
use crate::t;

#[component]
pub fn Monitor() -> Element {
    let mut engine = use_context::<Signal<DefaultEngine>>();

    // Router tab navigation unmounts this view; treat that as the external
    // tab-change notification and drop any open detail.
    use_drop(move || {
        engine.with_mut(|eng| eng.tab_changed());
    });

    let banner = engine.with(|eng| eng.emergency());
    let view = engine.with(|eng| eng.view().clone());

    rsx! {
        section { class: "page page-monitor",
            if let Some(alert) = banner {
                div { class: "emergency-banner", role: "alert",
                    span { class: "emergency-banner__icon", "⚠" }
                    span { class: "emergency-banner__text", "{alert.banner_text()}" }
                }
            }

            match view {
                ViewState::Grid => rsx! { GridScreen {} },
                ViewState::Detail { patient_id, series } => rsx! {
                    DetailScreen {
                        patient_id,
                        samples: series.samples.clone(),
                        period: series.period,
                        stats: series.stats,
                    }
                },
            }
        }
    }
}

#[component]
fn GridScreen() -> Element {
    let engine = use_context::<Signal<DefaultEngine>>();

    let stamp = format::clock_stamp();
    let live_label = t!("monitor-live-label", stamp = stamp);

    let cards: Vec<CardView> = engine.with(|eng| eng.store().iter().map(CardView::of).collect());

    rsx! {
        header { class: "monitor__header",
            h1 { {t!("monitor-title")} }
            span { class: "monitor__live", "{live_label}" }
        }

        div { class: "patient-grid",
            for card in cards.into_iter() {
                {render_card(card, engine)}
            }
        }
    }
}

/// Snapshot of one patient for a grid card, taken inside a single borrow
/// of the engine.
struct CardView {
    id: String,
    name: String,
    age: u8,
    spo2: i32,
    pulse: i32,
    tier: AlertTier,
}

impl CardView {
    fn of(patient: &crate::monitor::Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.clone(),
            age: patient.age,
            spo2: patient.rounded_spo2(),
            pulse: patient.rounded_pulse(),
            tier: patient.tier,
        }
    }
}

fn render_card(card: CardView, engine: Signal<DefaultEngine>) -> Element {
    let CardView {
        id,
        name,
        age,
        spo2,
        pulse,
        tier,
    } = card;
    let card_id = id.clone();
    let mut engine = engine;

    rsx! {
        button {
            key: "{id}",
            r#type: "button",
            class: "patient-card",
            onclick: move |_| engine.with_mut(|eng| eng.open_detail(&card_id)),

            div { class: "patient-card__header",
                span { class: "patient-card__name", "{name}" }
                span { class: "patient-card__age", "{age}" }
            }

            div { class: "patient-card__vitals",
                div { class: "patient-card__metric",
                    span {
                        class: "patient-card__spo2",
                        style: "color: {tier.value_color()}",
                        "{spo2}"
                    }
                    span { class: "patient-card__unit", "SpO2 %" }
                }
                div { class: "patient-card__metric",
                    span { class: "patient-card__pulse", "{pulse}" }
                    span { class: "patient-card__unit", "bpm" }
                }
            }

            Sparkline { patient_id: id.clone() }

            span { class: "{tier.card_class()}", "{tier.card_label()}" }
        }
    }
}

#[component]
fn DetailScreen(
    patient_id: String,
    samples: Vec<f64>,
    period: Period,
    stats: TrendStats,
) -> Element {
    let mut engine = use_context::<Signal<DefaultEngine>>();

    // Live widgets (ring, badge, alert) re-derive from patient state on
    // every tick while this screen is open.
    let patient = engine.with(|eng| eng.store().get(&patient_id).cloned());
    let Some(patient) = patient else {
        return rsx! {
            p { class: "detail-missing", "Patient unavailable." }
        };
    };

    let spo2 = patient.rounded_spo2();
    let pulse = patient.rounded_pulse();
    let tier = patient.tier;

    rsx! {
        div { class: "detail",
            header { class: "detail__header",
                button {
                    r#type: "button",
                    class: "detail__back",
                    onclick: move |_| engine.with_mut(|eng| eng.close_detail()),
                    "‹ "
                    {t!("monitor-back")}
                }
                div { class: "detail__identity",
                    h1 { "{patient.name}" }
                    span { class: "detail__age", "Age {patient.age}" }
                }
                span { class: "{tier.badge_class()}", "{tier.badge_label()}" }
            }

            div { class: "detail__vitals",
                SpO2Ring { spo2 }
                div { class: "detail-pulse",
                    span { class: "detail-pulse__value", "{pulse}" }
                    span { class: "detail-pulse__unit", "bpm" }
                }
            }

            div { class: "{tier.detail_class()}",
                span { class: "detail-alert__icon", "{tier.detail_icon()}" }
                span { class: "detail-alert__text", "{tier.detail_message(spo2)}" }
            }

            section { class: "detail-chart",
                div { class: "detail-chart__header",
                    div {
                        h2 { "SpO2 trend" }
                        span { class: "detail-chart__subtitle", "{period.title()}" }
                    }
                    div { class: "period-selector", role: "tablist",
                        for p in Period::ALL {
                            button {
                                key: "{p.short_label()}",
                                r#type: "button",
                                class: "period-btn",
                                class: if p == period { "period-btn--active" },
                                onclick: move |_| engine.with_mut(|eng| eng.select_period(p)),
                                "{p.short_label()}"
                            }
                        }
                    }
                }

                TrendChart { samples: samples.clone() }

                ul { class: "detail-stats",
                    li {
                        span { class: "detail-stats__label", "Average" }
                        span { class: "detail-stats__value", "{format::format_percent(stats.avg)}" }
                    }
                    li {
                        span { class: "detail-stats__label", "Lowest" }
                        span { class: "detail-stats__value", "{format::format_percent(stats.min)}" }
                    }
                    li {
                        span { class: "detail-stats__label", "Highest" }
                        span { class: "detail-stats__value", "{format::format_percent(stats.max)}" }
                    }
                }
            }

            SnapshotPanel {
                patient_name: patient.name.clone(),
                period,
                samples,
                stats,
            }
        }
    }
}
