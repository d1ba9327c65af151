//! SpO2 progress ring for the detail screen.

use dioxus::prelude::*;

const RADIUS: f64 = 54.0;
const CIRCUMFERENCE: f64 = std::f64::consts::TAU * RADIUS;

/// Fraction of the ring to fill: 80% maps to empty, 100% to full.
pub fn ring_fraction(rounded_spo2: i32) -> f64 {
    ((rounded_spo2 as f64 - 80.0) / 20.0).clamp(0.0, 1.0)
}

#[component]
pub fn SpO2Ring(spo2: i32) -> Element {
    let dash = ring_fraction(spo2) * CIRCUMFERENCE;
    let dash_attr = format!("{dash:.1} {CIRCUMFERENCE:.1}");

    rsx! {
        div { class: "detail-ring",
            svg {
                class: "detail-ring__svg",
                view_box: "0 0 120 120",
                defs {
                    linearGradient {
                        id: "ring-gradient",
                        x1: "0%",
                        y1: "0%",
                        x2: "100%",
                        y2: "100%",
                        stop { "offset": "0%", "stop-color": "#30d158" }
                        stop { "offset": "100%", "stop-color": "#64d2ff" }
                    }
                }
                circle {
                    class: "detail-ring__track",
                    cx: "60",
                    cy: "60",
                    r: "54",
                    fill: "none",
                    stroke_width: "8",
                }
                circle {
                    class: "detail-ring__fill",
                    cx: "60",
                    cy: "60",
                    r: "54",
                    fill: "none",
                    stroke: "url(#ring-gradient)",
                    stroke_width: "8",
                    stroke_linecap: "round",
                    stroke_dasharray: "{dash_attr}",
                    transform: "rotate(-90 60 60)",
                }
            }
            div { class: "detail-ring__value",
                span { class: "detail-ring__number", "{spo2}" }
                span { class: "detail-ring__unit", "SpO2 %" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_saturates_at_the_scale_edges() {
        assert_eq!(ring_fraction(80), 0.0);
        assert_eq!(ring_fraction(100), 1.0);
        assert_eq!(ring_fraction(70), 0.0);
        assert_eq!(ring_fraction(110), 1.0);
    }

    #[test]
    fn fraction_is_linear_between() {
        assert!((ring_fraction(90) - 0.5).abs() < 1e-9);
        assert!((ring_fraction(95) - 0.75).abs() < 1e-9);
    }
}
