//! Per-patient sparkline host.
//!
//! On web the component owns a canvas slot and repaints it from effects;
//! everywhere else the same scene is serialized to inline SVG, which the
//! webview scales with the card layout.

use dioxus::prelude::*;

use crate::core::theme::ThemeMode;
use crate::monitor::DefaultEngine;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::charting::canvas::CanvasSlot;
use crate::charting::sparkline;
#[cfg(target_arch = "wasm32")]
use crate::components::runtime::RedrawEpoch;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn Sparkline(patient_id: String) -> Element {
    let engine = use_context::<Signal<DefaultEngine>>();
    let mode = use_context::<Signal<ThemeMode>>();
    let epoch = use_context::<Signal<RedrawEpoch>>();

    let slot = use_hook(|| Rc::new(CanvasSlot::sparkline(&patient_id)));

    // Repaint whenever the engine ticks or the theme flips.
    {
        let slot = slot.clone();
        let patient_id = patient_id.clone();
        use_effect(move || {
            let mode = mode();
            let data = engine.with(|eng| {
                eng.store()
                    .get(&patient_id)
                    .map(|p| (p.history.to_vec(), p.color.clone()))
            });
            paint(&slot, data, mode);
        });
    }

    // Re-measure after a window resize. Peeked reads keep this effect
    // subscribed to the epoch alone.
    {
        let slot = slot.clone();
        let patient_id = patient_id.clone();
        use_effect(move || {
            let _ = epoch();
            slot.invalidate();
            let mode = *mode.peek();
            let data = {
                let eng = engine.peek();
                eng.store()
                    .get(&patient_id)
                    .map(|p| (p.history.to_vec(), p.color.clone()))
            };
            paint(&slot, data, mode);
        });
    }

    rsx! {
        canvas { id: "spark-{patient_id}", class: "patient-spark" }
    }
}

#[cfg(target_arch = "wasm32")]
fn paint(slot: &CanvasSlot, data: Option<(Vec<f64>, String)>, mode: ThemeMode) {
    let Some((width, height)) = slot.logical_size() else {
        return;
    };
    let scene =
        data.and_then(|(history, color)| sparkline::build(&history, &color, mode, width, height));
    match scene {
        Some(scene) => slot.paint(&scene),
        None => slot.clear(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn Sparkline(patient_id: String) -> Element {
    use crate::charting::svg;

    // Logical design size; the stylesheet scales the viewBox to the card.
    const WIDTH: f64 = 140.0;
    const HEIGHT: f64 = 36.0;

    let engine = use_context::<Signal<DefaultEngine>>();
    let mode = use_context::<Signal<ThemeMode>>();

    let mode_value = mode();
    let markup = engine.with(|eng| {
        eng.store()
            .get(&patient_id)
            .and_then(|p| {
                sparkline::build(&p.history.to_vec(), &p.color, mode_value, WIDTH, HEIGHT)
            })
            .map(|scene| svg::to_svg(&scene))
            .unwrap_or_default()
    });

    rsx! {
        div { class: "patient-spark", dangerous_inner_html: "{markup}" }
    }
}
