//! Detail trend chart host. Same split as the sparkline: canvas on web,
//! inline SVG elsewhere. The series arrives as a prop so the chart only
//! changes when navigation regenerates it, never on a tick.

use dioxus::prelude::*;

use crate::core::theme::ThemeMode;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::charting::canvas::CanvasSlot;
use crate::charting::trend;
#[cfg(target_arch = "wasm32")]
use crate::components::runtime::RedrawEpoch;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn TrendChart(samples: Vec<f64>) -> Element {
    let mode = use_context::<Signal<ThemeMode>>();
    let epoch = use_context::<Signal<RedrawEpoch>>();

    let slot = use_hook(|| Rc::new(CanvasSlot::trend()));

    // The prop isn't reactive by itself; mirror it into a signal so the
    // paint effects re-run when navigation swaps the series.
    let mut series = use_signal({
        let samples = samples.clone();
        move || samples
    });
    if *series.peek() != samples {
        series.set(samples);
    }

    {
        let slot = slot.clone();
        use_effect(move || {
            let mode = mode();
            let samples = series();
            paint(&slot, &samples, mode);
        });
    }

    {
        let slot = slot.clone();
        use_effect(move || {
            let _ = epoch();
            slot.invalidate();
            let samples = series.peek().clone();
            paint(&slot, &samples, *mode.peek());
        });
    }

    rsx! {
        canvas { id: "trend-canvas", class: "detail-chart__canvas" }
    }
}

#[cfg(target_arch = "wasm32")]
fn paint(slot: &CanvasSlot, samples: &[f64], mode: ThemeMode) {
    let Some((width, height)) = slot.logical_size() else {
        return;
    };
    match trend::build(samples, mode, width, height) {
        Some(scene) => slot.paint(&scene),
        None => slot.clear(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn TrendChart(samples: Vec<f64>) -> Element {
    use crate::charting::svg;

    const WIDTH: f64 = 640.0;
    const HEIGHT: f64 = 280.0;

    let mode = use_context::<Signal<ThemeMode>>();

    let markup = trend::build(&samples, mode(), WIDTH, HEIGHT)
        .map(|scene| svg::to_svg(&scene))
        .unwrap_or_default();

    rsx! {
        div { class: "detail-chart__canvas", dangerous_inner_html: "{markup}" }
    }
}
