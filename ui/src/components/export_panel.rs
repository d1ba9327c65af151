//! Snapshot panel on the detail screen: PNG/JSON downloads plus a
//! copy-stats shortcut, with an inline status line.

use dioxus::prelude::*;

use crate::charting::export::{self, SnapshotPayload};
use crate::charting::trend::{Period, TrendStats};
use crate::core::platform::Platform;
use crate::core::theme::ThemeMode;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;

#[derive(Clone, Debug, PartialEq)]
enum SnapshotStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn SnapshotPanel(
    patient_name: String,
    period: Period,
    samples: Vec<f64>,
    stats: TrendStats,
) -> Element {
    let mode = use_context::<Signal<ThemeMode>>();

    let status = use_signal(|| SnapshotStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        SnapshotStatus::Idle => None,
        SnapshotStatus::Working(label) => {
            Some(("detail-snapshot__status".to_string(), format!("{label}…")))
        }
        SnapshotStatus::Done(message) => Some((
            "detail-snapshot__status detail-snapshot__status--success".to_string(),
            format!("✅ {message}"),
        )),
        SnapshotStatus::Error(err) => Some((
            "detail-snapshot__status detail-snapshot__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let payload = SnapshotPayload {
        patient: patient_name.clone(),
        period,
        samples: samples.clone(),
        stats,
        platform: Platform::current().label(),
    };

    let png_handler = {
        let samples = samples.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            let Some(markup) = export::snapshot_svg(&samples, *mode.peek()) else {
                status_signal.set(SnapshotStatus::Error("Not enough data to render".into()));
                return;
            };
            busy_signal.set(true);
            status_signal.set(SnapshotStatus::Working("Preparing PNG"));

            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    apply_outcome(
                        export::export_png(markup, "pulsegrid-trend").await,
                        "PNG downloaded",
                        status_signal,
                        busy_signal,
                    );
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome =
                    futures::executor::block_on(export::export_png(markup, "pulsegrid-trend"));
                apply_outcome(outcome, "PNG saved", status_signal, busy_signal);
            }
        }
    };

    let json_handler = {
        let payload = payload.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(SnapshotStatus::Working("Preparing JSON"));
            let payload = payload.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    apply_outcome(
                        export::export_json(&payload, "pulsegrid-trend").await,
                        "JSON downloaded",
                        status_signal,
                        busy_signal,
                    );
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome =
                    futures::executor::block_on(export::export_json(&payload, "pulsegrid-trend"));
                apply_outcome(outcome, "JSON saved", status_signal, busy_signal);
            }
        }
    };

    let copy_handler = {
        let line = payload.stats_line();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(SnapshotStatus::Working("Copying"));
            let line = line.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    match export::copy_text(line).await {
                        Ok(()) => status_signal.set(SnapshotStatus::Done("Stats copied".into())),
                        Err(err) => status_signal.set(SnapshotStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                match futures::executor::block_on(export::copy_text(line)) {
                    Ok(()) => status_signal.set(SnapshotStatus::Done("Stats copied".into())),
                    Err(err) => status_signal.set(SnapshotStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    rsx! {
        div { class: "detail-snapshot",
            div { class: "detail-snapshot__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: png_handler,
                    "Export PNG"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: json_handler,
                    "Export JSON"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: copy_handler,
                    "Copy stats"
                }
            }
            if let Some((class, message)) = feedback {
                span { class: "{class}", "{message}" }
            }
        }
    }
}

fn apply_outcome(
    outcome: Result<Option<String>, String>,
    verb: &str,
    mut status: Signal<SnapshotStatus>,
    mut busy: Signal<bool>,
) {
    match outcome {
        Ok(Some(path)) => status.set(SnapshotStatus::Done(format!("{verb} to {path}"))),
        Ok(None) => status.set(SnapshotStatus::Done(verb.to_string())),
        Err(err) => status.set(SnapshotStatus::Error(err)),
    }
    busy.set(false);
}
