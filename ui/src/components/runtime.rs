//! Headless monitor runtime: provides the shared app state and drives the
//! simulator tick for the lifetime of the app, independent of which route
//! is showing.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::theme::ThemeMode;
use crate::core::timing;
use crate::monitor::{DefaultEngine, TICK_MS};

/// Bumped whenever charts must re-measure their canvases (window resize).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawEpoch(pub u32);

impl RedrawEpoch {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Install the app-wide state: engine, theme mode and redraw epoch.
/// Platforms call this once at the top of their root component.
pub fn provide_app_state() {
    use_context_provider(|| Signal::new(DefaultEngine::from_entropy()));
    use_context_provider(|| Signal::new(ThemeMode::default()));
    use_context_provider(|| Signal::new(RedrawEpoch::default()));
}

/// Invisible component that owns the tick loop (and, on web, the window
/// resize listener). Mount it once next to the router.
#[component]
pub fn MonitorRuntime() -> Element {
    let mut engine = use_context::<Signal<DefaultEngine>>();
    let mut epoch = use_context::<Signal<RedrawEpoch>>();

    // The simulator cadence. Event handlers and this loop interleave on the
    // framework's single-threaded scheduler, so a tick never overlaps a
    // click handler mid-mutation.
    use_future(move || async move {
        loop {
            timing::sleep_ms(TICK_MS).await;
            engine.with_mut(|eng| eng.tick());
        }
    });

    // Resize notifications funnel through a channel so the raw DOM callback
    // never touches a signal outside the runtime.
    let resize_queue = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            epoch.with_mut(|epoch| epoch.bump());
        }
    });

    #[cfg(target_arch = "wasm32")]
    use_hook(|| {
        use futures_channel::mpsc::UnboundedSender;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let tx: UnboundedSender<()> = resize_queue.tx();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let _ = tx.unbounded_send(());
        });
        if let Some(window) = web_sys::window() {
            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .ok();
        }
        // Listener lives for the page lifetime.
        closure.forget();
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = &resize_queue;

    rsx! {
        div { style: "display:none", aria_hidden: "true" }
    }
}
