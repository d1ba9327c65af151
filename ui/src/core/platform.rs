//! Platform detection and task-spawning glue.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::Web
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::Native
        }
    }

    /// Stable token recorded in exported snapshots.
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

/// Fire-and-forget a future on the browser microtask queue.
///
/// Only exists on wasm; native callers run their (short) export futures to
/// completion with `futures::executor::block_on` instead.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
