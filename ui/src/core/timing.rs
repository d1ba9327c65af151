//! Timer plumbing shared by the monitor runtime.
//!
//! The tick loop never touches wall-clock APIs directly; it awaits
//! `sleep_ms` so the cadence lives in one place and unit tests can drive
//! `MonitorEngine::tick` synchronously without any timer at all.

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
