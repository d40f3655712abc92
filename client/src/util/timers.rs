//! Deferred and repeating callbacks on the browser event loop.
//!
//! Both helpers run on `spawn_local` + `gloo_timers::future::sleep`, the same
//! shape the page uses for any polling. Repeating loops stop through a shared
//! flag the owning component clears in `on_cleanup`. Without `hydrate` nothing
//! is scheduled.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness flag of a repeating loop.
#[derive(Clone, Debug)]
pub struct LoopHandle(Arc<AtomicBool>);

impl LoopHandle {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Stop the loop before its next tick.
    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}

/// Call `tick` every `ms` milliseconds until it returns `false` or the handle
/// is stopped.
pub fn every(ms: u32, tick: impl FnMut() -> bool + 'static) -> LoopHandle {
    let handle = LoopHandle::new();
    #[cfg(feature = "hydrate")]
    {
        let running = handle.clone();
        let mut tick = tick;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
                if !running.is_running() || !tick() {
                    running.stop();
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, tick);
    }
    handle
}
