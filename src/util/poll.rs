//! Cancellable fixed-cadence polling.
//!
//! DESIGN
//! ======
//! Each tick spawns its callback as an independent task instead of awaiting
//! it, so a slow request never delays or queues later ticks. The loop checks
//! a shared `PollSwitch` before every tick; component cleanup flips it off.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared on/off flag for a running poll loop.
#[derive(Clone, Debug)]
pub struct PollSwitch {
    alive: Arc<AtomicBool>,
}

impl Default for PollSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl PollSwitch {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the loop. It exits at its next wake-up; in-flight ticks finish.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Tick once immediately, then once per `interval` until `switch` stops.
///
/// `sleep` is the timer; `tick` must not block on the work it starts. Returns
/// the number of ticks fired.
pub async fn poll_loop<Sl, SlFut, T>(interval: Duration, switch: &PollSwitch, mut sleep: Sl, mut tick: T) -> u64
where
    Sl: FnMut(Duration) -> SlFut,
    SlFut: Future<Output = ()>,
    T: FnMut(),
{
    let mut ticks = 0;
    while switch.is_running() {
        tick();
        ticks += 1;
        sleep(interval).await;
    }
    log::debug!("poller stopped after {ticks} ticks");
    ticks
}

/// Run `tick` now and every `interval` on the browser timer, spawning each
/// call as its own task.
#[cfg(feature = "csr")]
pub fn spawn_poller<F, Fut>(interval: Duration, switch: PollSwitch, tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    leptos::task::spawn_local(async move {
        poll_loop(interval, &switch, gloo_timers::future::sleep, || leptos::task::spawn_local(tick())).await;
    });
}
