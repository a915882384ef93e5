//! Startup gate: optional blocking delay before the listener binds.

use std::time::Duration;

use crate::config::HealthFlags;

/// Block the calling thread for `delay` when `delay_startup` is set.
///
/// Runs before the listener binds, so nothing is served during the wait,
/// probes included. A sleep, not a spin loop - the starvation being simulated
/// is "listener not bound yet", which the sleep preserves without burning CPU.
pub fn startup_gate(flags: &HealthFlags, delay: Duration) {
    if !flags.delay_startup {
        return;
    }
    tracing::warn!(
        seconds = delay.as_secs(),
        "DELAY_STARTUP set, blocking before binding listener"
    );
    std::thread::sleep(delay);
}
