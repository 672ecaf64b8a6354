//! Timing for the simulator.
//!
//! These use `std::time::Duration` and `std::thread`, which are not available
//! in `no_std`, so they live here rather than in the common crate.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Window refresh interval (~50 FPS) while the overlay is on screen.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Blocking delay backed by `thread::sleep`.
#[derive(Clone, Copy, Default, Debug)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
