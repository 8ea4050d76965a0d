//! Button presses latched by the edge-triggered interrupts.
//!
//! Each button owns a wrapping press counter written only by its interrupt
//! handler. The main loop keeps its own acknowledged copy and treats the
//! difference as pending presses, so neither side ever writes the other's
//! state. With the `atomic` feature the counter is bumped with a single
//! read-modify-write, otherwise with a load/store pair, which is sound as
//! long as the handler of one button cannot preempt itself.

use core::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug)]
pub struct InputLatch {
    jumps: AtomicU8,
    restarts: AtomicU8,
}

impl InputLatch {
    pub const fn new() -> Self {
        Self {
            jumps: AtomicU8::new(0),
            restarts: AtomicU8::new(0),
        }
    }

    /// Jump button interrupt callback
    #[inline]
    pub fn press_jump(&self) {
        bump(&self.jumps);
    }

    /// Restart button interrupt callback
    #[inline]
    pub fn press_restart(&self) {
        bump(&self.restarts);
    }

    /// Main-loop view over the latch
    pub fn reader(&self) -> LatchReader<'_> {
        LatchReader {
            latch: self,
            jumps_seen: self.jumps.load(Ordering::Acquire),
            restarts_seen: self.restarts.load(Ordering::Acquire),
        }
    }
}

#[cfg(feature = "atomic")]
#[inline]
fn bump(counter: &AtomicU8) {
    counter.fetch_add(1, Ordering::Release);
}

#[cfg(not(feature = "atomic"))]
#[inline]
fn bump(counter: &AtomicU8) {
    let value = counter.load(Ordering::Relaxed);
    counter.store(value.wrapping_add(1), Ordering::Release);
}

/// Consumes the presses latched since the previous poll
#[derive(Debug)]
pub struct LatchReader<'a> {
    latch: &'a InputLatch,
    jumps_seen: u8,
    restarts_seen: u8,
}

impl<'a> LatchReader<'a> {
    /// Number of jump presses since the previous call
    pub fn take_jumps(&mut self) -> u8 {
        take(&self.latch.jumps, &mut self.jumps_seen)
    }

    /// Whether restart was pressed since the previous call
    pub fn take_restart(&mut self) -> bool {
        take(&self.latch.restarts, &mut self.restarts_seen) > 0
    }
}

fn take(counter: &AtomicU8, seen: &mut u8) -> u8 {
    let pressed = counter.load(Ordering::Acquire);
    let pending = pressed.wrapping_sub(*seen);
    *seen = pressed;
    pending
}
