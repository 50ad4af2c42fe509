//! The two roles around one [`EventFlag`]: an edge handler that records a
//! press and a poller that consumes it and toggles an output.
//!
//! # Overview
//! - [`EdgeHandler::on_edge`] is the entire interrupt body: acknowledge the
//!   hardware latch, record the event, return. Bounded work, no blocking, no
//!   output writes.
//! - [`TogglePoller::poll_once`] is one main-loop iteration: take-and-clear,
//!   then act. The clear is part of the atomic take, so a press landing right
//!   after it is observed on the next iteration instead of being dropped.
//! - Rapid presses between polls coalesce into a single toggle.
//!
//! # Semantics
//! The handler clears the hardware latch *before* raising, so an edge arriving
//! during handler execution re-latches and re-enters rather than being absorbed
//! by the acknowledgment. Either way it can only coalesce; delivery stays
//! at-most-once per poll.

use crate::event_flag::{Consumer, Source};
use crate::gpio::{EdgeControl, OutputPin};

/// Interrupt-side role: owns the source handle and the pin's edge-interrupt
/// surface. Never touches any output.
pub struct EdgeHandler<'a, C: EdgeControl> {
    events: Source<'a>,
    latch: C,
}

impl<'a, C: EdgeControl> EdgeHandler<'a, C> {
    pub fn new(events: Source<'a>, latch: C) -> Self {
        Self { events, latch }
    }

    /// The whole handler body, to be called from the platform's interrupt
    /// entry. Returns `false` when the event coalesced into one already
    /// pending.
    #[inline]
    pub fn on_edge(&mut self) -> bool {
        self.latch.clear_pending();
        self.events.raise()
    }

    /// The underlying edge-interrupt surface, for re-triggering or masking
    /// from platform code.
    #[inline]
    pub fn latch_mut(&mut self) -> &mut C {
        &mut self.latch
    }
}

/// Loop-side role: owns the consumer handle and the output it toggles.
pub struct TogglePoller<'a, O: OutputPin> {
    events: Consumer<'a>,
    output: O,
}

impl<'a, O: OutputPin> TogglePoller<'a, O> {
    pub fn new(events: Consumer<'a>, output: O) -> Self {
        Self { events, output }
    }

    /// One consumer iteration. Toggles the output and returns true if an
    /// event was pending; an idle poll performs no writes at all.
    #[inline]
    pub fn poll_once(&mut self) -> bool {
        if self.events.take() {
            self.output.toggle();
            true
        } else {
            false
        }
    }

    /// Whether an unconsumed event is pending.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.events.is_pending()
    }

    /// Poll forever. `idle` runs only on empty polls; firmware typically puts
    /// a wait-for-interrupt there.
    pub fn run(mut self, mut idle: impl FnMut()) -> ! {
        loop {
            if !self.poll_once() {
                idle();
            }
        }
    }

    #[inline]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[inline]
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
