//! Signaling primitives for no-std embedded targets.
//!
//! # Highlights
//! - One-slot SPSC event flag for interrupt-to-main-loop hand-off.
//! - No allocation, no dynamic dispatch, no unsafe.
//! - Fast sources coalesce into slow consumers: at most one event is pending.
//!
//! # Quick start
//! ```
//! use ph_signal::{Edge, EdgeControl, EdgeHandler, EventFlag, OutputPin, TogglePoller};
//!
//! struct Led(bool);
//! impl OutputPin for Led {
//!     fn set_high(&mut self) { self.0 = true; }
//!     fn set_low(&mut self) { self.0 = false; }
//!     fn toggle(&mut self) { self.0 = !self.0; }
//! }
//!
//! struct Exti;
//! impl EdgeControl for Exti {
//!     fn set_trigger(&mut self, _edge: Edge) {}
//!     fn mask(&mut self) {}
//!     fn unmask(&mut self) {}
//!     fn clear_pending(&mut self) {}
//! }
//!
//! let flag = EventFlag::new();
//! let mut handler = EdgeHandler::new(flag.source(), Exti);
//! let mut poller = TogglePoller::new(flag.consumer(), Led(false));
//!
//! handler.on_edge();           // from the interrupt
//! assert!(poller.poll_once()); // from the main loop
//! assert!(poller.output().0);
//! ```
//!
//! # No-std
//! The crate is `#![no_std]` by default. Tests require `std`.
//!
//! # Safety and concurrency
//! This crate is SPSC by design: exactly one source and one consumer must be
//! active per flag. The flag transitions `false → true` only in
//! [`Source::raise`] and `true → false` only in [`Consumer::take`]; sharing a
//! handle between contexts breaks the single-writer discipline the semantics
//! rely on. `EventFlag::new` is `const`, so a `static` flag can be split
//! between a real interrupt handler and the main loop.
//!
//! # Semantics
//! - Raises before the next take coalesce: delivery is at-most-once per poll,
//!   never N actions for N presses.
//! - [`Consumer::take`] clears and reads in one atomic swap; events landing
//!   after the clear surface on the next poll.
//! - [`EdgeHandler::on_edge`] acknowledges the hardware pending latch before
//!   raising, so the handler cannot re-enter on a stale indication.
//! - The output belongs to the poller alone; the handler never writes it.

#![no_std]

pub mod event_flag;
pub mod gpio;
pub mod toggle;

pub use event_flag::{Consumer, EventFlag, Source};
pub use gpio::{masked, Edge, EdgeControl, InputPin, OutputPin};
pub use toggle::{EdgeHandler, TogglePoller};

#[cfg(test)]
extern crate std;
