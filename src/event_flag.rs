//! One-slot SPSC event flag for interrupt-to-main-loop signaling in no-std contexts.
//!
//! # Overview
//! - Single source (the interrupt handler), single consumer (the main loop).
//! - Raising an already-pending flag coalesces: at most one event is pending,
//!   never a queue.
//! - `take` reads and clears in one atomic swap, so an event arriving after the
//!   clear is never lost; it is observed on a later poll.
//!
//! # Memory ordering
//! The source publishes with `Release`; the consumer swaps with `Acquire`. Every
//! observed `true` therefore happens-after the handler invocation that stored it,
//! and the flag can never be cached in a register across loop iterations.
//!
//! # Notes
//! - `new` is `const`, so the flag can live in a `static` shared between a real
//!   interrupt handler and the main loop.
//! - With the `portable-atomic` feature the atomics come from `portable-atomic`,
//!   which covers targets without a native bool swap (e.g. thumbv6).

#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "portable-atomic")]
use portable_atomic::{AtomicBool, Ordering};

/// One-slot mailbox between an asynchronous source and a polling consumer.
/// The source never waits; a raise before the consumer takes is coalesced
/// into the already-pending event.
pub struct EventFlag {
    pending: AtomicBool,
}

impl EventFlag {
    /// A flag with no event pending.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Create the source handle. Only the interrupt side may use it.
    #[inline]
    pub fn source(&self) -> Source<'_> {
        Source { flag: self }
    }

    /// Create the consumer handle. Only the main loop may use it.
    #[inline]
    pub fn consumer(&self) -> Consumer<'_> {
        Consumer { flag: self }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EventFlag {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "EventFlag {{ pending: {=bool} }}",
            self.pending.load(Ordering::Relaxed)
        );
    }
}

/// Interrupt-side handle: the only writer of `true`.
pub struct Source<'a> {
    flag: &'a EventFlag,
}

impl<'a> Source<'a> {
    /// Record that an event occurred.
    /// Returns `false` when the flag was already pending (the event coalesced).
    #[inline]
    pub fn raise(&self) -> bool {
        !self.flag.pending.swap(true, Ordering::Release)
    }
}

/// Loop-side handle: the only writer of `false`.
pub struct Consumer<'a> {
    flag: &'a EventFlag,
}

impl<'a> Consumer<'a> {
    /// Read and clear the flag in one indivisible swap.
    /// Returns true exactly once per coalesced batch of raises.
    #[inline]
    pub fn take(&mut self) -> bool {
        self.flag.pending.swap(false, Ordering::Acquire)
    }

    /// Peek without consuming.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.flag.pending.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::EventFlag;

    #[test]
    fn starts_without_pending_event() {
        let flag = EventFlag::new();
        let mut consumer = flag.consumer();
        assert!(!consumer.is_pending());
        assert!(!consumer.take());
    }

    #[test]
    fn raise_then_take_delivers_once() {
        let flag = EventFlag::new();
        let source = flag.source();
        let mut consumer = flag.consumer();

        assert!(source.raise());
        assert!(consumer.take());
        assert!(!consumer.take());
    }

    #[test]
    fn second_raise_coalesces() {
        let flag = EventFlag::new();
        let source = flag.source();
        let mut consumer = flag.consumer();

        assert!(source.raise());
        assert!(!source.raise());
        assert!(!source.raise());

        assert!(consumer.take());
        assert!(!consumer.take());
    }

    #[test]
    fn peek_does_not_consume() {
        let flag = EventFlag::new();
        let source = flag.source();
        let mut consumer = flag.consumer();

        source.raise();
        assert!(consumer.is_pending());
        assert!(consumer.is_pending());
        assert!(consumer.take());
        assert!(!consumer.is_pending());
    }

    #[test]
    fn delivers_across_threads() {
        static FLAG: EventFlag = EventFlag::new();

        let raiser = std::thread::spawn(|| {
            let source = FLAG.source();
            for _ in 0..100 {
                source.raise();
                std::thread::yield_now();
            }
        });

        let mut consumer = FLAG.consumer();
        let mut taken = 0usize;
        while !raiser.is_finished() {
            if consumer.take() {
                taken += 1;
            }
        }
        raiser.join().unwrap();
        if consumer.take() {
            taken += 1;
        }

        assert!(taken >= 1);
        assert!(taken <= 100);
    }
}
