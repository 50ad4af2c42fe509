//! Capability traits for the hardware collaborators the signaling core touches.
//!
//! # Overview
//! - Platform crates implement these over their HAL; the core stays
//!   target-agnostic and allocation-free.
//! - All operations are infallible: a mapped GPIO register write cannot fail.
//! - Pin direction is not modeled here. Rust HALs encode direction in the pin
//!   type at construction, so every capability below starts from an
//!   already-configured pin.

/// Trigger condition for an edge-sensitive input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// A logic output. The polling consumer owns its output exclusively; nothing
/// else writes it.
pub trait OutputPin {
    fn set_high(&mut self);
    fn set_low(&mut self);
    fn toggle(&mut self);
}

/// A logic input. The core itself never samples; platform code uses this for
/// press/release disambiguation or debounce checks around the core.
pub trait InputPin {
    fn is_high(&self) -> bool;

    #[inline]
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// The edge-interrupt surface of a pin: trigger selection, masking, and the
/// hardware-level pending acknowledgment.
///
/// `clear_pending` must drop the controller's latched "interrupt pending"
/// indication; a handler that returns without it re-enters immediately on
/// platforms with such a latch.
pub trait EdgeControl {
    fn set_trigger(&mut self, edge: Edge);
    /// Suppress handler invocations until `unmask`.
    fn mask(&mut self);
    fn unmask(&mut self);
    fn clear_pending(&mut self);
}

/// Run `f` with the asynchronous source masked.
///
/// Use this around any multi-step update of state the handler also reads;
/// a single [`crate::EventFlag`] needs no such protection.
pub fn masked<C: EdgeControl, R>(ctl: &mut C, f: impl FnOnce() -> R) -> R {
    ctl.mask();
    let result = f();
    ctl.unmask();
    result
}

#[cfg(test)]
mod tests {
    use super::{masked, Edge, EdgeControl, InputPin};
    use std::vec::Vec;

    struct Probe(bool);

    impl InputPin for Probe {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct Trace {
        calls: Vec<&'static str>,
    }

    impl EdgeControl for Trace {
        fn set_trigger(&mut self, _edge: Edge) {
            self.calls.push("set_trigger");
        }
        fn mask(&mut self) {
            self.calls.push("mask");
        }
        fn unmask(&mut self) {
            self.calls.push("unmask");
        }
        fn clear_pending(&mut self) {
            self.calls.push("clear_pending");
        }
    }

    #[test]
    fn active_low_reads_as_pressed() {
        let pin = Probe(false);
        assert!(pin.is_low());
        assert!(!pin.is_high());
    }

    #[test]
    fn masked_brackets_the_closure() {
        let mut ctl = Trace::default();
        let seen = masked(&mut ctl, || "inside");
        assert_eq!(seen, "inside");
        assert_eq!(&ctl.calls[..], &["mask", "unmask"]);
    }
}
