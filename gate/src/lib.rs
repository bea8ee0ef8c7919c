//! Submission gating.
//!
//! Decides whether a disperse may be submitted right now, and if not, which
//! blocker the user should deal with first. Everything here is a pure
//! function of a [`GateState`] snapshot.

pub mod gate;
pub mod summary;

pub use gate::{can_submit, GateBlock, GateDecision, GateState};
pub use summary::{BalanceSummary, Remaining};
