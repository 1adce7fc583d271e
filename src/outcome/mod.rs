//! Two-variant outcome values.
//!
//! # Responsibilities
//! - Define the interface every outcome type satisfies (`Outcome`)
//! - Define the one-step conversion for compatible outcome-like values (`IntoOutcome`)
//! - Provide the constructors handlers use (`success`/`failure`, `right`/`left`)
//!
//! # Design Decisions
//! - Payloads are dynamic JSON values so shape checks (rack-triples, status pairs)
//!   happen at dispatch time
//! - Two vocabularies share one interface: `Result` (success/failure) and
//!   `Either` (right/left). An application picks exactly one of them.

pub mod result;

#[cfg(feature = "either")]
pub mod branch;

pub use result::{failure, success, Attempt};

#[cfg(feature = "either")]
pub use branch::{left, right, Branch};

/// Payload carried by either variant of an outcome.
pub type Payload = serde_json::Value;

/// An immutable two-variant value with one active payload.
pub trait Outcome {
    /// True when the positive (success/right) variant is active.
    fn is_positive(&self) -> bool;

    /// Payload of the positive variant, if active.
    fn positive(&self) -> Option<&Payload>;

    /// Payload of the negative (failure/left) variant, if active.
    fn negative(&self) -> Option<&Payload>;

    /// Payload of whichever variant is active.
    fn payload(&self) -> &Payload;
}

/// Conversion of an outcome-like value into the canonical outcome `O`.
///
/// Every outcome converts to itself; the two vocabularies convert into each other.
pub trait IntoOutcome<O: Outcome> {
    fn into_outcome(self) -> O;
}
