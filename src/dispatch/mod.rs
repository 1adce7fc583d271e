//! Outcome dispatch.
//!
//! # Data Flow
//! ```text
//! handler value (IntoOutcome)
//!     → into_outcome() (one step, never looped)
//!     → registry["either"]
//!         → classify: rack-triple? → "rack_either"
//!                     positive?    → "right"
//!                     otherwise    → "left"
//!         → registry[selected] mutates the ResponseContext
//!     → Ok(handled)
//! ```
//!
//! # Design Decisions
//! - The rack-triple check runs before the variant check, so a 3-element payload
//!   wins regardless of variant
//! - Matchers are always looked up through the registry, so overriding a key
//!   changes every path that reaches it
//! - Shapes are not validated beyond the length-3 check; destructuring failures
//!   surface as `DispatchError`

mod error;
pub mod matchers;

pub use error::DispatchError;

use crate::http::ResponseContext;
use crate::observability::metrics;
use crate::outcome::{IntoOutcome, Outcome, Payload};
use crate::registry::{MatcherKey, MatcherRegistry};

/// What a matcher can see and mutate while it runs.
pub struct Scope<'a, O> {
    registry: &'a MatcherRegistry<O>,
    response: &'a mut ResponseContext,
}

impl<'a, O> Scope<'a, O> {
    pub fn new(registry: &'a MatcherRegistry<O>, response: &'a mut ResponseContext) -> Self {
        Self { registry, response }
    }

    pub fn registry(&self) -> &MatcherRegistry<O> {
        self.registry
    }

    pub fn response(&self) -> &ResponseContext {
        &*self.response
    }

    pub fn response_mut(&mut self) -> &mut ResponseContext {
        &mut *self.response
    }

    /// Resolve `key` and run it against `outcome`.
    pub fn invoke(&mut self, key: &MatcherKey, outcome: &O) -> Result<bool, DispatchError> {
        let matcher = self.registry.resolve(key)?;
        metrics::record_dispatch(key);
        matcher(self, outcome)
    }
}

/// Convert `value` into the canonical outcome and run the `either` entry point.
pub fn handle_outcome<O, C>(
    registry: &MatcherRegistry<O>,
    response: &mut ResponseContext,
    value: C,
) -> Result<bool, DispatchError>
where
    O: Outcome,
    C: IntoOutcome<O>,
{
    dispatch_outcome(registry, response, &value.into_outcome())
}

/// Run the `either` entry point on an outcome that is already canonical.
pub fn dispatch_outcome<O>(
    registry: &MatcherRegistry<O>,
    response: &mut ResponseContext,
    outcome: &O,
) -> Result<bool, DispatchError> {
    Scope::new(registry, response).invoke(&MatcherKey::EITHER, outcome)
}

/// Pick the matcher for `outcome`.
pub fn classify<O: Outcome>(outcome: &O) -> MatcherKey {
    if is_rack_triple(outcome.payload()) {
        MatcherKey::RACK_EITHER
    } else if outcome.is_positive() {
        MatcherKey::RIGHT
    } else {
        MatcherKey::LEFT
    }
}

/// True for a sequence of exactly three elements.
pub fn is_rack_triple(payload: &Payload) -> bool {
    matches!(payload, Payload::Array(items) if items.len() == 3)
}
