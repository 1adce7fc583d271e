//! Matcher registry.
//!
//! # Data Flow
//! ```text
//! Application setup
//!     → register(name, aliases, matcher)
//!     → name and every alias point at the same Arc<matcher>
//!
//! Dispatch
//!     → resolve(key) → Arc<matcher> (or DispatchError::Unregistered)
//! ```
//!
//! # Design Decisions
//! - Aliases are snapshots: re-registering a name later leaves its aliases alone
//! - Later registrations win per key
//! - Unknown keys are an explicit error at invocation, never a silent fallback

mod key;

pub use key::MatcherKey;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::dispatch::{DispatchError, Scope};

/// A named rendering strategy. Returns whether it applied to the outcome.
pub type Matcher<O> =
    Arc<dyn Fn(&mut Scope<'_, O>, &O) -> Result<bool, DispatchError> + Send + Sync>;

/// Mapping from matcher key to matcher, owned by one application.
pub struct MatcherRegistry<O> {
    matchers: HashMap<MatcherKey, Matcher<O>>,
}

impl<O> MatcherRegistry<O> {
    /// Create a registry with no matchers.
    pub fn new() -> Self {
        Self {
            matchers: HashMap::new(),
        }
    }

    /// Store `matcher` under `name` and copy it onto each alias.
    ///
    /// Returns the stored matcher.
    pub fn register<F>(
        &mut self,
        name: impl Into<MatcherKey>,
        aliases: &[MatcherKey],
        matcher: F,
    ) -> Matcher<O>
    where
        F: Fn(&mut Scope<'_, O>, &O) -> Result<bool, DispatchError> + Send + Sync + 'static,
    {
        self.insert(name, aliases, Arc::new(matcher))
    }

    /// Same as `register` for a matcher that is already shared.
    pub fn insert(
        &mut self,
        name: impl Into<MatcherKey>,
        aliases: &[MatcherKey],
        matcher: Matcher<O>,
    ) -> Matcher<O> {
        let name = name.into();
        tracing::trace!(matcher = %name, aliases = aliases.len(), "Registering matcher");
        self.matchers.insert(name, Arc::clone(&matcher));
        for alias in aliases {
            self.matchers.insert(alias.clone(), Arc::clone(&matcher));
        }
        matcher
    }

    /// Copy whatever is currently stored under `name` onto each alias.
    ///
    /// With no matcher under `name` this is a pure lookup and leaves the aliases
    /// untouched.
    pub fn alias(
        &mut self,
        name: impl Into<MatcherKey>,
        aliases: &[MatcherKey],
    ) -> Option<Matcher<O>> {
        let name = name.into();
        let matcher = self.matchers.get(&name).cloned()?;
        for alias in aliases {
            self.matchers.insert(alias.clone(), Arc::clone(&matcher));
        }
        Some(matcher)
    }

    /// Look up a matcher. Unknown names return `None`.
    pub fn get(&self, name: &str) -> Option<Matcher<O>> {
        self.matchers.get(name).cloned()
    }

    /// Look up a matcher that is about to be invoked.
    pub fn resolve(&self, name: &MatcherKey) -> Result<Matcher<O>, DispatchError> {
        self.matchers
            .get(name)
            .cloned()
            .ok_or_else(|| DispatchError::Unregistered(name.clone()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.matchers.contains_key(name)
    }

    /// Registered keys, aliases included, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &MatcherKey> {
        self.matchers.keys()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl<O> Default for MatcherRegistry<O> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: a derive would require `O: Clone`.
impl<O> Clone for MatcherRegistry<O> {
    fn clone(&self) -> Self {
        Self {
            matchers: self.matchers.clone(),
        }
    }
}

impl<O> fmt::Debug for MatcherRegistry<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.matchers.keys().map(MatcherKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("MatcherRegistry").field("keys", &keys).finish()
    }
}
