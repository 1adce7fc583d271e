use std::borrow::{Borrow, Cow};
use std::fmt;

/// Symbolic name of a matcher.
///
/// The built-in keys are associated constants; integrators can mint their own
/// from any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatcherKey(Cow<'static, str>);

impl MatcherKey {
    /// Positive-payload matcher.
    pub const RIGHT: MatcherKey = MatcherKey(Cow::Borrowed("right"));
    /// Alias of `RIGHT` installed by default.
    pub const VALUE: MatcherKey = MatcherKey(Cow::Borrowed("value"));
    /// Negative-payload matcher.
    pub const LEFT: MatcherKey = MatcherKey(Cow::Borrowed("left"));
    /// Alias of `LEFT` installed by default.
    pub const STATUS: MatcherKey = MatcherKey(Cow::Borrowed("status"));
    /// Top-level dispatch entry point.
    pub const EITHER: MatcherKey = MatcherKey(Cow::Borrowed("either"));
    /// Raw `(status, headers, body)` triple matcher.
    pub const RACK_EITHER: MatcherKey = MatcherKey(Cow::Borrowed("rack_either"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the four keys the default configuration registers.
    pub fn is_canonical(&self) -> bool {
        [Self::RIGHT, Self::LEFT, Self::EITHER, Self::RACK_EITHER].contains(self)
    }
}

impl From<&'static str> for MatcherKey {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MatcherKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for MatcherKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatcherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
