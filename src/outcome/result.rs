//! Success/failure vocabulary backed by `std::result::Result`.

use super::{IntoOutcome, Outcome, Payload};

/// Outcome in the success/failure vocabulary.
pub type Attempt = Result<Payload, Payload>;

/// Build a successful outcome.
pub fn success(value: impl Into<Payload>) -> Attempt {
    Ok(value.into())
}

/// Build a failed outcome.
pub fn failure(value: impl Into<Payload>) -> Attempt {
    Err(value.into())
}

impl Outcome for Attempt {
    fn is_positive(&self) -> bool {
        self.is_ok()
    }

    fn positive(&self) -> Option<&Payload> {
        self.as_ref().ok()
    }

    fn negative(&self) -> Option<&Payload> {
        self.as_ref().err()
    }

    fn payload(&self) -> &Payload {
        match self {
            Ok(value) | Err(value) => value,
        }
    }
}

impl IntoOutcome<Attempt> for Attempt {
    fn into_outcome(self) -> Attempt {
        self
    }
}
