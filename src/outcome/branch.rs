//! Right/left vocabulary backed by the `either` crate.
//!
//! `Right` is the positive variant, `Left` the negative one.

use either::Either;

use super::{Attempt, IntoOutcome, Outcome, Payload};

/// Outcome in the right/left vocabulary.
pub type Branch = Either<Payload, Payload>;

pub fn right(value: impl Into<Payload>) -> Branch {
    Either::Right(value.into())
}

pub fn left(value: impl Into<Payload>) -> Branch {
    Either::Left(value.into())
}

impl Outcome for Branch {
    fn is_positive(&self) -> bool {
        self.is_right()
    }

    fn positive(&self) -> Option<&Payload> {
        self.as_ref().right()
    }

    fn negative(&self) -> Option<&Payload> {
        self.as_ref().left()
    }

    fn payload(&self) -> &Payload {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

impl IntoOutcome<Branch> for Branch {
    fn into_outcome(self) -> Branch {
        self
    }
}

impl IntoOutcome<Attempt> for Branch {
    fn into_outcome(self) -> Attempt {
        self.either(Err, Ok)
    }
}

impl IntoOutcome<Branch> for Attempt {
    fn into_outcome(self) -> Branch {
        match self {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use serde_json::json;

    #[test]
    fn test_right_is_positive() {
        let outcome = right("ok");
        assert!(outcome.is_positive());
        assert_eq!(outcome.positive(), Some(&json!("ok")));
        assert_eq!(outcome.negative(), None);
    }

    #[test]
    fn test_vocabularies_convert_into_each_other() {
        let attempt: Attempt = left("unauthorized").into_outcome();
        assert_eq!(attempt, failure("unauthorized"));

        let branch: Branch = success("Alright").into_outcome();
        assert_eq!(branch, right("Alright"));
    }
}
