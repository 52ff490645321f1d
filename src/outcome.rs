/// Two-case result of a computation: either a failure value or a success value
///
/// `Outcome` carries no parsing behaviour of its own. The parser monad pairs it
/// with a [`ParserState`](crate::state::ParserState) to report whether a step
/// succeeded, and the combinators only ever inspect it through the methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<E, A> {
    Failure(E),
    Success(A),
}

impl<E, A> Outcome<E, A> {
    /// Wraps a value as a success
    pub fn pure(value: A) -> Self {
        Outcome::Success(value)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Monadic bind: a failure short-circuits and `f` is never called
    pub fn and_then<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success(value) => f(value),
        }
    }

    pub fn map<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success(value) => Outcome::Success(f(value)),
        }
    }

    pub fn map_failure<E2, F>(self, f: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Failure(error) => Outcome::Failure(f(error)),
            Outcome::Success(value) => Outcome::Success(value),
        }
    }

    /// Returns the success value, or `default` for a failure
    pub fn success_or(self, default: A) -> A {
        match self {
            Outcome::Failure(_) => default,
            Outcome::Success(value) => value,
        }
    }

    /// Returns the failure value, or `default` for a success
    pub fn failure_or(self, default: E) -> E {
        match self {
            Outcome::Failure(error) => error,
            Outcome::Success(_) => default,
        }
    }

    pub fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success(value) => Outcome::Success(value),
        }
    }

    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Failure(error) => Err(error),
            Outcome::Success(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn half(n: i64) -> Outcome<String, i64> {
        if n % 2 == 0 {
            Outcome::Success(n / 2)
        } else {
            Outcome::Failure(format!("{} is odd", n))
        }
    }

    fn decrement(n: i64) -> Outcome<String, i64> {
        if n > i64::MIN {
            Outcome::Success(n - 1)
        } else {
            Outcome::Failure("underflow".to_string())
        }
    }

    #[test]
    fn test_failure_short_circuits() {
        let mut called = false;
        let outcome: Outcome<&str, i32> = Outcome::Failure("boom");
        let next = outcome.and_then(|n| {
            called = true;
            Outcome::Success(n + 1)
        });

        assert_eq!(next, Outcome::Failure("boom"));
        assert!(!called);
    }

    #[test]
    fn test_projections() {
        let ok: Outcome<&str, i32> = Outcome::Success(3);
        let err: Outcome<&str, i32> = Outcome::Failure("nope");

        assert_eq!(ok.success_or(0), 3);
        assert_eq!(err.success_or(0), 0);
        assert_eq!(ok.failure_or("none"), "none");
        assert_eq!(err.failure_or("none"), "nope");
    }

    #[test]
    fn test_map_and_map_failure() {
        let ok: Outcome<&str, i32> = Outcome::Success(3);
        let err: Outcome<&str, i32> = Outcome::Failure("nope");

        assert_eq!(ok.map(|n| n * 2), Outcome::Success(6));
        assert_eq!(err.map(|n| n * 2), Outcome::Failure("nope"));
        assert_eq!(err.map_failure(str::len), Outcome::Failure(4));
        assert!(ok.map_failure(str::len).is_success());
    }

    #[test]
    fn test_result_conversions() {
        let outcome: Outcome<String, u8> = Ok(7).into();
        assert_eq!(outcome, Outcome::Success(7));
        assert_eq!(outcome.into_result(), Ok(7));

        let outcome: Outcome<String, u8> = Err("bad".to_string()).into();
        assert!(outcome.is_failure());
        assert_eq!(Result::from(outcome), Err("bad".to_string()));
    }

    proptest! {
        #[test]
        fn left_identity(n in any::<i64>()) {
            prop_assert_eq!(Outcome::pure(n).and_then(half), half(n));
        }

        #[test]
        fn right_identity(n in any::<i64>(), fail in any::<bool>()) {
            let m: Outcome<String, i64> = if fail {
                Outcome::Failure(n.to_string())
            } else {
                Outcome::Success(n)
            };
            prop_assert_eq!(m.clone().and_then(Outcome::pure), m);
        }

        #[test]
        fn associativity(n in any::<i64>()) {
            let m: Outcome<String, i64> = Outcome::Success(n);
            let left = m.clone().and_then(half).and_then(decrement);
            let right = m.and_then(|a| half(a).and_then(decrement));
            prop_assert_eq!(left, right);
        }
    }
}
