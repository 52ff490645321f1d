use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser that always succeeds with a clone of its value, consuming nothing
pub struct Pure<T> {
    value: T,
}

impl<'code, T: Clone> Parser<'code> for Pure<T> {
    type Output = T;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        (Outcome::Success(self.value.clone()), state)
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure { value }
}

/// Parser that always fails with the given label, consuming nothing
pub struct Fail<T> {
    expected: Expected,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        (Outcome::Failure(self.expected.clone()), state)
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(expected: impl Into<Expected>) -> Fail<T> {
    Fail {
        expected: expected.into(),
        _phantom: std::marker::PhantomData,
    }
}
