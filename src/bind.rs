use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Monadic bind: runs a parser and builds the next one from its value
///
/// A failure of the first parser is returned as is, together with the state it
/// left behind, and the continuation is never called.
pub struct Bind<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Bind { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        match self.parser.parse(state) {
            (Outcome::Success(value), state) => (self.next)(value).parse(state),
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, next: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, next)
}

/// Sequences two parsers and keeps the value of the second
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        match self.parser1.parse(state) {
            (Outcome::Success(_), state) => self.parser2.parse(state),
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Sequences two parsers and keeps the value of the first
pub struct Skip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let (value, state) = match self.parser1.parse(state) {
            (Outcome::Success(value), state) => (value, state),
            (Outcome::Failure(expected), state) => return (Outcome::Failure(expected), state),
        };
        match self.parser2.parse(state) {
            (Outcome::Success(_), state) => (Outcome::Success(value), state),
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Extension trait to add `.and_then()`, `.then()` and `.skip()` to parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, next: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, next)
    }

    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then {
            parser1: self,
            parser2: other,
        }
    }

    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip {
            parser1: self,
            parser2: other,
        }
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
