use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;
use tracing::trace;

/// Ordered choice between two parsers
///
/// Tries the first parser and returns its result if it succeeds. If it fails
/// after consuming input, the whole choice fails with that error and the second
/// parser is never tried: only failures that consumed nothing fall through to
/// the next alternative. Wrap the first parser in [`attempt`](crate::attempt())
/// to opt into backtracking. When both fail without consuming, the failure
/// expects either label, joined with `" or "`.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        let (expected, state) = match self.parser1.parse(state) {
            (Outcome::Failure(expected), state) if state.cursor() == start => (expected, state),
            (Outcome::Failure(expected), state) => {
                trace!(start, cursor = state.cursor(), "choice committed to a consuming failure");
                return (Outcome::Failure(expected), state);
            }
            success => return success,
        };

        match self.parser2.parse(state) {
            (Outcome::Failure(other), state) if state.cursor() == start => {
                (Outcome::Failure(expected.merge(other)), state)
            }
            reply => reply,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of parsers of the same type
///
/// Same rules as [`Or`], applied left to right. An empty choice fails without
/// a label.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, mut state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        let mut expected = Expected::none();

        for parser in &self.parsers {
            match parser.parse(state) {
                (Outcome::Failure(other), next) if next.cursor() == start => {
                    expected = expected.merge(other);
                    state = next;
                }
                reply => return reply,
            }
        }

        (Outcome::Failure(expected), state)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice { parsers }
}
