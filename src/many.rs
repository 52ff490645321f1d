use crate::attempt::Attempt;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Every occurrence is tried as an [`attempt`](crate::attempt()): the first one
/// that fails ends the repetition with the cursor right after the last
/// complete match, even if the failed occurrence had consumed part of a token.
/// `many` itself never fails.
///
/// A parser that can succeed without consuming anything makes this loop
/// forever; the combinator does not guard against it.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let (values, state) = repeat(&self.parser, Vec::new(), state);
        (Outcome::Success(values), state)
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same as [`Many`], except that when not even one occurrence matches it fails
/// with the parser's own error, cursor back where it started.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let (first, state) = match Attempt::new(&self.parser).parse(state) {
            (Outcome::Success(value), state) => (value, state),
            (Outcome::Failure(expected), state) => return (Outcome::Failure(expected), state),
        };
        let (values, state) = repeat(&self.parser, vec![first], state);
        (Outcome::Success(values), state)
    }
}

/// Accumulates attempted matches of `parser` onto `values` until one fails
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut values: Vec<P::Output>,
    mut state: ParserState<'code>,
) -> (Vec<P::Output>, ParserState<'code>)
where
    P: Parser<'code>,
{
    loop {
        match Attempt::new(parser).parse(state) {
            (Outcome::Success(value), next) => {
                values.push(value);
                state = next;
            }
            (Outcome::Failure(_), next) => return (values, next),
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
