use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The nested tuple approach is general and
/// the destructuring pattern is explicit about the parsing order.
///
/// Example:
/// ```
/// use parsimony::and::AndExt;
/// use parsimony::chars::{char, digit};
/// use parsimony::parse;
///
/// let parser = digit().and(char('.')).and(digit());
/// let ((int_part, _), frac_part) = parse("1.5", &parser).unwrap();
/// assert_eq!(int_part, '1');
/// assert_eq!(frac_part, '5');
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let (result1, state) = match self.parser1.parse(state) {
            (Outcome::Success(value), state) => (value, state),
            (Outcome::Failure(expected), state) => return (Outcome::Failure(expected), state),
        };
        match self.parser2.parse(state) {
            (Outcome::Success(result2), state) => (Outcome::Success((result1, result2)), state),
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
