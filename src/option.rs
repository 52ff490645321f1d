use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that falls back to a default value
///
/// Behaves like `p.or(pure(default))`: the default is only supplied when the
/// parser fails without consuming input. A failure that consumed input still
/// propagates.
pub struct OptionParser<T, P> {
    default: T,
    parser: P,
}

impl<T, P> OptionParser<T, P> {
    pub fn new(default: T, parser: P) -> Self {
        OptionParser { default, parser }
    }
}

impl<'code, T, P> Parser<'code> for OptionParser<T, P>
where
    T: Clone,
    P: Parser<'code, Output = T>,
{
    type Output = T;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        match self.parser.parse(state) {
            (Outcome::Failure(_), state) if state.cursor() == start => {
                (Outcome::Success(self.default.clone()), state)
            }
            reply => reply,
        }
    }
}

/// Convenience function to create an OptionParser
pub fn option<'code, T, P>(default: T, parser: P) -> OptionParser<T, P>
where
    T: Clone,
    P: Parser<'code, Output = T>,
{
    OptionParser::new(default, parser)
}

/// Runs a parser for its consumption only
///
/// Succeeds with `()` whether or not the parser matched, as long as a failure
/// did not consume input.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        match self.parser.parse(state) {
            (Outcome::Success(_), state) => (Outcome::Success(()), state),
            (Outcome::Failure(_), state) if state.cursor() == start => {
                (Outcome::Success(()), state)
            }
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::chars::{char, digit, string};
    use crate::error::Expected;

    #[test]
    fn test_option_match() {
        let (outcome, state) = option('+', char('-')).parse(ParserState::new("-1"));
        assert_eq!(outcome, Outcome::Success('-'));
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_option_default_on_clean_failure() {
        let state = ParserState::new("1");
        let (outcome, after) = option('+', char('-')).parse(state);

        assert_eq!(outcome, Outcome::Success('+'));
        assert_eq!(after, state);
    }

    #[test]
    fn test_option_consuming_failure_propagates() {
        let parser = option(String::new(), string("null"));
        let (outcome, state) = parser.parse(ParserState::new("nul!"));

        assert_eq!(outcome, Outcome::Failure(Expected::new("\"null\"")));
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_optional_discards_value() {
        let parser = char('-').optional().then(digit());

        assert_eq!(parser.parse(ParserState::new("-7")).0, Outcome::Success('7'));
        assert_eq!(parser.parse(ParserState::new("7")).0, Outcome::Success('7'));
    }

    #[test]
    fn test_optional_consuming_failure_propagates() {
        let (outcome, state) = optional(string("ab")).parse(ParserState::new("ax"));
        assert!(outcome.is_failure());
        assert_eq!(state.cursor(), 1);
    }
}
