use crate::error::Expected;
use crate::label::{Label, LabelExt};
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::read::{consume_one, read_char};
use crate::state::ParserState;

/// Parser that consumes one character accepted by a predicate
///
/// A rejected character is left unread, and so is the end of input. Both
/// failures carry no label of their own: the named parsers of this module
/// attach one with [`label`](crate::label()).
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        match read_char().parse(state) {
            (Outcome::Success(c), state) if (self.predicate)(c) => {
                let (_, state) = consume_one().parse(state);
                (Outcome::Success(c), state)
            }
            (_, state) => (Outcome::Failure(Expected::none()), state),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser matching exactly `expected`, labelled with it in quotes
pub fn char(expected: char) -> Label<Satisfy<impl Fn(char) -> bool>> {
    satisfy(move |c| c == expected).label(format!("\"{}\"", expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_satisfy_accepts() {
        let (outcome, state) = satisfy(|c| c == 'a').parse(ParserState::new("auie"));
        assert_eq!(outcome, Outcome::Success('a'));
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.furthest_read(), Some(0));
    }

    #[test]
    fn test_satisfy_rejects_without_consuming() {
        let state = ParserState::new("auie");
        let (outcome, after) = satisfy(|c| c == 'b').parse(state);

        assert_eq!(outcome, Outcome::Failure(Expected::none()));
        assert_eq!(after, state);
    }

    #[test]
    fn test_satisfy_at_end() {
        let (outcome, _) = satisfy(|_| true).parse(ParserState::new(""));
        assert_eq!(outcome, Outcome::Failure(Expected::none()));
    }

    #[test]
    fn test_char() {
        assert_eq!(parse("auie", &char('a')), Ok('a'));

        let err = parse("auie", &char('b')).unwrap_err();
        assert_eq!(err.to_string(), "unexpected \"a\", expecting \"b\"");
    }

    #[test]
    fn test_char_multibyte() {
        let (outcome, state) = char('ß').parse(ParserState::new("ßa"));
        assert_eq!(outcome, Outcome::Success('ß'));
        assert_eq!(state.peek(), Some('a'));
    }
}
