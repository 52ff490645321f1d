use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::read::{consume_one, read_char};
use crate::state::ParserState;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// Characters are consumed as they match, so a mismatch after the first
/// character is a consuming failure: `string("aaa")` on `"a_x"` fails with the
/// cursor after the first `a`. Wrap it in [`attempt`](crate::attempt()) to make
/// such a failure backtrack. Either way the failure expects the quoted literal.
pub struct StringParser {
    expected: Cow<'static, str>,
    label: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let label = format!("\"{}\"", expected).into();
        StringParser { expected, label }
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = String;

    fn parse(&self, mut state: ParserState<'code>) -> Reply<'code, Self::Output> {
        for expected_char in self.expected.chars() {
            match read_char().parse(state) {
                (Outcome::Success(c), current) if c == expected_char => {
                    state = consume_one().parse(current).1;
                }
                (_, current) => {
                    return (Outcome::Failure(Expected::new(self.label.clone())), current);
                }
            }
        }

        (Outcome::Success(self.expected.to_string()), state)
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_string_exact_match() {
        let (outcome, state) = string("hello").parse(ParserState::new("hello world"));
        assert_eq!(outcome, Outcome::Success(String::from("hello")));
        assert_eq!(state.peek(), Some(' '));
    }

    #[test]
    fn test_string_partial_match_consumes() {
        let (outcome, state) = string("aaa").parse(ParserState::new("a_x"));

        assert_eq!(outcome, Outcome::Failure(Expected::new("\"aaa\"")));
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.furthest_read(), Some(0));
    }

    #[test]
    fn test_string_no_match() {
        let state = ParserState::new("xyz");
        let (outcome, after) = string("abc").parse(state);

        assert_eq!(outcome, Outcome::Failure(Expected::new("\"abc\"")));
        assert_eq!(after, state);
    }

    #[test]
    fn test_string_end_of_input() {
        let err = parse("ab", &string("abc")).unwrap_err();
        assert_eq!(err.to_string(), "unexpected \"b\", expecting \"abc\"");
    }

    #[test]
    fn test_string_empty() {
        let state = ParserState::new("abc");
        assert_eq!(string("").parse(state), (Outcome::Success(String::new()), state));
    }

    #[test]
    fn test_string_unicode() {
        let (outcome, state) = string("日本").parse(ParserState::new("日本語"));
        assert_eq!(outcome, Outcome::Success(String::from("日本")));
        assert_eq!(state.peek(), Some('語'));
    }

    #[test]
    fn test_string_reusable() {
        let parser = string("auie");
        assert_eq!(parse("auie", &parser).as_deref(), Ok("auie"));
        assert_eq!(parse("auie", &parser).as_deref(), Ok("auie"));
    }
}
