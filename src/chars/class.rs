use super::satisfy::satisfy;
use crate::label::LabelExt;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser for any character listed in `set`
pub fn one_of(set: impl Into<Cow<'static, str>>) -> impl for<'code> Parser<'code, Output = char> {
    let set = set.into();
    satisfy(move |c| set.contains(c))
}

/// Parser for any character not listed in `set`
pub fn none_of(set: impl Into<Cow<'static, str>>) -> impl for<'code> Parser<'code, Output = char> {
    let set = set.into();
    satisfy(move |c| !set.contains(c))
}

/// Parser for any single character; fails only at the end of input
pub fn any_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|_| true)
}

/// ASCII decimal digit
pub fn digit() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| c.is_ascii_digit()).label("digit")
}

pub fn hex_digit() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| c.is_ascii_hexdigit()).label("hexadecimal digit")
}

pub fn oct_digit() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| matches!(c, '0'..='7')).label("octal digit")
}

/// Unicode uppercase letter
pub fn upper() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(char::is_uppercase).label("uppercase letter")
}

/// Unicode lowercase letter
pub fn lower() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(char::is_lowercase).label("lowercase letter")
}

/// Unicode alphabetic character
pub fn letter() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(char::is_alphabetic).label("letter")
}

pub fn alpha_num() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(char::is_alphanumeric).label("letter or digit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Expected;
    use crate::many::many;
    use crate::outcome::Outcome;
    use crate::state::ParserState;

    #[test]
    fn test_one_of() {
        let vowels = one_of("aeiouy");
        assert_eq!(vowels.parse(ParserState::new("u")).0, Outcome::Success('u'));
        assert!(vowels.parse(ParserState::new("t")).0.is_failure());
    }

    #[test]
    fn test_one_of_owned_set() {
        let set: String = ('a'..='f').collect();
        let (outcome, _) = many(one_of(set)).parse(ParserState::new("cafe babe"));
        assert_eq!(outcome, Outcome::Success(vec!['c', 'a', 'f', 'e']));
    }

    #[test]
    fn test_none_of() {
        let (outcome, state) = many(none_of(";,")).parse(ParserState::new("cell,next"));
        assert_eq!(outcome.map(|v| v.into_iter().collect::<String>()), Outcome::Success(String::from("cell")));
        assert_eq!(state.peek(), Some(','));
    }

    #[test]
    fn test_any_char() {
        assert_eq!(any_char().parse(ParserState::new("日")).0, Outcome::Success('日'));
        assert!(any_char().parse(ParserState::new("")).0.is_failure());
    }

    #[test]
    fn test_digit_classes() {
        assert_eq!(digit().parse(ParserState::new("7")).0, Outcome::Success('7'));
        assert_eq!(digit().parse(ParserState::new("a")).0, Outcome::Failure(Expected::new("digit")));
        assert_eq!(hex_digit().parse(ParserState::new("F")).0, Outcome::Success('F'));
        assert!(hex_digit().parse(ParserState::new("g")).0.is_failure());
        assert_eq!(oct_digit().parse(ParserState::new("7")).0, Outcome::Success('7'));
        assert_eq!(
            oct_digit().parse(ParserState::new("8")).0,
            Outcome::Failure(Expected::new("octal digit"))
        );
    }

    #[test]
    fn test_letter_classes() {
        assert_eq!(upper().parse(ParserState::new("É")).0, Outcome::Success('É'));
        assert!(upper().parse(ParserState::new("e")).0.is_failure());
        assert!(upper().parse(ParserState::new("1")).0.is_failure());
        assert_eq!(lower().parse(ParserState::new("é")).0, Outcome::Success('é'));
        assert_eq!(letter().parse(ParserState::new("ж")).0, Outcome::Success('ж'));
        assert!(letter().parse(ParserState::new("_")).0.is_failure());
        assert_eq!(alpha_num().parse(ParserState::new("4")).0, Outcome::Success('4'));
        assert_eq!(
            alpha_num().parse(ParserState::new("-")).0,
            Outcome::Failure(Expected::new("letter or digit"))
        );
    }
}
