use crate::attempt::Attempt;
use crate::bind::BindExt;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that matches zero or more items separated by a separator
///
/// Both the separator and the item that follows it are tried as one
/// [`attempt`](crate::attempt()): a separator with no item after it ends the list
/// with the cursor right after the last item, leaving the separator unread.
/// When not even the first item matches, the list is empty.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `['a', 'b', 'c']`
/// - `""` → `[]`
/// - `"a,b,"` → `['a', 'b']`, with the trailing `,` left for the next parser
pub struct SepBy<P, S> {
    item: P,
    separator: S,
}

impl<P, S> SepBy<P, S> {
    pub fn new(item: P, separator: S) -> Self {
        SepBy { item, separator }
    }
}

impl<'code, P, S> Parser<'code> for SepBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        match Attempt::new(&self.item).parse(state) {
            (Outcome::Success(first), state) => {
                let (items, state) = separated(&self.item, &self.separator, first, state);
                (Outcome::Success(items), state)
            }
            (Outcome::Failure(_), state) => (Outcome::Success(Vec::new()), state),
        }
    }
}

/// Parser combinator that matches one or more items separated by a separator
///
/// Same as [`SepBy`], except that a missing first item is a failure carrying
/// the item parser's error.
pub struct SepBy1<P, S> {
    item: P,
    separator: S,
}

impl<P, S> SepBy1<P, S> {
    pub fn new(item: P, separator: S) -> Self {
        SepBy1 { item, separator }
    }
}

impl<'code, P, S> Parser<'code> for SepBy1<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        match Attempt::new(&self.item).parse(state) {
            (Outcome::Success(first), state) => {
                let (items, state) = separated(&self.item, &self.separator, first, state);
                (Outcome::Success(items), state)
            }
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Collects `separator item` pairs after an already matched first item
fn separated<'code, P, S>(
    item: &P,
    separator: &S,
    first: P::Output,
    mut state: ParserState<'code>,
) -> (Vec<P::Output>, ParserState<'code>)
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    let mut items = vec![first];
    let next = Attempt::new(separator.then(item));

    loop {
        match next.parse(state) {
            (Outcome::Success(value), after) => {
                items.push(value);
                state = after;
            }
            (Outcome::Failure(_), after) => return (items, after),
        }
    }
}

/// Convenience function to create a SepBy parser
pub fn sep_by<'code, P, S>(item: P, separator: S) -> SepBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SepBy::new(item, separator)
}

/// Convenience function to create a SepBy1 parser
pub fn sep_by1<'code, P, S>(item: P, separator: S) -> SepBy1<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SepBy1::new(item, separator)
}

/// Extension trait to add .sep_by() and .sep_by1() method support for parsers
pub trait SepByExt<'code>: Parser<'code> + Sized {
    fn sep_by<S>(self, separator: S) -> SepBy<Self, S>
    where
        S: Parser<'code>,
    {
        SepBy::new(self, separator)
    }

    fn sep_by1<S>(self, separator: S) -> SepBy1<Self, S>
    where
        S: Parser<'code>,
    {
        SepBy1::new(self, separator)
    }
}

/// Implement SepByExt for all parsers
impl<'code, P> SepByExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{char, digit, none_of, string};
    use crate::many::many1;

    #[test]
    fn test_sep_by_single_item() {
        let (outcome, state) = sep_by(digit(), char(',')).parse(ParserState::new("1"));
        assert_eq!(outcome, Outcome::Success(vec!['1']));
        assert!(state.is_at_end());
    }

    #[test]
    fn test_sep_by_multiple_items() {
        let (outcome, state) = digit().sep_by(char(',')).parse(ParserState::new("1,2,3;"));
        assert_eq!(outcome, Outcome::Success(vec!['1', '2', '3']));
        assert_eq!(state.peek(), Some(';'));
    }

    #[test]
    fn test_sep_by_empty() {
        let state = ParserState::new(";");
        let (outcome, after) = sep_by(digit(), char(',')).parse(state);

        assert_eq!(outcome, Outcome::Success(vec![]));
        assert_eq!(after, state);
    }

    #[test]
    fn test_sep_by_trailing_separator_left_unread() {
        let (outcome, state) = sep_by(digit(), char(',')).parse(ParserState::new("1,2,"));
        assert_eq!(outcome, Outcome::Success(vec!['1', '2']));
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_sep_by_partial_item_rewinds() {
        let parser = sep_by(string("ab"), char(','));
        let (outcome, state) = parser.parse(ParserState::new("ab,ax"));

        assert_eq!(outcome, Outcome::Success(vec![String::from("ab")]));
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_sep_by1_nested_lists() {
        let parser = sep_by1(many1(none_of(";")), char(';'));
        let (outcome, _) = parser.parse(ParserState::new("any;_str;ing"));

        assert_eq!(
            outcome,
            Outcome::Success(vec![
                vec!['a', 'n', 'y'],
                vec!['_', 's', 't', 'r'],
                vec!['i', 'n', 'g'],
            ])
        );
    }

    #[test]
    fn test_sep_by1_no_item_fails() {
        let state = ParserState::new(";");
        let (outcome, after) = sep_by1(many1(none_of(";")), char(';')).parse(state);

        assert!(outcome.is_failure());
        assert_eq!(after, state);
    }

    #[test]
    fn test_sep_by_long_list() {
        let input = vec!["7"; 50_000].join(",");
        let (outcome, state) = sep_by(digit(), char(',')).parse(ParserState::new(&input));

        assert_eq!(outcome.map(|v| v.len()), Outcome::Success(50_000));
        assert!(state.is_at_end());
    }
}
