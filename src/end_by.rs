use crate::bind::{BindExt, Skip};
use crate::many::{Many, Many1};
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that matches zero or more items, each followed by a terminator
///
/// This is [`many`](crate::many()) over `item.skip(terminator)`, so an item
/// without its terminator is given back and ends the list.
///
/// # Examples
/// - `"a;b;"` with terminator `;` → `['a', 'b']`
/// - `"a;b"` → `['a']`, with `b` left unread
pub struct EndBy<P, S> {
    inner: Many<Skip<P, S>>,
}

impl<'code, P, S> EndBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    pub fn new(item: P, terminator: S) -> Self {
        EndBy {
            inner: Many::new(item.skip(terminator)),
        }
    }
}

impl<'code, P, S> Parser<'code> for EndBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        self.inner.parse(state)
    }
}

/// Parser combinator that matches one or more items, each followed by a terminator
pub struct EndBy1<P, S> {
    inner: Many1<Skip<P, S>>,
}

impl<'code, P, S> EndBy1<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    pub fn new(item: P, terminator: S) -> Self {
        EndBy1 {
            inner: Many1::new(item.skip(terminator)),
        }
    }
}

impl<'code, P, S> Parser<'code> for EndBy1<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        self.inner.parse(state)
    }
}

/// Convenience function to create an EndBy parser
pub fn end_by<'code, P, S>(item: P, terminator: S) -> EndBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    EndBy::new(item, terminator)
}

/// Convenience function to create an EndBy1 parser
pub fn end_by1<'code, P, S>(item: P, terminator: S) -> EndBy1<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    EndBy1::new(item, terminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{char, letter};
    use crate::error::Expected;
    use crate::outcome::Outcome;

    #[test]
    fn test_end_by_terminated_items() {
        let (outcome, state) = end_by(letter(), char(';')).parse(ParserState::new("a;b;c"));

        assert_eq!(outcome, Outcome::Success(vec!['a', 'b']));
        assert_eq!(state.peek(), Some('c'));
    }

    #[test]
    fn test_end_by_empty() {
        let (outcome, _) = end_by(letter(), char(';')).parse(ParserState::new(";"));
        assert_eq!(outcome, Outcome::Success(vec![]));
    }

    #[test]
    fn test_end_by1_requires_one() {
        let state = ParserState::new("a");
        let (outcome, after) = end_by1(letter(), char(';')).parse(state);

        assert_eq!(outcome, Outcome::Failure(Expected::new("\";\"")));
        assert_eq!(after.cursor(), 0);
        assert_eq!(after.furthest_read(), Some(0));
    }

    #[test]
    fn test_end_by1_all_terminated() {
        let (outcome, state) = end_by1(letter(), char(';')).parse(ParserState::new("x;y;"));
        assert_eq!(outcome, Outcome::Success(vec!['x', 'y']));
        assert!(state.is_at_end());
    }
}
