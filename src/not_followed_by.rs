use crate::bind::{BindExt, Skip};
use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
///
/// The failure carries no label; wrap it in [`label`](crate::label()) to say
/// what was wanted instead.
pub struct NotFollowedBy<P> {
    parser: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(parser: P) -> Self {
        NotFollowedBy { parser }
    }
}

impl<'code, P> Parser<'code> for NotFollowedBy<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        match self.parser.parse(state) {
            (Outcome::Success(_), after) => (Outcome::Failure(Expected::none()), after.with_cursor(start)),
            (Outcome::Failure(_), after) => (Outcome::Success(()), after.with_cursor(start)),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser
pub fn not_followed_by<'code, P>(parser: P) -> NotFollowedBy<P>
where
    P: Parser<'code>,
{
    NotFollowedBy::new(parser)
}

/// Extension trait to add .not_followed_by() method support for parsers
///
/// `p.not_followed_by(q)` matches `p` only when `q` does not match right after it.
pub trait NotFollowedByExt<'code>: Parser<'code> + Sized {
    fn not_followed_by<Q>(self, other: Q) -> Skip<Self, NotFollowedBy<Q>>
    where
        Q: Parser<'code>,
    {
        self.skip(NotFollowedBy::new(other))
    }
}

/// Implement NotFollowedByExt for all parsers
impl<'code, P> NotFollowedByExt<'code> for P where P: Parser<'code> {}
