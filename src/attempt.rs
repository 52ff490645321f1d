use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;
use tracing::trace;

/// Explicit backtracking
///
/// Runs the wrapped parser and, if it fails, puts the cursor back where it
/// started no matter how much was consumed, then reports the same failure.
/// To an enclosing [`or`](crate::or()) this turns any failure into one that
/// consumed nothing, so the next alternative gets its turn. The furthest-read
/// marker is left alone, so diagnostics still point at the deepest read.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        match self.parser.parse(state) {
            (Outcome::Failure(expected), state) => {
                if state.cursor() != start {
                    trace!(start, cursor = state.cursor(), "backtracking");
                }
                (Outcome::Failure(expected), state.with_cursor(start))
            }
            success => success,
        }
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::string;
    use crate::error::Expected;

    #[test]
    fn test_attempt_rewinds_consuming_failure() {
        let state = ParserState::new("auix");
        let (bare, bare_state) = string("auie").parse(state);
        let (outcome, after) = attempt(string("auie")).parse(state);

        assert_eq!(bare_state.cursor(), 3);
        assert_eq!(after.cursor(), 0);
        assert_eq!(outcome, bare);
        assert_eq!(outcome, Outcome::Failure(Expected::new("\"auie\"")));
    }

    #[test]
    fn test_attempt_keeps_furthest_read() {
        let (_, after) = string("auie").attempt().parse(ParserState::new("auix"));
        assert_eq!(after.furthest_read(), Some(2));
    }

    #[test]
    fn test_attempt_success_is_untouched() {
        let state = ParserState::new("auie!");
        assert_eq!(attempt(string("auie")).parse(state), string("auie").parse(state));
    }

    #[test]
    fn test_attempt_non_consuming_failure() {
        let state = ParserState::new("xyz");
        let (outcome, after) = attempt(string("auie")).parse(state);

        assert!(outcome.is_failure());
        assert_eq!(after, state);
    }
}
