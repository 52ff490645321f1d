use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that matches content between two delimiters
///
/// Runs `open`, then the content parser, then `close`, and keeps only the
/// content. Any failure propagates unchanged.
///
/// # Examples
/// - `between(char('('), char(')'), string("auie"))` on `"(auie)_x"` → `"auie"`
/// - `between(char('['), char(']'), sep_by(digit(), char(',')))` on `"[1,2]"` → `['1', '2']`
pub struct Between<P1, P2, P3> {
    open: P1,
    close: P2,
    content: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, close: P2, content: P3) -> Self {
        Between {
            open,
            close,
            content,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P3::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let state = match self.open.parse(state) {
            (Outcome::Success(_), state) => state,
            (Outcome::Failure(expected), state) => return (Outcome::Failure(expected), state),
        };
        let (content, state) = match self.content.parse(state) {
            (Outcome::Success(value), state) => (value, state),
            (Outcome::Failure(expected), state) => return (Outcome::Failure(expected), state),
        };
        match self.close.parse(state) {
            (Outcome::Success(_), state) => (Outcome::Success(content), state),
            (Outcome::Failure(expected), state) => (Outcome::Failure(expected), state),
        }
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P1, P2, P3>(open: P1, close: P2, content: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, close, content)
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt<'code>: Parser<'code> + Sized {
    fn between<P1, P2>(self, open: P1, close: P2) -> Between<P1, P2, Self>
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        Between::new(open, close, self)
    }
}

/// Implement BetweenExt for all parsers
impl<'code, P> BetweenExt<'code> for P where P: Parser<'code> {}
