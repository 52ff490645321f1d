use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::{ParserState, set_cursor};

/// Parser combinator that peeks with a parser without consuming its input
///
/// On success the value is returned and the cursor goes back to where it was.
/// A failure propagates as is, including any input it consumed; only
/// [`attempt`](crate::attempt()) undoes that.
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        LookAhead { parser }
    }
}

impl<'code, P> Parser<'code> for LookAhead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        match self.parser.parse(state) {
            (Outcome::Success(value), after) => {
                let (_, rewound) = set_cursor(start).parse(after);
                (Outcome::Success(value), rewound)
            }
            failure => failure,
        }
    }
}

/// Convenience function to create a LookAhead parser
pub fn look_ahead<'code, P>(parser: P) -> LookAhead<P>
where
    P: Parser<'code>,
{
    LookAhead::new(parser)
}
