use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser that peeks at the character under the cursor without moving it
///
/// Fails with `end of input` when there is nothing left to read.
pub struct ReadChar;

impl<'code> Parser<'code> for ReadChar {
    type Output = char;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        match state.peek() {
            Some(c) => (Outcome::Success(c), state),
            None => (Outcome::Failure(Expected::new("end of input")), state),
        }
    }
}

/// Convenience function to create a ReadChar parser
pub fn read_char() -> ReadChar {
    ReadChar
}

/// Parser that moves the cursor past one character
///
/// This is the commit point of a read: it is what advances the furthest-read
/// marker used for diagnostics. It does not check bounds and is only meant to
/// run right after a successful [`read_char`].
pub struct ConsumeOne;

impl<'code> Parser<'code> for ConsumeOne {
    type Output = ();

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        (Outcome::Success(()), state.advance())
    }
}

/// Convenience function to create a ConsumeOne parser
pub fn consume_one() -> ConsumeOne {
    ConsumeOne
}
