use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, lift};
use crate::sequencer;

/// The state threaded through a parse
///
/// Holds the borrowed source text, the cursor (reading head) and the furthest
/// position at which a character was consumed. The cursor is a byte offset that
/// always sits on a `char` boundary, so one step of the cursor is exactly one
/// Unicode scalar value. The state is `Copy`: saving a position for backtracking
/// is just keeping the old value around.
///
/// Only the combinators move the cursor, so a state built outside the crate
/// always starts at the beginning of its input:
///
/// ```compile_fail
/// use parsimony::ParserState;
///
/// let state = ParserState::new("abc").with_cursor(99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState<'code> {
    source: &'code str,
    cursor: usize,
    furthest_read: Option<usize>,
}

impl<'code> ParserState<'code> {
    pub fn new(source: &'code str) -> Self {
        ParserState {
            source,
            cursor: 0,
            furthest_read: None,
        }
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Offset of the deepest character consumed so far, `None` before the first one
    pub fn furthest_read(&self) -> Option<usize> {
        self.furthest_read
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// The character under the cursor, if any
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.cursor..)?.chars().next()
    }

    /// Returns the same state with the cursor moved to `cursor`
    ///
    /// Only the cursor is rewound; the furthest-read marker is kept so that the
    /// final diagnostic still points at the deepest position any attempt reached.
    /// `cursor` must be a position this parse has already been at.
    pub(crate) fn with_cursor(self, cursor: usize) -> Self {
        debug_assert!(self.source.is_char_boundary(cursor));
        ParserState { cursor, ..self }
    }

    /// Moves past the character under the cursor and records it as read
    ///
    /// No bounds check beyond staying put at end of input: callers only advance
    /// after a successful read.
    pub(crate) fn advance(self) -> Self {
        let width = self.peek().map_or(0, char::len_utf8);
        let furthest_read = match self.furthest_read {
            Some(furthest) if furthest >= self.cursor => Some(furthest),
            _ => Some(self.cursor),
        };
        ParserState {
            cursor: self.cursor + width,
            furthest_read,
            ..self
        }
    }
}

/// Parser yielding the current cursor without touching the state
pub(crate) fn get_cursor<'code>() -> impl Parser<'code, Output = usize> {
    lift(sequencer::gets(|state: &ParserState<'code>| {
        Outcome::<Expected, _>::Success(state.cursor())
    }))
}

/// Parser yielding the whole source text
pub(crate) fn get_source<'code>() -> impl Parser<'code, Output = &'code str> {
    lift(sequencer::gets(|state: &ParserState<'code>| {
        Outcome::<Expected, _>::Success(state.source())
    }))
}

/// Parser that moves the cursor to `cursor` and succeeds with `()`
pub(crate) fn set_cursor<'code>(cursor: usize) -> impl Parser<'code, Output = ()> {
    lift(sequencer::from_fn(move |state: ParserState<'code>| {
        (Outcome::<Expected, _>::Success(()), state.with_cursor(cursor))
    }))
}
