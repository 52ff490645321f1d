//! # Parsimony - Parsec-style Parser Combinators
//!
//! Parsers are plain values built from small pieces and run over a `&str`
//! with [`parse`]. What sets this family of combinators apart is how it decides
//! whether to backtrack: **a failure that consumed input is final**. An
//! alternative in [`or()`] is only tried when the previous one failed without
//! consuming anything, and backtracking over consumed input has to be asked
//! for with [`attempt()`].
//!
//! ```
//! use parsimony::{attempt, parse, OrExt};
//! use parsimony::chars::string;
//!
//! // "a" is a prefix of "aaa": once `string("aaa")` has consumed it, the
//! // second alternative is never tried...
//! let eager = string("aaa").or(string("a"));
//! let err = parse("a_x", &eager).unwrap_err();
//! assert_eq!(err.to_string(), "unexpected \"a\", expecting \"aaa\"");
//!
//! // ...unless the first one is allowed to backtrack.
//! let backtracking = attempt(string("aaa")).or(string("a"));
//! assert_eq!(parse("a_x", &backtracking).as_deref(), Ok("a"));
//! ```
//!
//! The library is organised in layers:
//!
//! - [`outcome`] and [`sequencer`]: a success/failure value and a generic
//!   state-threading computation
//! - [`state`] and [`parser`]: the parse state, the [`Parser`] trait and the
//!   top level [`parse`] entry point
//! - the combinators, one per module: `or`, `attempt`, `label`, `many`,
//!   `sep_by`, `look_ahead` and friends
//! - [`chars`]: character-level parsers built on the combinators
//! - [`grammars`]: complete CSV and JSON grammars
//!
//! Failures report the deepest character the parse consumed and what was
//! expected there, as a [`ParseFailure`] that can also be rendered with
//! `miette`.
//!
//! Repetition (`many`, `sep_by`, `end_by`, `sep_end_by`, `many_till` and their
//! variants) is a loop, so long inputs do not grow the stack. Repeating a
//! parser that can succeed without consuming input never terminates; building
//! such a grammar is a mistake the library does not detect.

pub mod and;
pub mod attempt;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod chars;
pub mod count;
pub mod end_by;
pub mod eof;
pub mod error;
pub mod grammars;
pub mod label;
pub mod lazy;
pub mod look_ahead;
pub mod many;
pub mod many_till;
pub mod map;
pub mod not_followed_by;
pub mod option;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod pure;
pub mod read;
pub mod recognize;
pub mod sep_by;
pub mod sep_end_by;
pub mod sequencer;
pub mod state;

pub use and::{AndExt, and};
pub use attempt::{AttemptExt, attempt};
pub use between::{BetweenExt, between};
pub use bind::{BindExt, bind};
pub use boxed::{BoxedExt, BoxedParser};
pub use count::count;
pub use end_by::{end_by, end_by1};
pub use eof::eof;
pub use error::{Expected, ParseFailure};
pub use label::{LabelExt, label};
pub use lazy::lazy;
pub use look_ahead::look_ahead;
pub use many::{ManyExt, many, many1};
pub use many_till::many_till;
pub use map::{MapExt, map};
pub use not_followed_by::{NotFollowedByExt, not_followed_by};
pub use option::{OptionalExt, option, optional};
pub use or::{OrExt, choice, or};
pub use outcome::Outcome;
pub use parser::{Parser, Reply, lift, parse};
pub use pure::{fail, pure};
pub use read::{consume_one, read_char};
pub use recognize::{RecognizeExt, recognize};
pub use sep_by::{SepByExt, sep_by, sep_by1};
pub use sep_end_by::{sep_end_by, sep_end_by1};
pub use sequencer::Sequencer;
pub use state::ParserState;
