//! Character-level parsers
//!
//! Everything here is built on [`read_char`](crate::read::read_char),
//! [`consume_one`](crate::read::consume_one) and the combinators; nothing
//! reaches into [`ParserState`](crate::ParserState) directly.

pub mod class;
pub mod satisfy;
pub mod string;
pub mod whitespace;

pub use class::{
    alpha_num, any_char, digit, hex_digit, letter, lower, none_of, oct_digit, one_of, upper,
};
pub use satisfy::{Satisfy, char, satisfy};
pub use string::{StringParser, string};
pub use whitespace::{crlf, end_of_line, newline, space, spaces, tab};
