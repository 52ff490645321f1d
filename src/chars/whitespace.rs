use super::satisfy::{char, satisfy};
use super::string::string;
use crate::attempt::attempt;
use crate::label::LabelExt;
use crate::many::many;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;

/// Characters accepted by [`space`]
const SPACE_CHARS: [char; 8] = [
    '\u{0009}', // tab
    '\u{000a}', // line feed
    '\u{000b}', // line tabulation
    '\u{000c}', // form feed
    '\u{000d}', // carriage return
    '\u{0020}', // space
    '\u{0085}', // next line
    '\u{00a0}', // no-break space
];

/// One white space character
pub fn space() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| SPACE_CHARS.contains(&c)).label("space")
}

/// Skips any amount of white space, including none
pub fn spaces() -> impl for<'code> Parser<'code, Output = ()> {
    many(space()).map(|_| ()).label("white space")
}

/// Line feed
pub fn newline() -> impl for<'code> Parser<'code, Output = char> {
    char('\n').label("lf new-line")
}

/// Carriage return followed by line feed, returned as `'\n'`
pub fn crlf() -> impl for<'code> Parser<'code, Output = char> {
    attempt(string("\r\n")).map(|_| '\n').label("crlf new-line")
}

/// Either [`newline`] or [`crlf`], returned as `'\n'`
pub fn end_of_line() -> impl for<'code> Parser<'code, Output = char> {
    newline().or(crlf()).label("new-line")
}

pub fn tab() -> impl for<'code> Parser<'code, Output = char> {
    char('\t').label("tab")
}
