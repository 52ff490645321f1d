//! JSON text, as described by RFC 4627
//!
//! Values come out as [`serde_json::Value`]. Numbers are checked against the
//! RFC grammar here and converted by `serde_json`, so integers stay integers
//! and reparsing `serde_json::to_string` output gives back an equal value.
//!
//! Tokens skip the white space that follows them, so white space is allowed
//! between any two tokens but a leading run has to be skipped by the caller
//! (see [`rfc4627`]).

use crate::and::AndExt;
use crate::attempt::attempt;
use crate::between::between;
use crate::bind::BindExt;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::chars::{char, digit, hex_digit, one_of, satisfy, spaces, string};
use crate::count::count;
use crate::eof::eof;
use crate::label::LabelExt;
use crate::lazy::lazy;
use crate::many::{many, many1};
use crate::map::MapExt;
use crate::option::optional;
use crate::or::{OrExt, choice};
use crate::parser::Parser;
use crate::pure::{fail, pure};
use crate::recognize::recognize;
use crate::sep_by::sep_by;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// A JSON text: an object or an array, with optional surrounding white space
pub fn rfc4627<'code>() -> impl Parser<'code, Output = Value> {
    spaces().then(object().or(array())).skip(eof())
}

/// Any JSON value, including the white space after it
pub fn value<'code>() -> BoxedParser<'code, Value> {
    let literal = |text: &'static str, value: Value| {
        attempt(string(text)).map(move |_| value.clone())
    };

    lexeme(
        choice(vec![
            literal("false", Value::Bool(false)).boxed(),
            literal("null", Value::Null).boxed(),
            literal("true", Value::Bool(true)).boxed(),
            object().boxed(),
            array().boxed(),
            number().boxed(),
            string_literal().map(Value::String).boxed(),
        ])
        .label("value"),
    )
    .boxed()
}

fn lexeme<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    parser.skip(spaces())
}

fn structural<'code>(c: char) -> impl Parser<'code, Output = char> {
    lexeme(char(c))
}

fn array<'code>() -> impl Parser<'code, Output = Value> {
    between(
        structural('['),
        structural(']'),
        sep_by(lazy(value), structural(',')),
    )
    .map(Value::Array)
}

fn object<'code>() -> impl Parser<'code, Output = Value> {
    let member = lexeme(string_literal())
        .skip(structural(':'))
        .and(lazy(value));

    between(structural('{'), structural('}'), sep_by(member, structural(',')))
        .map(|members| Value::Object(members.into_iter().collect::<Map<_, _>>()))
}

fn number<'code>() -> impl Parser<'code, Output = Value> {
    let int = char('0')
        .map(|_| ())
        .or(one_of("123456789").then(many(digit())).map(|_| ()));
    let frac = char('.').then(many1(digit()));
    let exp = one_of("eE").then(optional(one_of("+-"))).then(many1(digit()));

    recognize(
        optional(char('-'))
            .then(int)
            .then(optional(frac))
            .then(optional(exp)),
    )
    .and_then(|text: &str| match Number::from_str(text) {
        Ok(number) => pure(Value::Number(number)).boxed(),
        Err(_) => fail("number in range").boxed(),
    })
    .label("number")
}

/// One piece of string content, before UTF-16 escapes are paired up
enum Fragment {
    Char(char),
    CodeUnit(u16),
}

fn string_literal<'code>() -> impl Parser<'code, Output = String> {
    let unescaped = satisfy(|c| {
        matches!(c, '\u{20}'..='\u{21}' | '\u{23}'..='\u{5b}' | '\u{5d}'..=char::MAX)
    })
    .label("unescaped character")
    .map(Fragment::Char);

    between(char('"'), char('"'), many(unescaped.or(escape()))).map(decode)
}

fn escape<'code>() -> impl Parser<'code, Output = Fragment> {
    let simple = one_of("\"\\/bfnrt").map(|c| {
        Fragment::Char(match c {
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        })
    });
    let unicode = char('u').then(count(4, hex_digit())).map(|digits| {
        let unit = digits
            .iter()
            .fold(0u16, |unit, d| unit * 16 + d.to_digit(16).unwrap_or(0) as u16);
        Fragment::CodeUnit(unit)
    });

    char('\\').then(simple.or(unicode)).label("escape sequence")
}

/// Joins string content, pairing `\uXXXX` surrogates into one character
///
/// A surrogate without its partner becomes U+FFFD.
fn decode(fragments: Vec<Fragment>) -> String {
    let mut units = Vec::with_capacity(fragments.len());
    let mut buffer = [0u16; 2];

    for fragment in fragments {
        match fragment {
            Fragment::Char(c) => units.extend_from_slice(c.encode_utf16(&mut buffer)),
            Fragment::CodeUnit(unit) => units.push(unit),
        }
    }

    String::from_utf16_lossy(&units)
}
