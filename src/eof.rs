use crate::attempt::attempt;
use crate::bind::BindExt;
use crate::label::label;
use crate::not_followed_by::not_followed_by;
use crate::parser::Parser;
use crate::read::{consume_one, read_char};

/// Parser that only succeeds at the end of input
///
/// Consumes nothing. Elsewhere it fails expecting `end of input`.
pub fn eof() -> impl for<'code> Parser<'code, Output = ()> {
    label(
        not_followed_by(attempt(read_char().then(consume_one()))),
        "end of input",
    )
}
