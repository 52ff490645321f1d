//! Comma-separated values, as described by RFC 4180
//!
//! A cell is either quoted, in which case it may hold separators, line breaks
//! and `""` for a literal quote, or bare and ending at the next separator or
//! line break. Lines are split on `\n\r`, `\r\n`, `\n` or `\r`. The whole input
//! must be consumed.

use crate::attempt::attempt;
use crate::between::between;
use crate::bind::BindExt;
use crate::chars::{char, none_of, string};
use crate::eof::eof;
use crate::many::many;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::sep_by::sep_by;

/// Separator used by RFC 4180
pub const RFC4180_CELL_SEPARATOR: char = ',';

/// CSV parser using `,` between cells
pub fn rfc4180() -> impl for<'code> Parser<'code, Output = Vec<Vec<String>>> {
    with_cell_separator(RFC4180_CELL_SEPARATOR)
}

/// CSV parser using `separator` between cells
pub fn with_cell_separator(
    separator: char,
) -> impl for<'code> Parser<'code, Output = Vec<Vec<String>>> {
    let quoted_char = none_of("\"").or(attempt(string("\"\"")).map(|_| '"'));
    let quoted_cell = between(char('"'), char('"'), many(quoted_char));
    let bare_cell = many(none_of(format!("{}\n\r", separator)));
    let cell = quoted_cell
        .or(bare_cell)
        .map(|chars| chars.into_iter().collect::<String>());

    let line = sep_by(cell, char(separator));
    let line_separator = attempt(string("\n\r"))
        .or(attempt(string("\r\n")))
        .or(string("\n"))
        .or(string("\r"));

    sep_by(line, line_separator).skip(eof())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_bare_cells() {
        assert_eq!(
            parse("a,b\nc,d", &rfc4180()),
            Ok(rows(&[&["a", "b"], &["c", "d"]]))
        );
    }

    #[test]
    fn test_quoted_cell_with_escapes() {
        assert_eq!(
            parse("\"x,\"\"y\"\"\nz\",w", &rfc4180()),
            Ok(rows(&[&["x,\"y\"\nz", "w"]]))
        );
    }

    #[test]
    fn test_empty_cells() {
        assert_eq!(parse(",,", &rfc4180()), Ok(rows(&[&["", "", ""]])));
        assert_eq!(parse("", &rfc4180()), Ok(rows(&[&[""]])));
    }

    #[test]
    fn test_all_line_separators() {
        assert_eq!(
            parse("a\rb\r\nc\n\rd\ne", &rfc4180()),
            Ok(rows(&[&["a"], &["b"], &["c"], &["d"], &["e"]]))
        );
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(
            parse("a;b,c", &with_cell_separator(';')),
            Ok(rows(&[&["a", "b,c"]]))
        );
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse("a,\"open", &rfc4180()).unwrap_err();
        assert!(err.to_string().starts_with("unexpected"));
    }
}
