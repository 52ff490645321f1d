use crate::bind::BindExt;
use crate::map::MapExt;
use crate::parser::{Parser, Reply};
use crate::state::{ParserState, get_cursor, get_source};

/// Parser combinator that returns the slice of input consumed by a parser
///
/// The parser's own value is dropped. Useful when a grammar checks the shape
/// of a token but wants its exact text, e.g. a number literal.
///
/// # Examples
/// - `recognize(many1(digit()))` on `"123abc"` → `"123"`
pub struct Recognize<P> {
    parser: P,
}

impl<P> Recognize<P> {
    pub fn new(parser: P) -> Self {
        Recognize { parser }
    }
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let parser = &self.parser;
        get_cursor()
            .and_then(move |start| {
                parser.then(get_cursor()).and_then(move |end| {
                    get_source().map(move |source| source.get(start..end).unwrap_or_default())
                })
            })
            .parse(state)
    }
}

/// Convenience function to create a Recognize parser
pub fn recognize<'code, P>(parser: P) -> Recognize<P>
where
    P: Parser<'code>,
{
    Recognize::new(parser)
}

/// Extension trait to add .recognize() method support for parsers
pub trait RecognizeExt<'code>: Parser<'code> + Sized {
    fn recognize(self) -> Recognize<Self> {
        Recognize::new(self)
    }
}

/// Implement RecognizeExt for all parsers
impl<'code, P> RecognizeExt<'code> for P where P: Parser<'code> {}
