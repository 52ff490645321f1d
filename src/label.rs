use crate::error::Expected;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;
use std::borrow::Cow;

/// Replaces the description of a shallow failure
///
/// When the wrapped parser fails without consuming anything, its failure is
/// reported as expecting `label` instead. A failure that consumed input keeps
/// its original, deeper description untouched.
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            label: label.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let start = state.cursor();
        match self.parser.parse(state) {
            (Outcome::Failure(_), state) if state.cursor() == start => {
                (Outcome::Failure(Expected::new(self.label.clone())), state)
            }
            reply => reply,
        }
    }
}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, label)
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}
