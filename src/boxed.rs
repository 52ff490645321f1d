use crate::parser::{Parser, Reply};
use crate::state::ParserState;
use std::rc::Rc;

/// A type-erased, cheaply clonable parser
///
/// Combinator types nest deeply; boxing gives a grammar rule a nameable type,
/// lets parsers of different shapes share a `Vec` (see [`choice`](crate::choice()))
/// and lets a rule refer to itself through [`lazy`](crate::lazy()). Cloning only
/// bumps a reference count.
pub struct BoxedParser<'code, O> {
    inner: Rc<dyn Parser<'code, Output = O> + 'code>,
}

impl<'code, O> BoxedParser<'code, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = O> + 'code,
    {
        BoxedParser {
            inner: Rc::new(parser),
        }
    }
}

impl<'code, O> Clone for BoxedParser<'code, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<'code, O> Parser<'code> for BoxedParser<'code, O> {
    type Output = O;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        self.inner.parse(state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
