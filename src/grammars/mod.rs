//! Complete grammars built on the public combinator surface
//!
//! Both double as worked examples of the library: nothing in them needs more
//! than the combinators and the [`chars`](crate::chars) token parsers.

pub mod csv;
pub mod json;
