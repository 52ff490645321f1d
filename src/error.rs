use std::borrow::Cow;
use std::fmt;

pub use failure::ParseFailure;

/// What a failed parser was looking for
///
/// An ordered set of alternative descriptions. Alternation merges the sets of
/// the branches it tried, and the set renders as the branches joined with
/// `" or "`. An empty set means no label was ever attached, in which case the
/// final diagnostic leaves out its `expecting` clause. Labels are purely
/// descriptive: no combinator makes a decision based on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Expected {
    alternatives: Vec<Cow<'static, str>>,
}

impl Expected {
    /// A failure without any description
    pub fn none() -> Self {
        Expected::default()
    }

    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Expected {
            alternatives: vec![label.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(|alternative| alternative.as_ref())
    }

    /// Ordered union: keeps `self` first and appends what `other` adds
    pub fn merge(mut self, other: Expected) -> Expected {
        for alternative in other.alternatives {
            if !self.alternatives.contains(&alternative) {
                self.alternatives.push(alternative);
            }
        }
        self
    }
}

impl From<&'static str> for Expected {
    fn from(label: &'static str) -> Self {
        Expected::new(label)
    }
}

impl From<String> for Expected {
    fn from(label: String) -> Self {
        Expected::new(label)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(alternative)?;
        }
        Ok(())
    }
}

mod failure {
    // miette's derive output trips unused_assignments on the labelled field
    #![allow(unused_assignments)]

    use super::Expected;
    use crate::state::ParserState;
    use miette::{Diagnostic, SourceSpan};
    use thiserror::Error;

    /// A parse that failed all the way up to [`parse`](crate::parse)
    ///
    /// The message has the fixed shape
    /// `unexpected <token>[, expecting <labels>]`, where the token is the quoted
    /// character at the deepest position the parse consumed (or `end of input`).
    /// Downstream tooling may match on it verbatim. The span points at that same
    /// character so the failure can be rendered with `miette` against the input.
    ///
    /// Only consumed characters move that position, peeked ones do not. A
    /// mismatch right after a run of matches therefore reports the last
    /// character that matched rather than the one that did not:
    /// `char('a').then(char('b'))` on `"ac"` reports
    /// `unexpected "a", expecting "b"`. The same rule is what makes
    /// `string("aaa").or(string("a"))` on `"a_x"` report the `a` that the first
    /// alternative committed to. When nothing was consumed, the character under
    /// the cursor is reported.
    #[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
    #[error("{message}")]
    #[diagnostic(code(parsimony::parse_failure))]
    pub struct ParseFailure {
        message: String,
        expected: Expected,
        #[label("here")]
        span: SourceSpan,
    }

    impl ParseFailure {
        /// Builds the diagnostic for a failure that ended in `state`
        pub fn new(expected: Expected, state: &ParserState<'_>) -> Self {
            let offset = state.furthest_read().unwrap_or(state.cursor());
            let unexpected = state.source().get(offset..).and_then(|rest| rest.chars().next());

            let token = match unexpected {
                Some(c) => format!("\"{}\"", c),
                None => "end of input".to_string(),
            };
            let message = if expected.is_empty() {
                format!("unexpected {}", token)
            } else {
                format!("unexpected {}, expecting {}", token, expected)
            };
            let width = unexpected.map_or(0, char::len_utf8);

            ParseFailure {
                message,
                expected,
                span: (offset, width).into(),
            }
        }

        pub fn message(&self) -> &str {
            &self.message
        }

        pub fn expected(&self) -> &Expected {
            &self.expected
        }

        /// Byte offset into the input that the diagnostic points at
        pub fn offset(&self) -> usize {
            self.span.offset()
        }

        pub fn span(&self) -> SourceSpan {
            self.span
        }
    }
}
