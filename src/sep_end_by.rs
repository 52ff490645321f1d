use crate::attempt::Attempt;
use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator for separated items with an optional trailing separator
///
/// Like [`sep_by`](crate::sep_by()), but one separator after the last item is
/// consumed too. The separator and the item are each tried as an
/// [`attempt`](crate::attempt()).
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `['1', '2', '3']`
/// - `"1,2,3,"` → `['1', '2', '3']`, cursor after the final `,`
pub struct SepEndBy<P, S> {
    item: P,
    separator: S,
    at_least_one: bool,
}

impl<'code, P, S> Parser<'code> for SepEndBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let item = Attempt::new(&self.item);
        let separator = Attempt::new(&self.separator);

        let (first, mut state) = match item.parse(state) {
            (Outcome::Success(value), state) => (value, state),
            (Outcome::Failure(expected), state) if self.at_least_one => {
                return (Outcome::Failure(expected), state);
            }
            (Outcome::Failure(_), state) => return (Outcome::Success(Vec::new()), state),
        };
        let mut items = vec![first];

        loop {
            state = match separator.parse(state) {
                (Outcome::Success(_), next) => next,
                (Outcome::Failure(_), rewound) => {
                    state = rewound;
                    break;
                }
            };
            state = match item.parse(state) {
                (Outcome::Success(value), next) => {
                    items.push(value);
                    next
                }
                (Outcome::Failure(_), rewound) => {
                    state = rewound;
                    break;
                }
            };
        }

        (Outcome::Success(items), state)
    }
}

/// Convenience function to create a SepEndBy parser matching zero or more items
pub fn sep_end_by<'code, P, S>(item: P, separator: S) -> SepEndBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SepEndBy {
        item,
        separator,
        at_least_one: false,
    }
}

/// Convenience function to create a SepEndBy parser matching one or more items
pub fn sep_end_by1<'code, P, S>(item: P, separator: S) -> SepEndBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    SepEndBy {
        item,
        separator,
        at_least_one: true,
    }
}
