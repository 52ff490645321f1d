use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that collects items until a terminator matches
///
/// At every step the terminator is tried first. If it matches, its value is
/// dropped and the collected items are returned. If it fails without
/// consuming, one item is parsed and the loop goes on; an item failure ends
/// the whole parse. A terminator that fails after consuming input ends the
/// parse too, so terminators longer than one character usually want an
/// [`attempt`](crate::attempt()).
///
/// # Examples
/// - `many_till(any_char(), attempt(string("-->")))` on `"note-->"` → `['n', 'o', 't', 'e']`
pub struct ManyTill<P, E> {
    parser: P,
    end: E,
}

impl<P, E> ManyTill<P, E> {
    pub fn new(parser: P, end: E) -> Self {
        ManyTill { parser, end }
    }
}

impl<'code, P, E> Parser<'code> for ManyTill<P, E>
where
    P: Parser<'code>,
    E: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let mut values = Vec::new();

        loop {
            let start = state.cursor();
            let end_expected = match self.end.parse(state) {
                (Outcome::Success(_), after) => return (Outcome::Success(values), after),
                (Outcome::Failure(expected), after) if after.cursor() == start => {
                    state = after;
                    expected
                }
                (Outcome::Failure(expected), after) => return (Outcome::Failure(expected), after),
            };

            match self.parser.parse(state) {
                (Outcome::Success(value), after) => {
                    values.push(value);
                    state = after;
                }
                (Outcome::Failure(expected), after) if after.cursor() == start => {
                    return (Outcome::Failure(end_expected.merge(expected)), after);
                }
                (Outcome::Failure(expected), after) => return (Outcome::Failure(expected), after),
            }
        }
    }
}

/// Convenience function to create a ManyTill parser
pub fn many_till<'code, P, E>(parser: P, end: E) -> ManyTill<P, E>
where
    P: Parser<'code>,
    E: Parser<'code>,
{
    ManyTill::new(parser, end)
}
