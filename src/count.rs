use crate::outcome::Outcome;
use crate::parser::{Parser, Reply};
use crate::state::ParserState;

/// Parser combinator that applies a parser exactly `n` times in sequence
///
/// The first failing application ends the parse with that failure, as is:
/// there is no backtracking over the occurrences already matched.
pub struct Count<P> {
    times: usize,
    parser: P,
}

impl<P> Count<P> {
    pub fn new(times: usize, parser: P) -> Self {
        Count { times, parser }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut state: ParserState<'code>) -> Reply<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.times);

        for _ in 0..self.times {
            match self.parser.parse(state) {
                (Outcome::Success(value), next) => {
                    values.push(value);
                    state = next;
                }
                (Outcome::Failure(expected), next) => return (Outcome::Failure(expected), next),
            }
        }

        (Outcome::Success(values), state)
    }
}

/// Convenience function to create a Count parser
pub fn count<'code, P>(times: usize, parser: P) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(times, parser)
}
