use crate::error::{Expected, ParseFailure};
use crate::outcome::Outcome;
use crate::sequencer::{self, Sequencer};
use crate::state::ParserState;
use tracing::debug;

/// What one parser step hands back: the outcome and the state it left behind
///
/// The state is returned on failure too. Combinators compare its cursor with
/// the one they started from to tell a consuming failure from a clean one.
pub type Reply<'code, O> = (Outcome<Expected, O>, ParserState<'code>);

/// Core parser trait for parser combinators
///
/// A parser is a plain value describing a computation from a [`ParserState`]
/// to a [`Reply`]. Building one does no work; the same value can be run any
/// number of times, from any state, and each run is independent of the others.
/// That is what lets alternation and repetition retry a sub-parser from a
/// saved state.
pub trait Parser<'code> {
    type Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        (**self).parse(state)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        (**self).parse(state)
    }
}

/// Views a parser as a state-threading [`Sequencer`] over [`ParserState`]
pub struct Sequenced<P> {
    parser: P,
}

impl<P> Sequenced<P> {
    pub fn new(parser: P) -> Self {
        Sequenced { parser }
    }
}

impl<'code, P> Sequencer<ParserState<'code>> for Sequenced<P>
where
    P: Parser<'code>,
{
    type Value = Outcome<Expected, P::Output>;

    fn run(&self, state: ParserState<'code>) -> (Self::Value, ParserState<'code>) {
        self.parser.parse(state)
    }
}

/// A [`Sequencer`] over [`ParserState`] whose value is an [`Outcome`], usable as a parser
pub struct Lifted<M> {
    sequencer: M,
}

impl<'code, M, A> Parser<'code> for Lifted<M>
where
    M: Sequencer<ParserState<'code>, Value = Outcome<Expected, A>>,
{
    type Output = A;

    fn parse(&self, state: ParserState<'code>) -> Reply<'code, Self::Output> {
        self.sequencer.run(state)
    }
}

/// Lifts a state computation into the parser monad
pub fn lift<'code, M, A>(sequencer: M) -> Lifted<M>
where
    M: Sequencer<ParserState<'code>, Value = Outcome<Expected, A>>,
{
    Lifted { sequencer }
}

/// Runs `parser` over `input` from the start
///
/// On success the value is returned and whatever input remains is ignored; use
/// [`eof`](crate::eof()) to require that everything was consumed. On failure the
/// error names the deepest character the parse consumed and what was expected
/// there (see [`ParseFailure`]).
pub fn parse<'code, P>(input: &'code str, parser: &P) -> Result<P::Output, ParseFailure>
where
    P: Parser<'code> + ?Sized,
{
    debug!(input_len = input.len(), "parse started");

    let sequenced = Sequenced::new(parser);
    let (outcome, state) = sequencer::run_state(&sequenced, ParserState::new(input));

    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(expected) => {
            let failure = ParseFailure::new(expected, &state);
            debug!(
                offset = failure.offset(),
                message = failure.message(),
                "parse failed"
            );
            Err(failure)
        }
    }
}
