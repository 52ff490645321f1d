//! State threading independent of parsing.
//!
//! A [`Sequencer`] is a computation that, run against a state, produces a value
//! and the next state. Binding two sequencers runs the second against the state
//! left by the first, which gives ordered composition without manual plumbing.
//! The parser monad is this abstraction specialised to
//! [`ParserState`](crate::state::ParserState) with an [`Outcome`](crate::Outcome)
//! as the value (see [`crate::parser::Sequenced`] and [`crate::parser::lift`]).

/// Run with a state, get a value and an updated state
pub trait Sequencer<S> {
    type Value;

    fn run(&self, state: S) -> (Self::Value, S);
}

/// Succeeds with a fixed value and leaves the state untouched
pub struct Pure<A> {
    value: A,
}

impl<S, A: Clone> Sequencer<S> for Pure<A> {
    type Value = A;

    fn run(&self, state: S) -> (Self::Value, S) {
        (self.value.clone(), state)
    }
}

pub fn pure<A: Clone>(value: A) -> Pure<A> {
    Pure { value }
}

/// Yields a copy of the current state
pub struct Get;

impl<S: Clone> Sequencer<S> for Get {
    type Value = S;

    fn run(&self, state: S) -> (Self::Value, S) {
        (state.clone(), state)
    }
}

pub fn get() -> Get {
    Get
}

/// Yields a projection of the current state
pub struct Gets<F> {
    project: F,
}

impl<S, F, A> Sequencer<S> for Gets<F>
where
    F: Fn(&S) -> A,
{
    type Value = A;

    fn run(&self, state: S) -> (Self::Value, S) {
        ((self.project)(&state), state)
    }
}

pub fn gets<S, F, A>(project: F) -> Gets<F>
where
    F: Fn(&S) -> A,
{
    Gets { project }
}

/// Replaces the state
pub struct Put<S> {
    state: S,
}

impl<S: Clone> Sequencer<S> for Put<S> {
    type Value = ();

    fn run(&self, _state: S) -> (Self::Value, S) {
        ((), self.state.clone())
    }
}

pub fn put<S: Clone>(state: S) -> Put<S> {
    Put { state }
}

/// Applies a function to the state
pub struct Modify<F> {
    update: F,
}

impl<S, F> Sequencer<S> for Modify<F>
where
    F: Fn(S) -> S,
{
    type Value = ();

    fn run(&self, state: S) -> (Self::Value, S) {
        ((), (self.update)(state))
    }
}

pub fn modify<S, F>(update: F) -> Modify<F>
where
    F: Fn(S) -> S,
{
    Modify { update }
}

/// Wraps a raw state transition
pub struct FromFn<F> {
    step: F,
}

impl<S, F, A> Sequencer<S> for FromFn<F>
where
    F: Fn(S) -> (A, S),
{
    type Value = A;

    fn run(&self, state: S) -> (Self::Value, S) {
        (self.step)(state)
    }
}

pub fn from_fn<S, F, A>(step: F) -> FromFn<F>
where
    F: Fn(S) -> (A, S),
{
    FromFn { step }
}

/// Bind: runs `first`, feeds its value to `next` and runs the result on the new state
pub struct Then<M, F> {
    first: M,
    next: F,
}

impl<S, M, F, N> Sequencer<S> for Then<M, F>
where
    M: Sequencer<S>,
    F: Fn(M::Value) -> N,
    N: Sequencer<S>,
{
    type Value = N::Value;

    fn run(&self, state: S) -> (Self::Value, S) {
        let (value, state) = self.first.run(state);
        (self.next)(value).run(state)
    }
}

/// Transforms the value, leaving the state transition as is
pub struct Map<M, F> {
    inner: M,
    mapper: F,
}

impl<S, M, F, B> Sequencer<S> for Map<M, F>
where
    M: Sequencer<S>,
    F: Fn(M::Value) -> B,
{
    type Value = B;

    fn run(&self, state: S) -> (Self::Value, S) {
        let (value, state) = self.inner.run(state);
        ((self.mapper)(value), state)
    }
}

/// Extension trait to add `.then()` and `.map()` to sequencers
pub trait SequencerExt<S>: Sequencer<S> + Sized {
    fn then<F, N>(self, next: F) -> Then<Self, F>
    where
        F: Fn(Self::Value) -> N,
        N: Sequencer<S>,
    {
        Then { first: self, next }
    }

    fn map<F, B>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Value) -> B,
    {
        Map {
            inner: self,
            mapper,
        }
    }
}

impl<S, M> SequencerExt<S> for M where M: Sequencer<S> {}

pub fn run_state<S, M: Sequencer<S>>(sequencer: &M, state: S) -> (M::Value, S) {
    sequencer.run(state)
}

pub fn eval_state<S, M: Sequencer<S>>(sequencer: &M, state: S) -> M::Value {
    sequencer.run(state).0
}

pub fn exec_state<S, M: Sequencer<S>>(sequencer: &M, state: S) -> S {
    sequencer.run(state).1
}
