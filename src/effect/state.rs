//! State - threading a value through a sequence of steps.
//!
//! A `State<S, A>` wraps one transition function `S -> (A, S)`: given the
//! current state it yields a result and the next state. Combinators build new
//! `State` values around new closures; no transition runs until
//! [`State::run`], [`State::eval`] or [`State::exec`] is called.
//!
//! # Note on Type Classes
//!
//! `State` carries its combinators as inherent methods. The transition lives
//! behind `Rc<dyn Fn>`, which needs `'static` bounds the general
//! [`Functor`](crate::typeclass::Functor) signature does not impose.
//!
//! `flat_map` is the sequencing primitive. `fmap` and `map2` thread the state
//! directly instead of being routed through `flat_map` and `pure`, which would
//! force every result type to be `Clone`; they agree with the derived forms.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `state.fmap(|x| x) == state`
//! - Composition: `state.fmap(f).fmap(g) == state.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Get / Put
//!
//! - `put(s).then(get())` returns `s`
//! - `put(s1).then(put(s2)) == put(s2)`
//! - `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! Equality here means equal `run` output for every initial state.
//!
//! # Examples
//!
//! ```rust
//! use redbook::effect::State;
//!
//! fn tick() -> State<u32, u32> {
//!     State::new(|count| (count, count + 1))
//! }
//!
//! let ticks = State::sequence(vec![tick(), tick(), tick()]);
//! assert_eq!(ticks.run(5), (vec![5, 6, 7], 8));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A computation that threads a state of type `S` and produces an `A`.
///
/// # Examples
///
/// ```rust
/// use redbook::effect::State;
///
/// let computation: State<i32, i32> = State::get()
///     .flat_map(|current| State::put(current + 1).then(State::pure(current)));
///
/// assert_eq!(computation.run(10), (10, 11));
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Same as [`State::new`], named after what the closure is.
    pub fn from_transition<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self::new(transition)
    }

    /// Runs the transition from `initial_state`, returning `(result, final_state)`.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the transition and keeps only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.eval(10), 20);
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the transition and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// A step that yields `value` and leaves the state untouched.
    ///
    /// The value is cloned on every run, since the same `State` may be run
    /// any number of times.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result, leaving the state transition unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// assert_eq!(state.fmap(|value| value.to_string()).run(41), ("41".to_string(), 42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, next) = transition(state);
            (function(result), next)
        })
    }

    /// Runs this step, feeds its result to `function`, and runs the step it
    /// returns from the intermediate state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, intermediate) = transition(state);
            function(result).run(intermediate)
        })
    }

    /// Alias for [`State::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs this step, discards its result, then runs `next`.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs this step then `other`, combining both results with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(first.map2(second, |a, b| a + b).run(10), (32, 12));
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (left, intermediate) = first(state);
            let (right, last) = second(intermediate);
            (function(left, right), last)
        })
    }

    /// Runs this step then `other`, pairing the results.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// A step that projects a value out of the current state without changing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let length: State<String, usize> = State::gets(String::len);
    /// assert_eq!(length.run("candy".to_string()), (5, "candy".to_string()));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

// =============================================================================
// Get / Put / Modify
// =============================================================================

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// A step whose result is the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// A step that replaces the state with `new_state`.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// A step that replaces the state with `modifier(state)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let doubled: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(doubled.exec(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

// =============================================================================
// Sequencing
// =============================================================================

impl<S, A> State<S, Vec<A>>
where
    S: 'static,
    A: 'static,
{
    /// Threads the state through `steps` in order and collects their results.
    ///
    /// The steps are combined from the last one backwards with
    /// [`State::map2`], each result being prepended to the results of the
    /// steps after it, so the collected order equals the input order. An empty
    /// list yields an empty result and leaves the state unchanged.
    ///
    /// # Stack Depth
    ///
    /// Running the result nests one call per step, so the number of steps is
    /// bounded by the stack of the running thread. A thousand steps run
    /// comfortably; ten thousand can overflow a default thread stack and
    /// abort the process. Split longer runs into chunks and thread the state
    /// between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let push = |digit: u32| State::new(move |total: u32| (digit, total * 10 + digit));
    /// let digits = State::sequence(vec![push(1), push(2), push(3)]);
    /// assert_eq!(digits.run(0), (vec![1, 2, 3], 123));
    /// ```
    pub fn sequence(steps: Vec<State<S, A>>) -> Self {
        let empty: State<S, VecDeque<A>> = State::new(|state| (VecDeque::new(), state));
        steps
            .into_iter()
            .rev()
            .fold(empty, |rest, step| {
                step.map2(rest, |head, mut tail: VecDeque<A>| {
                    tail.push_front(head);
                    tail
                })
            })
            .fmap(Vec::from)
    }

    /// Like [`State::sequence`], but combines the steps from the first one
    /// forwards, appending each result. The observable result and the
    /// stack-depth limit are the same.
    pub fn sequence_left(steps: Vec<State<S, A>>) -> Self {
        let empty: Self = State::new(|state| (Vec::new(), state));
        steps.into_iter().fold(empty, |collected, step| {
            collected.map2(step, |mut results: Vec<A>, result| {
                results.push(result);
                results
            })
        })
    }

    /// Builds one step per item with `function`, then sequences them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::effect::State;
    ///
    /// let running_total = State::traverse(vec![3, 4, 5], |amount: i32| {
    ///     State::new(move |total: i32| (total + amount, total + amount))
    /// });
    /// assert_eq!(running_total.run(0), (vec![3, 7, 12], 12));
    /// ```
    pub fn traverse<T, I, F>(items: I, function: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> State<S, A>,
    {
        Self::sequence(items.into_iter().map(function).collect())
    }

    /// Runs `step` `count` times in a row, collecting every result.
    ///
    /// Built on [`State::sequence`] and subject to the same stack-depth
    /// limit: `count` should stay in the low thousands.
    pub fn replicate(count: usize, step: State<S, A>) -> Self {
        Self::sequence(vec![step; count])
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<State>")
    }
}

impl<S, A> fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<State>")
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counter() -> State<i32, i32> {
        State::new(|count| (count, count + 1))
    }

    #[rstest]
    fn display_and_debug_are_opaque() {
        assert_eq!(format!("{}", counter()), "<State>");
        assert_eq!(format!("{:?}", counter()), "<State>");
    }

    #[rstest]
    fn construction_is_lazy() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let observed = Rc::clone(&calls);
        let state: State<i32, i32> = State::new(move |s| {
            observed.set(observed.get() + 1);
            (s, s)
        });
        let mapped = state.fmap(|value| value + 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.run(1), (2, 1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    #[case(0, (0, 1))]
    #[case(41, (41, 42))]
    fn run_eval_exec(#[case] initial: i32, #[case] expected: (i32, i32)) {
        assert_eq!(counter().run(initial), expected);
        assert_eq!(counter().eval(initial), expected.0);
        assert_eq!(counter().exec(initial), expected.1);
    }

    #[rstest]
    fn pure_leaves_state_untouched() {
        let state: State<i32, &str> = State::pure("constant");
        assert_eq!(state.run(42), ("constant", 42));
    }

    #[rstest]
    fn get_put_modify() {
        assert_eq!(State::<i32, i32>::get().run(42), (42, 42));
        assert_eq!(State::put(100).run(42), ((), 100));
        assert_eq!(State::modify(|x: i32| x * 2).run(21), ((), 42));
    }

    #[rstest]
    fn put_then_get_returns_put_value() {
        let state = State::put(7).then(State::get());
        assert_eq!(state.run(0), (7, 7));
    }

    #[rstest]
    fn flat_map_threads_intermediate_state() {
        let chained = counter().flat_map(|first| counter().fmap(move |second| first * 10 + second));
        assert_eq!(chained.run(1), (12, 3));
    }

    #[rstest]
    fn map2_runs_left_before_right() {
        let labelled = State::new(|s: String| (s.clone(), s + "b"));
        let combined = labelled.clone().map2(labelled, |left, right| format!("{left}|{right}"));
        assert_eq!(combined.run("a".to_string()), ("a|ab".to_string(), "abb".to_string()));
    }

    #[rstest]
    fn product_pairs_results() {
        assert_eq!(counter().product(counter()).run(0), ((0, 1), 2));
    }

    #[rstest]
    fn sequence_preserves_input_order() {
        let steps = vec![counter(), counter().fmap(|n| n * 100), counter()];
        assert_eq!(State::sequence(steps).run(1), (vec![1, 200, 3], 4));
    }

    #[rstest]
    fn sequence_of_nothing_is_empty() {
        let empty: State<i32, Vec<i32>> = State::sequence(Vec::new());
        assert_eq!(empty.run(9), (Vec::new(), 9));
    }

    #[rstest]
    fn sequence_of_single_pure_is_that_value() {
        let single = State::sequence(vec![State::<i32, char>::pure('x')]);
        assert_eq!(single.run(3), (vec!['x'], 3));
    }

    #[rstest]
    fn sequence_left_agrees_with_sequence() {
        let steps = || vec![counter(), counter(), counter(), counter()];
        assert_eq!(
            State::sequence_left(steps()).run(10),
            State::sequence(steps()).run(10)
        );
    }

    #[rstest]
    fn replicate_repeats_step() {
        assert_eq!(State::replicate(3, counter()).run(0), (vec![0, 1, 2], 3));
        assert_eq!(State::replicate(0, counter()).run(0), (Vec::new(), 0));
    }

    #[rstest]
    fn sequenced_state_can_be_run_twice() {
        let ticks = State::replicate(2, counter());
        assert_eq!(ticks.run(0), ticks.run(0));
    }
}
