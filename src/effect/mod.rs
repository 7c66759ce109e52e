//! Stateful computations.
//!
//! - [`State`]: a transition `S -> (A, S)` with combinators to sequence steps
//!
//! ```rust
//! use redbook::effect::State;
//!
//! let computation = State::modify(|count: u32| count + 1)
//!     .then(State::modify(|count: u32| count * 10))
//!     .then(State::get());
//!
//! assert_eq!(computation.run(1), (20, 20));
//! ```

mod state;

pub use state::State;
