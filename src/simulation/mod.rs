//! Simulations built on [`State`](crate::effect::State).
//!
//! - [`machine`]: a candy vending machine fed a list of [`Input`]s
//! - [`random`]: a linear congruential generator and random users drawn from it
//!
//! Both are plain `State` values: building them does nothing, running them
//! with a starting [`Machine`] or [`Seed`] is deterministic.

pub mod machine;
pub mod random;

pub use machine::{Input, InputError, Machine, simulate_machine};
pub use random::{
    Random, RandomUser, Seed, generate_random_user, generate_random_users, next_int, pick_random,
    random_boolean, random_full_name, random_in_range, random_team,
};
