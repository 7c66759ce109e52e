//! Candy machine and random user simulations.
//!
//! The library builds the simulations from a [`CandyConfig`] and returns a
//! [`SimulationReport`]; the `candy` binary wires in configuration and
//! logging and prints the report.

pub mod config;

pub use config::{CandyConfig, ConfigError, MAX_INPUTS, MAX_USERS};

use redbook::simulation::{Machine, RandomUser, Seed, generate_random_users, simulate_machine};
use serde::Serialize;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// The machine after every input.
    pub machine: Machine,
    /// Candies left.
    pub candies: u32,
    /// Coins collected.
    pub coins: u32,
    /// Users drawn from the configured seed.
    pub users: Vec<RandomUser>,
    /// Seed after the last draw.
    pub next_seed: Seed,
}

/// Runs the machine and the user generator described by `config`.
pub fn run(config: &CandyConfig) -> SimulationReport {
    tracing::debug!(
        inputs = config.inputs.len(),
        locked = config.machine.locked,
        candies = config.machine.candies,
        coins = config.machine.coins,
        "simulating machine"
    );
    let ((candies, coins), machine) = simulate_machine(&config.inputs).run(config.machine);
    tracing::info!(candies, coins, locked = machine.locked, "machine settled");

    tracing::debug!(seed = %config.seed, count = config.users, "generating users");
    let (users, next_seed) = generate_random_users(config.users).run(config.seed);
    for user in &users {
        tracing::debug!(name = %user.name, age = user.age, team = %user.favorite_team, "user");
    }
    tracing::info!(count = users.len(), next_seed = %next_seed, "users generated");

    SimulationReport {
        machine,
        candies,
        coins,
        users,
        next_seed,
    }
}
