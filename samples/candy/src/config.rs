//! Simulation configuration.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Every variable has a default; a variable that is set but cannot be
//! parsed is an error.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CANDY_LOCKED` | `true` | machine starts locked |
//! | `CANDY_CANDIES` | `5` | candies loaded |
//! | `CANDY_COINS` | `10` | coins already collected |
//! | `CANDY_INPUTS` | `coin,turn,coin,turn,coin,turn,coin,turn` | comma separated inputs |
//! | `CANDY_SEED` | `1337` | random generator seed |
//! | `CANDY_USERS` | `15` | users to generate |
//!
//! `CANDY_INPUTS` may list at most [`MAX_INPUTS`] entries and `CANDY_USERS`
//! may not exceed [`MAX_USERS`]. Both simulations nest one call per step when
//! they run, so longer runs would overflow the stack.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use redbook::simulation::{Input, InputError, Machine, Seed};
use thiserror::Error;

/// Largest accepted number of machine inputs.
pub const MAX_INPUTS: usize = 1_000;

/// Largest accepted number of generated users.
pub const MAX_USERS: usize = 1_000;

const DEFAULT_INPUTS: [Input; 8] = [
    Input::Coin,
    Input::Turn,
    Input::Coin,
    Input::Turn,
    Input::Coin,
    Input::Turn,
    Input::Coin,
    Input::Turn,
];

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set to a value of the wrong type.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An entry of the input list is neither `coin` nor `turn`.
    #[error("Invalid entry in {key}: {source}")]
    InvalidInput {
        /// The name of the environment variable.
        key: String,
        /// The parse failure.
        #[source]
        source: InputError,
    },
}

/// Everything a simulation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandyConfig {
    /// The machine before any input.
    pub machine: Machine,
    /// Inputs fed to the machine, in order.
    pub inputs: Vec<Input>,
    /// Starting seed of the random generator.
    pub seed: Seed,
    /// Number of random users to draw.
    pub users: usize,
}

impl Default for CandyConfig {
    fn default() -> Self {
        Self {
            machine: Machine::new(true, 5, 10),
            inputs: DEFAULT_INPUTS.to_vec(),
            seed: Seed::new(1337),
            users: 15,
        }
    }
}

impl CandyConfig {
    /// Loads the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparsable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let locked = parse_or(&lookup, "CANDY_LOCKED", defaults.machine.locked)?;
        let candies = parse_or(&lookup, "CANDY_CANDIES", defaults.machine.candies)?;
        let coins = parse_or(&lookup, "CANDY_COINS", defaults.machine.coins)?;
        let inputs = lookup("CANDY_INPUTS")
            .map_or(Ok(defaults.inputs), |value| parse_inputs("CANDY_INPUTS", &value))?;
        let seed = parse_or(&lookup, "CANDY_SEED", defaults.seed.value())?;
        let users = parse_or(&lookup, "CANDY_USERS", defaults.users)?;

        ensure_at_most("CANDY_INPUTS", inputs.len(), MAX_INPUTS, "inputs")?;
        ensure_at_most("CANDY_USERS", users, MAX_USERS, "users")?;

        Ok(Self {
            machine: Machine::new(locked, candies, coins),
            inputs,
            seed: Seed::new(seed),
            users,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}

fn ensure_at_most(key: &str, count: usize, limit: usize, what: &str) -> Result<(), ConfigError> {
    if count > limit {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{count} {what} requested, at most {limit} supported"),
        });
    }
    Ok(())
}

/// Splits a comma separated list of inputs, skipping blank entries.
fn parse_inputs(key: &str, value: &str) -> Result<Vec<Input>, ConfigError> {
    value
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry.parse().map_err(|source| ConfigError::InvalidInput {
                key: key.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parse_inputs_skips_blank_entries() {
        let inputs = parse_inputs("CANDY_INPUTS", "coin, ,turn,").unwrap();
        assert_eq!(inputs, vec![Input::Coin, Input::Turn]);
    }

    #[rstest]
    fn parse_inputs_rejects_unknown_entry() {
        let error = parse_inputs("CANDY_INPUTS", "coin,kick").unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidInput {
                key: "CANDY_INPUTS".to_string(),
                source: InputError::Unrecognized("kick".to_string()),
            }
        );
    }

    #[rstest]
    #[case(1_000, true)]
    #[case(1_001, false)]
    fn ensure_at_most_accepts_the_limit(#[case] count: usize, #[case] accepted: bool) {
        assert_eq!(ensure_at_most("CANDY_USERS", count, MAX_USERS, "users").is_ok(), accepted);
    }

    #[rstest]
    fn config_error_display() {
        let error = ConfigError::InvalidValue {
            key: "CANDY_USERS".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for CANDY_USERS: invalid digit found in string"
        );
    }
}
