//! Candy vending machine driven by [`State`].
//!
//! Each [`Input`] becomes a `State::modify` step over [`Machine`]; the steps
//! are sequenced and the final machine is read back with `State::get`.
//!
//! # Rules
//!
//! - An exhausted machine (`candies == 0`) ignores every input.
//! - `Coin` into a locked machine unlocks it and keeps the coin. The coin
//!   count saturates at `u32::MAX`.
//! - `Turn` on an unlocked machine dispenses a candy and locks it.
//! - `Coin` into an unlocked machine and `Turn` on a locked one do nothing.
//!
//! # Examples
//!
//! ```rust
//! use redbook::simulation::{Input, Machine, simulate_machine};
//!
//! let inputs = [Input::Coin, Input::Turn, Input::Coin, Input::Turn];
//! let machine = Machine::new(true, 5, 10);
//! assert_eq!(simulate_machine(&inputs).eval(machine), (3, 12));
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effect::State;

/// One action a customer can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Input {
    /// Insert a coin.
    Coin,
    /// Turn the knob.
    Turn,
}

impl fmt::Display for Input {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coin => formatter.write_str("coin"),
            Self::Turn => formatter.write_str("turn"),
        }
    }
}

/// Parses `"coin"` or `"turn"`, ignoring case and surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use redbook::simulation::{Input, InputError};
///
/// assert_eq!(" Coin ".parse::<Input>(), Ok(Input::Coin));
/// assert_eq!(
///     "kick".parse::<Input>(),
///     Err(InputError::Unrecognized("kick".to_string()))
/// );
/// ```
impl FromStr for Input {
    type Err = InputError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("coin") {
            Ok(Self::Coin)
        } else if trimmed.eq_ignore_ascii_case("turn") {
            Ok(Self::Turn)
        } else {
            Err(InputError::Unrecognized(trimmed.to_string()))
        }
    }
}

/// Error returned when text does not name an [`Input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text was neither `coin` nor `turn`.
    Unrecognized(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(text) => {
                write!(formatter, "unrecognized machine input: {text:?} (expected coin or turn)")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Snapshot of the vending machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Machine {
    /// Whether the knob is locked.
    pub locked: bool,
    /// Candies left.
    pub candies: u32,
    /// Coins collected.
    pub coins: u32,
}

impl Machine {
    /// Creates a machine.
    pub const fn new(locked: bool, candies: u32, coins: u32) -> Self {
        Self {
            locked,
            candies,
            coins,
        }
    }

    /// Returns the machine after one input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::simulation::{Input, Machine};
    ///
    /// let unlocked = Machine::new(true, 1, 0).update(Input::Coin);
    /// assert_eq!(unlocked, Machine::new(false, 1, 1));
    ///
    /// let empty = unlocked.update(Input::Turn);
    /// assert_eq!(empty, Machine::new(true, 0, 1));
    /// assert_eq!(empty.update(Input::Coin), empty);
    /// ```
    #[must_use]
    pub const fn update(self, input: Input) -> Self {
        match (input, self) {
            (_, Self { candies: 0, .. }) => self,
            (Input::Coin, Self { locked: true, .. }) => Self {
                locked: false,
                coins: self.coins.saturating_add(1),
                ..self
            },
            (Input::Turn, Self { locked: false, .. }) => Self {
                locked: true,
                candies: self.candies - 1,
                ..self
            },
            (Input::Coin, Self { locked: false, .. }) | (Input::Turn, Self { locked: true, .. }) => {
                self
            }
        }
    }

    /// Returns `(candies, coins)`.
    pub const fn totals(&self) -> (u32, u32) {
        (self.candies, self.coins)
    }
}

/// Feeds every input to the machine in order and yields `(candies, coins)`.
///
/// The inputs are combined with [`State::sequence`] and share its
/// stack-depth limit.
///
/// # Examples
///
/// ```rust
/// use redbook::simulation::{Input, Machine, simulate_machine};
///
/// let simulation = simulate_machine(&[Input::Coin, Input::Turn]);
/// let ((candies, coins), machine) = simulation.run(Machine::new(true, 5, 10));
/// assert_eq!((candies, coins), (4, 11));
/// assert!(machine.locked);
/// ```
pub fn simulate_machine(inputs: &[Input]) -> State<Machine, (u32, u32)> {
    let steps = inputs
        .iter()
        .map(|&input| State::modify(move |machine: Machine| machine.update(input)))
        .collect();
    State::sequence(steps)
        .flat_map(|_| State::get())
        .fmap(|machine: Machine| machine.totals())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use Input::{Coin, Turn};

    const START: Machine = Machine::new(true, 5, 10);

    #[rstest]
    #[case(Machine::new(true, 5, 10), Coin, Machine::new(false, 5, 11))]
    #[case(Machine::new(false, 5, 11), Coin, Machine::new(false, 5, 11))]
    #[case(Machine::new(false, 5, 11), Turn, Machine::new(true, 4, 11))]
    #[case(Machine::new(true, 5, 10), Turn, Machine::new(true, 5, 10))]
    #[case(Machine::new(true, 0, 10), Coin, Machine::new(true, 0, 10))]
    #[case(Machine::new(false, 0, 10), Turn, Machine::new(false, 0, 10))]
    #[case(Machine::new(true, 3, 0), Coin, Machine::new(false, 3, 1))]
    #[case(Machine::new(true, 5, u32::MAX), Coin, Machine::new(false, 5, u32::MAX))]
    fn update_rules(#[case] machine: Machine, #[case] input: Input, #[case] expected: Machine) {
        assert_eq!(machine.update(input), expected);
    }

    #[rstest]
    #[case(&[Coin], (5, 11))]
    #[case(&[Turn], (5, 10))]
    #[case(&[Coin, Turn], (4, 11))]
    #[case(&[Coin, Turn, Coin, Turn, Coin, Turn, Coin, Turn], (1, 14))]
    #[case(&[Turn, Coin, Turn, Coin, Turn, Coin, Turn, Coin, Turn, Turn], (1, 14))]
    #[case(&[], (5, 10))]
    fn simulate_from_locked_machine(#[case] inputs: &[Input], #[case] expected: (u32, u32)) {
        assert_eq!(simulate_machine(inputs).eval(START), expected);
    }

    #[rstest]
    fn exhausted_machine_ignores_inputs() {
        let inputs = [Coin, Turn, Coin, Turn, Coin, Turn];
        let ((candies, coins), machine) = simulate_machine(&inputs).run(Machine::new(true, 1, 0));
        assert_eq!((candies, coins), (0, 1));
        assert_eq!(machine, Machine::new(true, 0, 1));
    }

    #[rstest]
    #[case("coin", Ok(Coin))]
    #[case("TURN", Ok(Turn))]
    #[case("  turn\n", Ok(Turn))]
    #[case("kick", Err(InputError::Unrecognized("kick".to_string())))]
    #[case("", Err(InputError::Unrecognized(String::new())))]
    fn parse_input(#[case] text: &str, #[case] expected: Result<Input, InputError>) {
        assert_eq!(text.parse::<Input>(), expected);
    }

    #[rstest]
    fn input_display_round_trips_through_parse() {
        assert_eq!(Coin.to_string().parse::<Input>(), Ok(Coin));
        assert_eq!(Turn.to_string(), "turn");
    }

    #[rstest]
    fn input_error_message_names_the_input() {
        let error = InputError::Unrecognized("kick".to_string());
        assert_eq!(
            error.to_string(),
            "unrecognized machine input: \"kick\" (expected coin or turn)"
        );
    }
}
