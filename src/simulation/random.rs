//! Seed-reproducible pseudo-random values threaded through [`State`].
//!
//! A [`Random<A>`] is a `State<Seed, A>`: every draw advances the seed with a
//! linear congruential step and derives its value from the new seed, so the
//! same starting seed always produces the same sequence.
//!
//! ```text
//! next = (1839567234 * seed + 972348567) mod 8239451023
//! ```
//!
//! The step is evaluated in IEEE double precision. The product does not fit
//! in 53 bits, so its rounding is part of the sequence.
//!
//! # Examples
//!
//! ```rust
//! use redbook::simulation::{Seed, generate_random_user};
//!
//! let (user, next) = generate_random_user().run(Seed::new(1337));
//! assert_eq!(user.name, "Nicole Jones");
//! assert_eq!(user.age, 80);
//! assert_eq!(user.favorite_team, "Jaguars");
//! assert_eq!(next, Seed::new(280_238_588));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effect::State;

const MULTIPLIER: f64 = 1_839_567_234.0;
const INCREMENT: f64 = 972_348_567.0;
const MODULUS: f64 = 8_239_451_023.0;

const FIRST_NAMES: &[&str] = &["Paul", "Nicole", "Zane", "Ellie"];
const LAST_NAMES: &[&str] = &["Gray", "Smith", "Jones", "Williams"];
const HOCKEY_TEAMS: &[&str] = &["Maple Leafs", "Canadiens", "Flyers", "Bruins"];
const FOOTBALL_TEAMS: &[&str] = &["Steelers", "Eagles", "Jaguars"];

/// A step of the generator.
pub type Random<A> = State<Seed, A>;

/// Generator state.
///
/// Every seed after the first draw is below 8239451023. Starting seeds above
/// 2^53 are rounded to the nearest double on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Seed(pub u64);

impl Seed {
    /// Creates a seed.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw seed value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::suboptimal_flops
    )]
    fn next(self) -> Self {
        // Two roundings, not a fused multiply-add.
        let next = (MULTIPLIER * self.0 as f64 + INCREMENT) % MODULUS;
        Self(next as u64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn fraction(self) -> f64 {
        self.0 as f64 / MODULUS
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A generated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomUser {
    /// First and last name separated by a space.
    pub name: String,
    /// Age in `[18, 100]`.
    pub age: u32,
    /// A hockey or football team.
    pub favorite_team: String,
}

/// Rounds to the nearest integer, halves towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Advances the seed and yields the new seed value.
///
/// # Examples
///
/// ```rust
/// use redbook::simulation::{Seed, next_int};
///
/// assert_eq!(next_int().run(Seed::new(1337)), (5_117_335_571, Seed::new(5_117_335_571)));
/// ```
pub fn next_int() -> Random<u64> {
    State::new(|seed: Seed| {
        let next = seed.next();
        (next.value(), next)
    })
}

/// Draws an integer in `[low, high]`.
///
/// The new seed is scaled to a fraction of the modulus and measured from
/// `high` towards `low`, then rounded.
///
/// # Examples
///
/// ```rust
/// use redbook::simulation::{Seed, random_in_range};
///
/// let age = random_in_range(18, 100).eval(Seed::new(42));
/// assert!((18..=100).contains(&age));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn random_in_range(low: i64, high: i64) -> Random<i64> {
    State::new(move |seed: Seed| {
        let next = seed.next();
        #[allow(clippy::cast_precision_loss)]
        let span = (low - high) as f64;
        let offset = round_half_up(next.fraction() * span) as i64;
        (high + offset, next)
    })
}

/// Draws one of `candidates`.
///
/// # Panics
///
/// Panics if `candidates` is empty.
///
/// # Examples
///
/// ```rust
/// use redbook::simulation::{Seed, pick_random};
///
/// static COLORS: [&str; 3] = ["red", "green", "blue"];
/// let color = pick_random(&COLORS).eval(Seed::new(7));
/// assert!(COLORS.contains(&color));
/// ```
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn pick_random<A>(candidates: &'static [A]) -> Random<A>
where
    A: Clone + 'static,
{
    assert!(
        !candidates.is_empty(),
        "pick_random requires at least one candidate"
    );
    let last = (candidates.len() - 1) as i64;
    random_in_range(0, last).fmap(move |index| candidates[index as usize].clone())
}

/// Draws `true` or `false`.
pub fn random_boolean() -> Random<bool> {
    random_in_range(0, 1).fmap(|value| value == 1)
}

/// Draws a first name then a last name, joined by a space.
pub fn random_full_name() -> Random<String> {
    pick_random(FIRST_NAMES).map2(pick_random(LAST_NAMES), |first, last| {
        format!("{first} {last}")
    })
}

/// Draws a coin flip, then a hockey team on `true` or a football team on `false`.
pub fn random_team() -> Random<String> {
    random_boolean()
        .flat_map(|hockey| {
            if hockey {
                pick_random(HOCKEY_TEAMS)
            } else {
                pick_random(FOOTBALL_TEAMS)
            }
        })
        .fmap(str::to_string)
}

/// Draws a user: name, then age, then team.
///
/// The seed is threaded through the fields in that order; drawing them in
/// another order produces different users.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_random_user() -> Random<RandomUser> {
    let age = random_in_range(18, 100).fmap(|age| age as u32);
    random_full_name()
        .product(age)
        .map2(random_team(), |(name, age), favorite_team| RandomUser {
            name,
            age,
            favorite_team,
        })
}

/// Draws `count` users in a row.
///
/// Shares the stack-depth limit of [`State::replicate`].
///
/// # Examples
///
/// ```rust
/// use redbook::simulation::{Seed, generate_random_users};
///
/// let users = generate_random_users(3).eval(Seed::new(1337));
/// let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
/// assert_eq!(names, ["Nicole Jones", "Ellie Smith", "Nicole Gray"]);
/// ```
pub fn generate_random_users(count: usize) -> Random<Vec<RandomUser>> {
    State::replicate(count, generate_random_user())
}
