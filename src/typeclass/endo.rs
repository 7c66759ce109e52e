//! The endofunction monoid, the pointwise function monoid and the dual of a
//! monoid.
//!
//! Functions from a type to itself form a monoid under composition:
//! `combine` is `f ∘ g` (apply `g`, then `f`) and `empty` is the identity
//! function. Every monoid also has a *dual* whose `combine` takes its
//! arguments in the opposite order. For a commutative operation such as
//! [`Sum`](super::Sum) the dual is the same monoid; for composition the dual
//! turns "apply right to left" into "apply left to right".
//!
//! `Foldable::fold_left` is derived from `fold_right` through exactly this
//! pair: each element becomes `Dual(Endo(|b| f(b, a)))`, and the composed
//! function is applied to the seed.
//!
//! # Examples
//!
//! ```rust
//! use redbook::typeclass::{Dual, Endo, Semigroup};
//!
//! let add_one = Endo::new(|n: i32| n + 1);
//! let double = Endo::new(|n: i32| n * 2);
//! assert_eq!(add_one.combine(double).apply(5), 11);
//!
//! let add_one = Dual(Endo::new(|n: i32| n + 1));
//! let double = Dual(Endo::new(|n: i32| n * 2));
//! assert_eq!(add_one.combine(double).0.apply(5), 12);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::monoid::Monoid;
use super::semigroup::Semigroup;

// =============================================================================
// Endo
// =============================================================================

/// A function `A -> A`, combined by composition.
///
/// The function is boxed as `FnOnce` so that a composed chain can move each
/// captured element into its call; an `Endo` is applied once.
pub struct Endo<'a, A> {
    function: Box<dyn FnOnce(A) -> A + 'a>,
}

impl<'a, A: 'a> Endo<'a, A> {
    /// Wraps a function as an endofunction.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(A) -> A + 'a,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Applies the function to a value.
    pub fn apply(self, value: A) -> A {
        (self.function)(value)
    }
}

/// Composition: `f.combine(g)` applies `g` first, then `f`.
impl<'a, A: 'a> Semigroup for Endo<'a, A> {
    fn combine(self, other: Self) -> Self {
        Endo::new(move |value| self.apply(other.apply(value)))
    }
}

impl<'a, A: 'a> Monoid for Endo<'a, A> {
    fn empty() -> Self {
        Endo::new(|value| value)
    }
}

impl<A> fmt::Debug for Endo<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Endo>")
    }
}

// =============================================================================
// Pointwise
// =============================================================================

/// A function `&A -> B` into a monoid, combined pointwise.
///
/// `f.combine(g)` maps every argument to `f(a).combine(g(a))`; `empty` maps
/// every argument to `B::empty()`. The laws of `B` carry over argument by
/// argument.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Monoid, Pointwise, Semigroup, Sum};
///
/// let length = Pointwise::new(|text: &String| Sum(text.len()));
/// let vowels = Pointwise::new(|text: &String| {
///     Sum(text.chars().filter(|c| "aeiou".contains(*c)).count())
/// });
///
/// let score = length.combine(vowels);
/// assert_eq!(score.apply(&String::from("candy")), Sum(6));
/// assert_eq!(Pointwise::<String, Sum<usize>>::empty().apply(&String::from("x")), Sum(0));
/// ```
pub struct Pointwise<'a, A, B> {
    function: Box<dyn Fn(&A) -> B + 'a>,
}

impl<'a, A: 'a, B: 'a> Pointwise<'a, A, B> {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&A) -> B + 'a,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Applies the function to a value. Unlike [`Endo::apply`], the function
    /// is kept and may be applied again.
    pub fn apply(&self, value: &A) -> B {
        (self.function)(value)
    }
}

impl<'a, A: 'a, B: Semigroup + 'a> Semigroup for Pointwise<'a, A, B> {
    fn combine(self, other: Self) -> Self {
        Pointwise::new(move |value: &A| self.apply(value).combine(other.apply(value)))
    }
}

impl<'a, A: 'a, B: Monoid + 'a> Monoid for Pointwise<'a, A, B> {
    fn empty() -> Self {
        Pointwise::new(|_: &A| B::empty())
    }
}

impl<A, B> fmt::Debug for Pointwise<'_, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Pointwise>")
    }
}

// =============================================================================
// Dual
// =============================================================================

/// The dual of a monoid: `Dual(x).combine(Dual(y)) == Dual(y.combine(x))`.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Dual, Monoid, Semigroup};
///
/// let joined = Dual(String::from("a")).combine(Dual(String::from("b")));
/// assert_eq!(joined, Dual(String::from("ba")));
/// assert_eq!(Dual::<String>::empty(), Dual(String::new()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dual<M>(pub M);

impl<M> Dual<M> {
    /// Consumes the `Dual` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M: Semigroup> Semigroup for Dual<M> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}

impl<M: Monoid> Monoid for Dual<M> {
    fn empty() -> Self {
        Self(M::empty())
    }
}
