//! Newtype wrappers that select a monoid over a shared carrier type.
//!
//! The same underlying type often forms several monoids. Integers combine by
//! addition ([`Sum`]) or multiplication ([`Product`]), booleans by `||`
//! ([`Any`]) or `&&` ([`All`]), and optional values by keeping the first
//! ([`First`]) or the last ([`Last`]) present value. Wrapping the value picks
//! the instance; the `Semigroup` and `Monoid` implementations live next to
//! the traits.
//!
//! # The Bounded Trait
//!
//! [`Bounded`] provides the extreme values that serve as identity elements
//! for [`Max`] and [`Min`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! wrapper_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            #[doc = concat!("Creates a new `", stringify!($wrapper), "` wrapping the given value.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            #[doc = concat!("Consumes the `", stringify!($wrapper), "` and returns the inner value.")]
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum<A>(pub A);

wrapper_accessors!(Sum);

// =============================================================================
// Product Wrapper
// =============================================================================

/// The multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`,
/// identity `Product(1)`.
///
/// `Default` is not derived because the identity is 1, not 0.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Monoid, Semigroup, Product};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<i64>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product<A>(pub A);

wrapper_accessors!(Product);

// =============================================================================
// Max / Min Wrappers
// =============================================================================

/// Keeps the larger value. The identity is [`Bounded::MIN_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Max<A>(pub A);

wrapper_accessors!(Max);

/// Keeps the smaller value. The identity is [`Bounded::MAX_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Min<A>(pub A);

wrapper_accessors!(Min);

// =============================================================================
// Any / All Wrappers
// =============================================================================

/// Boolean disjunction: identity `Any(false)`.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Any, Monoid};
///
/// assert_eq!(Any::combine_all([Any(false), Any(true)]), Any(true));
/// assert_eq!(Any::empty(), Any(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Any(pub bool);

/// Boolean conjunction: identity `All(true)`.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{All, Monoid};
///
/// assert_eq!(All::combine_all([All(true), All(false)]), All(false));
/// assert_eq!(All::empty(), All(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct All(pub bool);

// =============================================================================
// First / Last Wrappers
// =============================================================================

/// The leftmost present value wins: `First(x).combine(y)` is `x.or(y)`.
///
/// This is the "or else" monoid over `Option`. Unlike the plain `Option`
/// monoid it does not require the element type to be a semigroup.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{First, Monoid};
///
/// let values = vec![First(None), First(Some("a")), First(Some("b"))];
/// assert_eq!(First::combine_all(values), First(Some("a")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct First<A>(pub Option<A>);

/// The rightmost present value wins; the dual of [`First`].
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Last, Monoid};
///
/// let values = vec![Last(Some("a")), Last(Some("b")), Last(None)];
/// assert_eq!(Last::combine_all(values), Last(Some("b")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Last<A>(pub Option<A>);

impl<A> First<A> {
    /// Returns the wrapped option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> Last<A> {
    /// Returns the wrapped option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> From<Option<A>> for First<A> {
    fn from(value: Option<A>) -> Self {
        Self(value)
    }
}

impl<A> From<Option<A>> for Last<A> {
    fn from(value: Option<A>) -> Self {
        Self(value)
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// A trait for types that have minimum and maximum bounds.
///
/// - `Max<A>` uses `A::MIN_VALUE` as its identity
/// - `Min<A>` uses `A::MAX_VALUE` as its identity
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Candies(u8);
///
/// impl Bounded for Candies {
///     const MIN_VALUE: Self = Candies(0);
///     const MAX_VALUE: Self = Candies(50);
/// }
///
/// assert_eq!(Candies::MAX_VALUE.0, 50);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_accessors() {
        let sum = Sum::new(42);
        assert_eq!(*sum.as_inner(), 42);
        assert_eq!(sum.into_inner(), 42);
    }

    #[rstest]
    fn product_from_value() {
        let product: Product<u8> = 7.into();
        assert_eq!(product, Product(7));
    }

    #[rstest]
    fn max_and_min_order_like_inner() {
        assert!(Max::new(3) < Max::new(5));
        assert!(Min::new(3) < Min::new(5));
    }

    #[rstest]
    fn first_and_last_unwrap() {
        assert_eq!(First::from(Some(1)).into_inner(), Some(1));
        assert_eq!(Last::<i32>::from(None).into_inner(), None);
    }

    #[rstest]
    #[case(i8::MIN_VALUE == i8::MIN)]
    #[case(u64::MAX_VALUE == u64::MAX)]
    #[case(!bool::MIN_VALUE)]
    #[case(char::MIN_VALUE == '\0')]
    fn bounded_extremes(#[case] holds: bool) {
        assert!(holds);
    }
}
