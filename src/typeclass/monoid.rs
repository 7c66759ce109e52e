//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is the pair of an associative operation (`combine`, from
//! [`Semigroup`]) and an element (`empty`) that leaves every value unchanged
//! when combined with it, on either side.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a                                  // left identity
//! a.combine(T::empty()) == a                                  // right identity
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))        // associativity
//! ```
//!
//! Nothing in the type system enforces the laws. [`is_monoid`] checks them
//! for concrete values and the property tests exercise every instance.
//!
//! # Examples
//!
//! ```rust
//! use redbook::typeclass::{Semigroup, Monoid};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(String::from("hello").combine(String::empty()), "hello");
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

use super::foldable::Foldable;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, First, Last, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Semigroup, Monoid};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Monoid;
    ///
    /// let words = vec![String::from("a"), String::from("rose")];
    /// assert_eq!(String::combine_all(words), "arose");
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("hello").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Law Checking
// =============================================================================

/// Checks the monoid laws for three sample values.
///
/// Returns `true` when `x·(y·z) == (x·y)·z` and `x·0 == 0·x == x`.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{is_monoid, Sum};
///
/// assert!(is_monoid(&Sum(1), &Sum(2), &Sum(3)));
/// assert!(is_monoid(&String::from("a"), &String::from("b"), &String::from("c")));
/// ```
pub fn is_monoid<M>(x: &M, y: &M, z: &M) -> bool
where
    M: Monoid + Clone + PartialEq,
{
    let associative = x.combine_ref(&y.combine_ref(z)) == x.combine_ref(y).combine_ref(z);
    let right_identity = x.combine_ref(&M::empty());
    let left_identity = M::empty().combine_ref(x);
    associative && right_identity == left_identity && right_identity == *x
}

// =============================================================================
// Monoid-based Folds
// =============================================================================

/// Counts the occurrences of each item.
///
/// Each item becomes a one-entry map and the maps are merged with the
/// key-wise monoid of [`Sum`] counters.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use redbook::typeclass::bag;
///
/// let counts = bag(vec!["a", "rose", "is", "a", "rose"]);
/// assert_eq!(counts, HashMap::from([("a", 2), ("rose", 2), ("is", 1)]));
/// ```
pub fn bag<A>(items: Vec<A>) -> HashMap<A, usize>
where
    A: Eq + Hash,
{
    let counts: HashMap<A, Sum<usize>> = items.fold_map(|item| HashMap::from([(item, Sum(1))]));
    counts
        .into_iter()
        .map(|(item, Sum(count))| (item, count))
        .collect()
}

/// Arithmetic mean in a single pass, `None` for an empty slice.
///
/// The sum and the count are accumulated together through the product of
/// two [`Sum`] monoids.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::mean;
///
/// assert_eq!(mean(&[10.0, 20.0, 30.0]), Some(20.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    let (Sum(total), Sum(count)) = values
        .to_vec()
        .fold_map(|value| (Sum(value), Sum(1.0_f64)));
    (count > 0.0).then(|| total / count)
}

// =============================================================================
// String / Vec / Option / Unit
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Option forms a monoid when its inner type is a semigroup, with `None`
/// as the identity.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Tuples / HashMap
// =============================================================================

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<K: Eq + Hash, V: Semigroup> Monoid for HashMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with `A::default()` (zero) as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($one:literal => $($number:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}
