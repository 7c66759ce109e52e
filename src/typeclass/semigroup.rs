//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity is what lets a fold regroup its operands freely: the
//! elements stay in order, only the parenthesisation changes.
//!
//! # Examples
//!
//! ```rust
//! use redbook::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Add, Mul};

use super::wrappers::{All, Any, First, Last, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// let result = a.combine_ref(&b);
    /// assert_eq!(a, "Hello, ");
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Semigroup;
    ///
    /// let s = String::from("ab");
    /// assert_eq!(s.combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty; see
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a version that
    /// falls back to the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String / Vec
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
///
/// Use [`First`] or [`Last`] to pick one side instead of combining.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Unit / Tuples
// =============================================================================

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// The product of two semigroups combines component-wise.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// HashMap Implementation
// =============================================================================

/// Maps merge key-wise; values under the same key are combined with the
/// left map's value first.
///
/// This single instance covers both map monoids: with plain values it is
/// the merge monoid, and with values wrapped in [`Last`] it is the
/// right-biased overwrite where the right map wins on shared keys.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use redbook::typeclass::{Last, Semigroup, Sum};
///
/// let merged = HashMap::from([("a", Sum(1))]).combine(HashMap::from([("a", Sum(2))]));
/// assert_eq!(merged, HashMap::from([("a", Sum(3))]));
///
/// let overwritten = HashMap::from([("a", Last(Some(1)))])
///     .combine(HashMap::from([("a", Last(Some(2)))]));
/// assert_eq!(overwritten, HashMap::from([("a", Last(Some(2)))]));
/// ```
impl<K: Eq + Hash, V: Semigroup> Semigroup for HashMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.or(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // String / Vec
    // =========================================================================

    #[rstest]
    fn string_combine_concatenates() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine(right), "Hello, World!");
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        let result = left.combine_ref(&right);
        assert_eq!(result, "Hello, World!");
        assert_eq!(left, "Hello, ");
        assert_eq!(right, "World!");
    }

    #[rstest]
    #[case(1, "ab")]
    #[case(3, "ababab")]
    fn string_combine_n(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(String::from("ab").combine_n(count), expected);
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn string_combine_n_zero_panics() {
        let _ = String::from("ab").combine_n(0);
    }

    #[rstest]
    fn vec_combine_keeps_order() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    // =========================================================================
    // Option
    // =========================================================================

    #[rstest]
    #[case(Some(String::from("a")), Some(String::from("b")), Some(String::from("ab")))]
    #[case(Some(String::from("a")), None, Some(String::from("a")))]
    #[case(None, Some(String::from("b")), Some(String::from("b")))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    // =========================================================================
    // Tuples / HashMap
    // =========================================================================

    #[rstest]
    fn pair_combines_component_wise() {
        let left = (String::from("a"), Sum(1));
        let right = (String::from("b"), Sum(2));
        assert_eq!(left.combine(right), (String::from("ab"), Sum(3)));
    }

    #[rstest]
    fn hashmap_merges_values_under_same_key() {
        let left = HashMap::from([("a", Sum(1)), ("b", Sum(2))]);
        let right = HashMap::from([("b", Sum(3)), ("c", Sum(4))]);
        let merged = left.combine(right);
        assert_eq!(
            merged,
            HashMap::from([("a", Sum(1)), ("b", Sum(5)), ("c", Sum(4))])
        );
    }

    #[rstest]
    fn hashmap_of_last_overwrites_from_the_right() {
        let left = HashMap::from([("a", Last(Some(1))), ("b", Last(Some(2)))]);
        let right = HashMap::from([("b", Last(Some(3))), ("c", Last(Some(4)))]);
        assert_eq!(
            left.combine(right),
            HashMap::from([("a", Last(Some(1))), ("b", Last(Some(3))), ("c", Last(Some(4)))])
        );
    }

    // =========================================================================
    // Wrappers
    // =========================================================================

    #[rstest]
    fn sum_and_product() {
        assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
        assert_eq!(Product(2).combine(Product(3)), Product(6));
    }

    #[rstest]
    fn max_and_min() {
        assert_eq!(Max(2).combine(Max(3)), Max(3));
        assert_eq!(Min(2).combine(Min(3)), Min(2));
    }

    #[rstest]
    #[case(false, false, false, false)]
    #[case(true, false, true, false)]
    #[case(true, true, true, true)]
    fn any_and_all(
        #[case] left: bool,
        #[case] right: bool,
        #[case] any: bool,
        #[case] all: bool,
    ) {
        assert_eq!(Any(left).combine(Any(right)), Any(any));
        assert_eq!(All(left).combine(All(right)), All(all));
    }

    #[rstest]
    fn first_keeps_left_last_keeps_right() {
        assert_eq!(First(Some(1)).combine(First(Some(2))), First(Some(1)));
        assert_eq!(First(None).combine(First(Some(2))), First(Some(2)));
        assert_eq!(Last(Some(1)).combine(Last(Some(2))), Last(Some(2)));
        assert_eq!(Last(Some(1)).combine(Last(None)), Last(Some(1)));
    }

    #[rstest]
    fn reduce_all_on_empty_is_none() {
        assert_eq!(Sum::<i32>::reduce_all(Vec::new()), None);
    }
}
