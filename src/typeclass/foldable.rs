//! Foldable type class - folding over data structures.
//!
//! A `Foldable` container can reduce all of its elements to a single summary
//! value. Implementations supply one primitive, [`Foldable::fold_right`];
//! every other operation is a provided method derived from it.
//!
//! # Derivations
//!
//! - `fold_map` folds right, combining `function(element)` into a monoid.
//! - `fold_left` maps every element to a state transformer
//!   `Dual(Endo(|b| f(b, a)))`, composes them with `fold_map` in the dual
//!   endofunction monoid, and applies the result to the seed. Because the
//!   dual composes left to right, the elements are visited in order even
//!   though only `fold_right` walks the structure.
//! - `to_list` folds right, prepending each element.
//!
//! # Laws
//!
//! ## Agreement of `concatenate` and `concatenate_right`
//!
//! For any finite structure and a lawful monoid:
//!
//! ```text
//! fa.concatenate() == fa.concatenate_right()
//! ```
//!
//! The two only differ in grouping, which associativity erases.
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use redbook::typeclass::Foldable;
//!
//! let letters = vec!["a", "b", "c"];
//!
//! let right = letters.clone().fold_right(String::from("z"), |element, accumulator| {
//!     format!("{element}{accumulator}")
//! });
//! assert_eq!(right, "abcz");
//!
//! let left = letters.fold_left(String::from("z"), |accumulator, element| {
//!     format!("{accumulator}{element}")
//! });
//! assert_eq!(left, "zabc");
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use super::endo::{Dual, Endo};
use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_right`: Right-associative fold, `[a, b]` ⇒ `f(a, f(b, init))`
///
/// # Provided Methods
///
/// - `fold_map`: Map each element into a `Monoid` and combine the results
/// - `fold_left`: Left-associative fold, derived through `Dual<Endo<_>>`
/// - `concatenate` / `concatenate_right`: Combine monoidal elements directly
/// - `to_list` / `to_list_via_monoid`: Flatten into a `Vec`
/// - `length`, `is_empty`, `to_set`
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
///
/// let sum = values.clone().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 15);
///
/// let sum: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(sum.0, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the right.
    ///
    /// The rightmost element is combined with `init` first; for `[a, b]` the
    /// result is `function(a, function(b, init))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element into a `Monoid` and combines the results.
    ///
    /// Defined as `fold_right` with `combine(function(element), accumulator)`
    /// seeded with `M::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::{Foldable, Product};
    ///
    /// let product: Product<i32> = vec![1, 2, 3, 4].fold_map(Product);
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_right(M::empty(), |element, accumulator| {
            function(element).combine(accumulator)
        })
    }

    /// Folds the structure from the left.
    ///
    /// For `[a, b]` the result is `function(function(init, a), b)`. The fold
    /// is derived from `fold_right`: each element is captured in a state
    /// transformer and the transformers are composed in the dual of the
    /// endofunction monoid before being applied to `init`.
    ///
    /// Applying the composed function nests one call per element, so the
    /// structure size is bounded by the stack of the running thread: tens of
    /// thousands of elements can overflow a default thread stack. Use
    /// `fold_right` or an iterator for large collections.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let digits = values.fold_left(0, |accumulator, element| accumulator * 10 + element);
    /// assert_eq!(digits, 123);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
        Self: Sized,
    {
        let function = Rc::new(RefCell::new(function));
        let composed: Dual<Endo<'_, B>> = self.fold_map(|element| {
            let function = Rc::clone(&function);
            Dual(Endo::new(move |accumulator: B| {
                let mut function = function.borrow_mut();
                (*function)(accumulator, element)
            }))
        });
        composed.into_inner().apply(init)
    }

    /// Combines the monoidal elements with `fold_left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Foldable;
    ///
    /// let words = vec![String::from("a"), String::from("rose")];
    /// assert_eq!(words.concatenate(), "arose");
    /// ```
    fn concatenate(self) -> Self::Inner
    where
        Self::Inner: Monoid,
        Self: Sized,
    {
        self.fold_left(Self::Inner::empty(), |accumulator, element| {
            accumulator.combine(element)
        })
    }

    /// Combines the monoidal elements with `fold_right`.
    ///
    /// Agrees with [`concatenate`](Foldable::concatenate) whenever the
    /// monoid is lawful.
    fn concatenate_right(self) -> Self::Inner
    where
        Self::Inner: Monoid,
        Self: Sized,
    {
        self.fold_right(Self::Inner::empty(), |element, accumulator| {
            element.combine(accumulator)
        })
    }

    /// Flattens the structure into a `Vec`, preserving element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Foldable;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        // Elements arrive rightmost first; pushing then reversing is the
        // prepend of a right fold without the quadratic shifting.
        let mut elements = self.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        elements.reverse();
        elements
    }

    /// Flattens the structure into a `Vec` through the `Vec` monoid.
    fn to_list_via_monoid(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_map(|element| vec![element])
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// assert_eq!(None::<i32>.length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_right(0, |_, count| count + 1)
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_right(true, |_, _| false)
    }

    /// Collects the distinct elements into a `HashSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use redbook::typeclass::Foldable;
    ///
    /// let set = vec![1, 2, 2, 3].to_set();
    /// assert_eq!(set, HashSet::from([1, 2, 3]));
    /// ```
    fn to_set(self) -> HashSet<Self::Inner>
    where
        Self::Inner: Eq + Hash,
        Self: Sized,
    {
        self.fold_right(HashSet::new(), |element, mut accumulator| {
            accumulator.insert(element);
            accumulator
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
