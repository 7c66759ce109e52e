//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to every element of a container and keeps
//! its shape. The function may be called once per element, so it is taken as
//! `FnMut`; `Option` calls it at most once, `Vec` and `Tree` once per element.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use redbook::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(numbers.fmap(|n| n * 2), vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use redbook::typeclass::Functor;
///
/// let words = vec![String::from("a"), String::from("rose")];
/// let lengths: Vec<usize> = words.fmap_ref(|word| word.len());
/// assert_eq!(lengths, vec![1, 4]);
/// assert_eq!(words.len(), 2);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every element, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to a reference of every element.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(vec![1, 2].replace('x'), vec!['x', 'x']);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(|_| value.clone())
    }

    /// Discards the elements, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some("5".to_string()))]
    #[case(None, None)]
    fn option_fmap(#[case] value: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(value.fmap(|n| n.to_string()), expected);
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let value = Some("hello".to_string());
        assert_eq!(value.fmap_ref(String::len), Some(5));
        assert_eq!(value, Some("hello".to_string()));
    }

    #[rstest]
    fn option_void() {
        assert_eq!(Some(5).void(), Some(()));
        assert_eq!(None::<i32>.void(), None);
    }

    #[rstest]
    fn vec_fmap_transforms_every_element() {
        assert_eq!(vec![1, 2, 3].fmap(|n| n * 2), vec![2, 4, 6]);
        assert!(Vec::<i32>::new().fmap(|n| n.to_string()).is_empty());
    }

    #[rstest]
    fn vec_fmap_with_stateful_function() {
        let mut counter = 0;
        let indexed = vec!["a", "b", "c"].fmap(|letter| {
            counter += 1;
            format!("{counter}{letter}")
        });
        assert_eq!(indexed, vec!["1a", "2b", "3c"]);
    }

    #[rstest]
    fn vec_identity_law() {
        let values = vec![1, 2, 3];
        assert_eq!(values.clone().fmap(|x| x), values);
    }

    #[rstest]
    fn vec_composition_law() {
        let values = vec![1, 2, 3];
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;

        let left = values.clone().fmap(add_one).fmap(double);
        let right = values.fmap(|x| double(add_one(x)));

        assert_eq!(left, right);
        assert_eq!(left, vec![4, 6, 8]);
    }
}
