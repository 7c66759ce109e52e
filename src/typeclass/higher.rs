//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Tree<_>` directly. Instead each concrete container implements
//! [`TypeConstructor`], which names its element type (`Inner`) and the same
//! container over another element type (`WithType<B>`). `Functor` and
//! `Foldable` are defined on top of it, one explicit instance per container.
//!
//! # Example
//!
//! ```rust
//! use redbook::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = vec![1, 2, 3];
//! let names: Vec<String> = empty_like(&numbers);
//! assert!(names.is_empty());
//! ```

/// A trait representing a type constructor applied to an element type.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type, `i32` for `Option<i32>`.
    type Inner;

    /// The same constructor over `B`, `Option<String>` for `Option<i32>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
