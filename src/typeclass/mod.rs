//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) the rest of the crate is
//! built on:
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Functor`]: Mapping over container values
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name "the same
//! container with a different element type", which is all `Functor` and
//! `Foldable` need.
//!
//! ## Monoid Selection
//!
//! A carrier type can form several monoids (integers under addition or
//! multiplication, booleans under `||` or `&&`). Newtype wrappers pick one:
//!
//! - [`Sum`], [`Product`]: Numeric addition and multiplication
//! - [`Max`], [`Min`]: Bounded maximum and minimum, see [`Bounded`]
//! - [`Any`], [`All`]: Boolean disjunction and conjunction
//! - [`First`], [`Last`]: Leftmost or rightmost present `Option`
//! - [`Endo`]: Functions `A -> A` under composition
//! - [`Pointwise`]: Functions into a monoid, combined argument by argument
//! - [`Dual`]: Any monoid with its arguments flipped
//!
//! # Examples
//!
//! ## Using Monoid
//!
//! ```rust
//! use redbook::typeclass::{Semigroup, Monoid, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```
//!
//! ## Using Foldable
//!
//! ```rust
//! use redbook::typeclass::{Foldable, Product};
//!
//! let values = vec![1, 2, 3, 4];
//! let product: Product<i32> = values.fold_map(Product);
//! assert_eq!(product.0, 24);
//! ```

mod endo;
mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use endo::{Dual, Endo, Pointwise};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::{Monoid, bag, is_monoid, mean};
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Bounded, First, Last, Max, Min, Product, Sum};
