//! # redbook
//!
//! Monoids, foldable structures and the `State` monad, expressed with Rust
//! traits and a couple of small simulations that put them to work.
//!
//! ## Overview
//!
//! - **Type Classes**: Semigroup, Monoid, Foldable, Functor
//! - **Monoid Wrappers**: Sum, Product, Max, Min, Any, All, First, Last, Endo, Dual
//! - **Persistent Data Structures**: a leaf-valued binary `Tree` with shared subtrees
//! - **Effect System**: the `State` monad for threading a value through a sequence of steps
//! - **Simulations**: a candy vending machine and a seed-reproducible random generator,
//!   both driven by `State`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Semigroup, Monoid, Foldable, Functor)
//! - `persistent`: The `Tree` data structure
//! - `effect`: The `State` monad
//! - `simulation`: Vending machine and random user generation
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use redbook::prelude::*;
//!
//! let tree = Tree::branch(
//!     Tree::branch(Tree::leaf(1), Tree::leaf(2)),
//!     Tree::leaf(3),
//! );
//!
//! let total: Sum<i32> = tree.clone().fold_map(Sum);
//! assert_eq!(total, Sum(6));
//! assert_eq!(tree.to_list(), vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use redbook::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "simulation")]
    pub use crate::simulation::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "simulation")]
pub mod simulation;
