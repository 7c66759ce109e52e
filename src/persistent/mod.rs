//! Persistent (immutable) data structures.
//!
//! - [`Tree`]: binary tree carrying values only at its leaves
//!
//! # Structural Sharing
//!
//! Branches hold their children behind `Rc`, so a subtree can appear in
//! several trees without being copied. Trees are never mutated; every
//! transformation builds a new tree.
//!
//! # Examples
//!
//! ```rust
//! use redbook::persistent::Tree;
//! use redbook::typeclass::Foldable;
//!
//! let shared = Tree::branch(Tree::leaf(2), Tree::leaf(3));
//! let left = Tree::branch(Tree::leaf(1), shared.clone());
//! let right = Tree::branch(shared, Tree::leaf(4));
//!
//! assert_eq!(left.to_list(), vec![1, 2, 3]);
//! assert_eq!(right.to_list(), vec![2, 3, 4]);
//! ```

mod tree;

pub use tree::Tree;
