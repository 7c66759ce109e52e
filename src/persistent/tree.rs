//! Leaf-valued binary tree.
//!
//! A [`Tree`] is either a `Leaf` holding one value or a `Branch` joining two
//! subtrees. Branches carry no payload and there is no empty tree, so every
//! tree holds at least one value.
//!
//! # Folding
//!
//! [`Tree::fold`] is the catamorphism: it replaces every leaf with
//! `leaf(value)` and every branch with `branch(left, right)`. `size`, `depth`
//! and `maximum` are all defined through it.
//!
//! The [`Foldable`] instance supplies only `fold_right`; leaves are visited
//! left to right, so `to_list` returns them in reading order whatever the
//! shape of the tree.
//!
//! # Examples
//!
//! ```rust
//! use redbook::persistent::Tree;
//! use redbook::typeclass::Foldable;
//!
//! let tree = Tree::branch(
//!     Tree::branch(Tree::leaf("a"), Tree::leaf("b")),
//!     Tree::branch(Tree::leaf("c"), Tree::leaf("d")),
//! );
//!
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(tree.maximum(), &"d");
//! assert_eq!(tree.to_list(), vec!["a", "b", "c", "d"]);
//! ```

use std::rc::Rc;

use crate::typeclass::{Foldable, Functor, TypeConstructor};

/// A binary tree with values only at the leaves.
///
/// Children are reference-counted; cloning a tree or reusing a subtree in
/// another branch shares the nodes instead of copying them.
///
/// # Examples
///
/// ```rust
/// use redbook::persistent::Tree;
/// use redbook::typeclass::{Foldable, Sum};
///
/// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
/// let total: Sum<i32> = tree.fold_map(Sum);
/// assert_eq!(total, Sum(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree<A> {
    /// A terminal node holding a value.
    Leaf {
        /// The value stored at this leaf.
        value: A,
    },
    /// An internal node joining two subtrees.
    Branch {
        /// The left subtree.
        left: Rc<Self>,
        /// The right subtree.
        right: Rc<Self>,
    },
}

impl<A> Tree<A> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: A) -> Self {
        Self::Leaf { value }
    }

    /// Creates a branch from two subtrees.
    #[inline]
    pub fn branch(left: Self, right: Self) -> Self {
        Self::Branch {
            left: Rc::new(left),
            right: Rc::new(right),
        }
    }

    /// Returns `true` if this node is a leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns the leaf payload, or `None` for a branch.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Leaf { value } => Some(value),
            Self::Branch { .. } => None,
        }
    }

    /// Returns the two subtrees of a branch, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf { .. } => None,
            Self::Branch { left, right } => Some((left, right)),
        }
    }

    /// Structural fold: replaces leaves with `leaf` and branches with `branch`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redbook::persistent::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// let rendered = tree.fold(|value| value.to_string(), |left, right| format!("({left} {right})"));
    /// assert_eq!(rendered, "(1 (2 3))");
    /// ```
    pub fn fold<'a, B, L, N>(&'a self, mut leaf: L, mut branch: N) -> B
    where
        L: FnMut(&'a A) -> B,
        N: FnMut(B, B) -> B,
    {
        fold_tree(self, &mut leaf, &mut branch)
    }

    /// Counts every node, leaves and branches alike.
    pub fn size(&self) -> usize {
        self.fold(|_| 1, |left, right| 1 + left + right)
    }

    /// Length of the longest path from the root to a leaf; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.fold(|_| 0, |left, right| 1 + left.max(right))
    }

    /// Returns the largest leaf value.
    ///
    /// Ties resolve to the rightmost of the equal values.
    pub fn maximum(&self) -> &A
    where
        A: Ord,
    {
        self.fold(|value| value, |left, right| left.max(right))
    }
}

fn fold_tree<'a, A, B, L, N>(tree: &'a Tree<A>, leaf: &mut L, branch: &mut N) -> B
where
    L: FnMut(&'a A) -> B,
    N: FnMut(B, B) -> B,
{
    match tree {
        Tree::Leaf { value } => leaf(value),
        Tree::Branch { left, right } => {
            let left = fold_tree(left, leaf, branch);
            let right = fold_tree(right, leaf, branch);
            branch(left, right)
        }
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<A> TypeConstructor for Tree<A> {
    type Inner = A;
    type WithType<B> = Tree<B>;
}

fn fold_right_tree<A, B, F>(tree: Tree<A>, init: B, function: &mut F) -> B
where
    A: Clone,
    F: FnMut(A, B) -> B,
{
    match tree {
        Tree::Leaf { value } => function(value, init),
        Tree::Branch { left, right } => {
            let folded_right = fold_right_tree(Rc::unwrap_or_clone(right), init, function);
            fold_right_tree(Rc::unwrap_or_clone(left), folded_right, function)
        }
    }
}

/// Leaves are consumed rightmost first: `fold_right(left, fold_right(right, init))`.
impl<A: Clone> Foldable for Tree<A> {
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fold_right_tree(self, init, &mut function)
    }

    fn length(&self) -> usize {
        self.fold(|_| 1, |left, right| left + right)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }
}

fn fmap_tree<A, B, F>(tree: Tree<A>, function: &mut F) -> Tree<B>
where
    A: Clone,
    F: FnMut(A) -> B,
{
    match tree {
        Tree::Leaf { value } => Tree::leaf(function(value)),
        Tree::Branch { left, right } => {
            let left = fmap_tree(Rc::unwrap_or_clone(left), function);
            let right = fmap_tree(Rc::unwrap_or_clone(right), function);
            Tree::branch(left, right)
        }
    }
}

impl<A: Clone> Functor for Tree<A> {
    fn fmap<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        fmap_tree(self, &mut function)
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Tree<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fold(|value| Tree::leaf(function(value)), Tree::branch)
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Tree<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStructVariant;

        match self {
            Self::Leaf { value } => {
                let mut state = serializer.serialize_struct_variant("Tree", 0, "Leaf", 1)?;
                state.serialize_field("value", value)?;
                state.end()
            }
            Self::Branch { left, right } => {
                let mut state = serializer.serialize_struct_variant("Tree", 1, "Branch", 2)?;
                state.serialize_field("left", left.as_ref())?;
                state.serialize_field("right", right.as_ref())?;
                state.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Tree")]
enum TreeRepr<A> {
    Leaf { value: A },
    Branch {
        left: Box<TreeRepr<A>>,
        right: Box<TreeRepr<A>>,
    },
}

#[cfg(feature = "serde")]
impl<A> From<TreeRepr<A>> for Tree<A> {
    fn from(repr: TreeRepr<A>) -> Self {
        match repr {
            TreeRepr::Leaf { value } => Self::leaf(value),
            TreeRepr::Branch { left, right } => Self::branch((*left).into(), (*right).into()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Tree<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <TreeRepr<A> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_not_impl_any!(Tree<i32>: Send, Sync);
