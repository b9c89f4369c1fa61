//! Height-balanced (AVL) tree.
//!
//! Every node caches its height. After each insertion or removal the path to
//! the root is walked, heights are refreshed and at most one single or double
//! rotation per level restores `|height(left) - height(right)| <= 1`.

pub mod types;
pub mod util;

use std::fmt::Debug;

use crate::tree::{NodeRef, Tree, TreeOps};

pub use types::{AvlNode, AvlNodeLike};

pub struct AvlOps;

impl<T> TreeOps<AvlNode<T>> for AvlOps {
    fn insert(arena: &mut [AvlNode<T>], root: Option<u32>, node: u32) -> u32 {
        util::insert(arena, root, node)
    }

    fn remove(arena: &mut [AvlNode<T>], root: u32, node: u32) -> Option<u32> {
        util::remove(arena, root, node)
    }
}

/// Self-balancing tree keeping subtree heights within one of each other.
pub type AvlTree<T> = Tree<AvlNode<T>, AvlOps>;

impl<T: Ord> Tree<AvlNode<T>, AvlOps> {
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(self.arena(), self.root_index())
    }
}

impl<T: Debug> Tree<AvlNode<T>, AvlOps> {
    pub fn print(&self) -> String {
        util::print(self.arena(), self.root_index(), "")
    }
}

impl<T> NodeRef<'_, AvlNode<T>> {
    /// Cached height of this node's subtree.
    pub fn height(&self) -> i32 {
        self.raw().height
    }

    /// `height(left) - height(right)`.
    pub fn balance(&self) -> i32 {
        let side = |c: Option<Self>| c.map_or(-1, |c| c.height());
        side(self.left()) - side(self.right())
    }
}
