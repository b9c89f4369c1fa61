//! Colour-balanced (red-black) tree.

pub mod types;
pub mod util;

use std::fmt::Debug;

use crate::tree::{NodeRef, Tree, TreeOps};

pub use types::{Color, RbNode, RbNodeLike};

pub struct RbOps;

impl<T> TreeOps<RbNode<T>> for RbOps {
    fn insert(arena: &mut [RbNode<T>], root: Option<u32>, node: u32) -> u32 {
        util::insert(arena, root, node)
    }

    fn remove(arena: &mut [RbNode<T>], root: u32, node: u32) -> Option<u32> {
        util::remove(arena, root, node)
    }
}

/// Self-balancing tree whose longest path is at most twice its shortest.
pub type RbTree<T> = Tree<RbNode<T>, RbOps>;

impl<T: Ord> Tree<RbNode<T>, RbOps> {
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_red_black_tree(self.arena(), self.root_index())
    }
}

impl<T: Debug> Tree<RbNode<T>, RbOps> {
    pub fn print(&self) -> String {
        util::print(self.arena(), self.root_index(), "")
    }
}

impl<T> NodeRef<'_, RbNode<T>> {
    pub fn color(&self) -> Color {
        self.raw().color
    }
}
