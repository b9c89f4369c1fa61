//! Unbalanced binary search tree.
//!
//! This is the rotation primitive the balanced trees build on. It is the only
//! flavour that lets callers rotate nodes themselves: on AVL and red-black
//! trees a user rotation would silently break the balancing invariant.

use crate::error::TreeError;
use crate::tree::{Tree, TreeOps};
use crate::types::{Node, Side, ValueNode};
use crate::util;

#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
}

impl<T> Node for BstNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ValueNode for BstNode<T> {
    type Value = T;

    fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
        }
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn into_value(self) -> T {
        self.value
    }
}

/// Plain insertion and removal, no rebalancing.
pub struct BstOps;

impl<T> TreeOps<BstNode<T>> for BstOps {
    fn insert(_arena: &mut [BstNode<T>], root: Option<u32>, node: u32) -> u32 {
        root.unwrap_or(node)
    }

    fn remove(arena: &mut [BstNode<T>], root: u32, node: u32) -> Option<u32> {
        let (root, _) = util::make_removable(arena, root, node);
        util::splice(arena, root, node)
    }
}

/// Binary search tree without any balancing.
pub type OrderedTree<T> = Tree<BstNode<T>, BstOps>;

impl<T: Ord> Tree<BstNode<T>, BstOps> {
    /// Rotates `id` left; its right child takes its place.
    pub fn rotate_left(&mut self, id: u32) -> Result<(), TreeError> {
        self.rotate(id, Side::Right)
    }

    /// Rotates `id` right; its left child takes its place.
    pub fn rotate_right(&mut self, id: u32) -> Result<(), TreeError> {
        self.rotate(id, Side::Left)
    }

    /// Rotates `id` so that its child on `rising` moves up.
    fn rotate(&mut self, id: u32, rising: Side) -> Result<(), TreeError> {
        self.check(id)?;
        if util::child(self.arena(), id, rising).is_none() {
            return Err(TreeError::MissingChild {
                node: id,
                side: rising,
            });
        }
        let (arena, root) = self.parts_mut();
        let top = match rising {
            Side::Right => util::rotate_left(arena, id),
            Side::Left => util::rotate_right(arena, id),
        };
        if arena[top as usize].p().is_none() {
            *root = Some(top);
        }
        Ok(())
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_ordered(self.arena(), self.root_index())
    }
}
