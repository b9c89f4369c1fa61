//! Arena-backed ordered tree shared by every balancing strategy.
//!
//! [`Tree`] owns the node arena and the root; the balancing work after an
//! insertion or before a removal is delegated to a [`TreeOps`] strategy. The
//! public aliases ([`OrderedTree`](crate::OrderedTree),
//! [`AvlTree`](crate::AvlTree), [`RbTree`](crate::RbTree)) pick the node type
//! and strategy; operations only some flavours support (raw rotations,
//! heights, colours) live in impl blocks specialised on the node type.

use std::fmt;
use std::marker::PhantomData;

use crate::error::TreeError;
use crate::types::{Node, ValueNode};
use crate::util::{self, descend};

/// Balancing callbacks required by [`Tree`].
pub trait TreeOps<N: Node> {
    /// Restores the strategy's invariant after `node` was linked as a new
    /// leaf (or installed as the only node). Returns the new root.
    fn insert(arena: &mut [N], root: Option<u32>, node: u32) -> u32;

    /// Unlinks `node` and rebalances. Returns the new root, `None` once the
    /// tree is empty. On return `node` is fully detached.
    fn remove(arena: &mut [N], root: u32, node: u32) -> Option<u32>;
}

/// Ordered set of distinct elements stored in a binary search tree.
pub struct Tree<N, O> {
    arena: Vec<N>,
    root: Option<u32>,
    _ops: PhantomData<O>,
}

impl<N, O> Tree<N, O>
where
    N: ValueNode,
    N::Value: Ord,
    O: TreeOps<N>,
{
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            _ops: PhantomData,
        }
    }

    /// Adds `value`. Returns `false` and leaves the tree untouched if an
    /// equal element is already present.
    pub fn insert(&mut self, value: N::Value) -> bool {
        let attach_to = match descend(&self.arena, self.root, &value) {
            Ok(_) => return false,
            Err(attach_to) => attach_to,
        };
        let idx = self.arena.len() as u32;
        self.arena.push(N::new(value));
        if let Some((parent, side)) = attach_to {
            util::attach(&mut self.arena, idx, parent, side);
        }
        self.root = Some(O::insert(&mut self.arena, self.root, idx));
        true
    }

    /// Removes the element equal to `value`, returning it. Absent elements
    /// are a no-op.
    pub fn remove(&mut self, value: &N::Value) -> Option<N::Value> {
        let node = self.find(value)?;
        let root = self.root.expect("non-empty tree has a root");
        let root = O::remove(&mut self.arena, root, node);

        let last = (self.arena.len() - 1) as u32;
        self.root = if node != last {
            util::relocate(&mut self.arena, root, last, node)
        } else {
            root
        };
        Some(self.arena.swap_remove(node as usize).into_value())
    }

    pub fn find(&self, value: &N::Value) -> Option<u32> {
        util::find(&self.arena, self.root, value)
    }

    pub fn contains(&self, value: &N::Value) -> bool {
        self.find(value).is_some()
    }
}

impl<N, O> Tree<N, O>
where
    N: ValueNode,
{
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<'_, N>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    /// Read-only view of node `id`.
    pub fn node(&self, id: u32) -> Result<NodeRef<'_, N>, TreeError> {
        self.check(id)?;
        Ok(NodeRef::new(&self.arena, id))
    }

    pub fn value(&self, id: u32) -> Result<&N::Value, TreeError> {
        self.check(id)?;
        Ok(self.arena[id as usize].value())
    }

    /// Height in edges; `-1` for an empty tree.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    pub fn first(&self) -> Option<u32> {
        util::first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        util::last(&self.arena, self.root)
    }

    pub fn next(&self, id: u32) -> Option<u32> {
        util::next(&self.arena, id)
    }

    pub fn prev(&self, id: u32) -> Option<u32> {
        util::prev(&self.arena, id)
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            arena: &self.arena,
            curr: self.first(),
        }
    }

    pub(crate) fn arena(&self) -> &[N] {
        &self.arena
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [N], &mut Option<u32>) {
        (&mut self.arena, &mut self.root)
    }

    pub(crate) fn check(&self, id: u32) -> Result<(), TreeError> {
        if (id as usize) < self.arena.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }
}

impl<N, O> Default for Tree<N, O>
where
    N: ValueNode,
    N::Value: Ord,
    O: TreeOps<N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, O> FromIterator<N::Value> for Tree<N, O>
where
    N: ValueNode,
    N::Value: Ord,
    O: TreeOps<N>,
{
    fn from_iter<I: IntoIterator<Item = N::Value>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<N, O> Extend<N::Value> for Tree<N, O>
where
    N: ValueNode,
    N::Value: Ord,
    O: TreeOps<N>,
{
    fn extend<I: IntoIterator<Item = N::Value>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, N, O> IntoIterator for &'a Tree<N, O>
where
    N: ValueNode,
{
    type Item = &'a N::Value;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, O> fmt::Debug for Tree<N, O>
where
    N: ValueNode,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator over a tree's elements.
pub struct Iter<'a, N> {
    arena: &'a [N],
    curr: Option<u32>,
}

impl<'a, N: ValueNode> Iterator for Iter<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next(self.arena, i);
        Some(self.arena[i as usize].value())
    }
}

/// Read-only handle on one node, for renderers and tests.
pub struct NodeRef<'a, N> {
    arena: &'a [N],
    id: u32,
}

impl<N> Clone for NodeRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NodeRef<'_, N> {}

impl<'a, N: ValueNode> NodeRef<'a, N> {
    fn new(arena: &'a [N], id: u32) -> Self {
        Self { arena, id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn value(&self) -> &'a N::Value {
        self.raw().value()
    }

    pub fn parent(&self) -> Option<Self> {
        self.raw().p().map(|id| Self::new(self.arena, id))
    }

    pub fn left(&self) -> Option<Self> {
        self.raw().l().map(|id| Self::new(self.arena, id))
    }

    pub fn right(&self) -> Option<Self> {
        self.raw().r().map(|id| Self::new(self.arena, id))
    }

    pub fn has_left(&self) -> bool {
        self.raw().l().is_some()
    }

    pub fn has_right(&self) -> bool {
        self.raw().r().is_some()
    }

    pub fn is_root(&self) -> bool {
        self.raw().p().is_none()
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    pub(crate) fn raw(&self) -> &'a N {
        &self.arena[self.id as usize]
    }
}

impl<N> fmt::Debug for NodeRef<'_, N>
where
    N: ValueNode,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}
