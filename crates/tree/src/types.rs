//! Node trait definitions.
//!
//! Nodes live in a `Vec`-backed arena owned by the tree. Every link is an
//! `Option<u32>` index into that arena; the parent link is a plain back
//! reference used only for upward walks. All tree-manipulation functions take
//! the arena as `&mut [N]` and work with indices.

use std::fmt;

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that carries one ordered element.
pub trait ValueNode: Node {
    type Value;

    /// Creates a detached node holding `value`.
    fn new(value: Self::Value) -> Self;

    fn value(&self) -> &Self::Value;

    fn into_value(self) -> Self::Value;
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
