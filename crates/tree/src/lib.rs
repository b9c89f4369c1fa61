//! Arena-backed ordered binary trees.
//!
//! Every tree stores its nodes in a `Vec<N>` arena and links them with
//! `Option<u32>` indices, so parent back references never fight the borrow
//! checker. The same [`Tree`] core drives three flavours:
//!
//! | Alias | Node | Balancing |
//! |-------|------|-----------|
//! | [`OrderedTree`] | [`bst::BstNode`] | none, rotations exposed to callers |
//! | [`AvlTree`] | [`avl::AvlNode`] | cached heights, `|balance| <= 1` |
//! | [`RbTree`] | [`red_black::RbNode`] | red/black colouring |
//!
//! The free functions in [`util`] work on any [`Node`] arena and are what the
//! balancing strategies are written in terms of.

pub mod avl;
pub mod bst;
pub mod error;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use bst::OrderedTree;
pub use error::TreeError;
pub use red_black::{Color, RbTree};
pub use tree::{Iter, NodeRef, Tree, TreeOps};
pub use types::{Node, Side, ValueNode};
