use crate::types::{Node, ValueNode};

/// AVL node with a cached subtree height.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
    /// Height in edges: a leaf is 0, an absent child counts as -1.
    pub height: i32,
}

impl<T> Node for AvlNode<T> {
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

impl<T> ValueNode for AvlNode<T> {
    type Value = T;

    fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
            height: 0,
        }
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn into_value(self) -> T {
        self.value
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: ValueNode {
    fn height(&self) -> i32;
    fn set_height(&mut self, height: i32);
}

impl<T> AvlNodeLike for AvlNode<T> {
    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}
