use crate::types::Side;

/// Precondition failures reported by tree operations.
///
/// Every variant is detected before the tree is touched, so a failed call
/// leaves the structure exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0} is not part of this tree")]
    UnknownNode(u32),
    #[error("node {node} has no {side} child to rotate with")]
    MissingChild { node: u32, side: Side },
}
