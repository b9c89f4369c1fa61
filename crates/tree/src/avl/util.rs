use std::fmt::Debug;

use tracing::trace;

use crate::util::{self, get_l, get_p, get_r};

use super::types::AvlNodeLike;

#[inline]
fn height_of<N: AvlNodeLike>(arena: &[N], i: Option<u32>) -> i32 {
    i.map_or(-1, |i| arena[i as usize].height())
}

#[inline]
fn set_height<N: AvlNodeLike>(arena: &mut [N], i: u32, height: i32) {
    arena[i as usize].set_height(height);
}

/// `height(left) - height(right)` from the cached child heights.
pub fn balance<N: AvlNodeLike>(arena: &[N], i: u32) -> i32 {
    height_of(arena, get_l(arena, i)) - height_of(arena, get_r(arena, i))
}

/// Rebalances after `node` was linked as a new leaf.
pub fn insert<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, node: u32) -> u32 {
    match root {
        None => node,
        Some(root) => rebalance(arena, root, get_p(arena, node)),
    }
}

/// Unlinks `node` and rebalances from the physical deletion point upward.
pub fn remove<N: AvlNodeLike>(arena: &mut [N], root: u32, node: u32) -> Option<u32> {
    let (root, successor) = util::make_removable(arena, root, node);
    if let Some(s) = successor {
        // Heights belong to positions, and the two nodes just traded places.
        let hn = arena[node as usize].height();
        let hs = arena[s as usize].height();
        set_height(arena, node, hs);
        set_height(arena, s, hn);
    }
    let parent = get_p(arena, node);
    let root = util::splice(arena, root, node)?;
    Some(rebalance(arena, root, parent))
}

/// Walks from `start` to the root, restoring heights and balance.
fn rebalance<N: AvlNodeLike>(arena: &mut [N], mut root: u32, start: Option<u32>) -> u32 {
    let mut curr = start;
    while let Some(v) = curr {
        let top = restore(arena, v);
        let p = get_p(arena, top);
        if p.is_none() {
            root = top;
        }
        curr = p;
    }
    root
}

/// Recomputes the height of `v` and rotates if it became unbalanced.
///
/// Rotated nodes get their heights assigned directly instead of being
/// recomputed, since mid-rotation the cached heights are stale. Returns the
/// top of the subtree that used to be rooted at `v`.
fn restore<N: AvlNodeLike>(arena: &mut [N], v: u32) -> u32 {
    let l = get_l(arena, v);
    let r = get_r(arena, v);
    let height = 1 + height_of(arena, l).max(height_of(arena, r));
    set_height(arena, v, height);

    match height_of(arena, l) - height_of(arena, r) {
        -2 => {
            let mut r = r.expect("right-heavy node has a right child");
            if balance(arena, r) == 1 {
                let rl = get_l(arena, r).expect("left-heavy child has a left child");
                util::rotate_right(arena, r);
                set_height(arena, r, height - 2);
                set_height(arena, rl, height - 1);
                r = rl;
            }
            let inner = get_l(arena, r);
            util::rotate_left(arena, v);
            let vh = if height_of(arena, inner) == height - 2 {
                height - 1
            } else {
                height - 2
            };
            set_height(arena, v, vh);
            set_height(arena, r, vh + 1);
            trace!(node = v, top = r, "avl rotate left");
            r
        }
        2 => {
            let mut l = l.expect("left-heavy node has a left child");
            if balance(arena, l) == -1 {
                let lr = get_r(arena, l).expect("right-heavy child has a right child");
                util::rotate_left(arena, l);
                set_height(arena, l, height - 2);
                set_height(arena, lr, height - 1);
                l = lr;
            }
            let inner = get_r(arena, l);
            util::rotate_right(arena, v);
            let vh = if height_of(arena, inner) == height - 2 {
                height - 1
            } else {
                height - 2
            };
            set_height(arena, v, vh);
            set_height(arena, l, vh + 1);
            trace!(node = v, top = l, "avl rotate right");
            l
        }
        _ => v,
    }
}

pub fn assert_avl_tree<N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    N: AvlNodeLike,
    N::Value: Ord,
{
    util::assert_ordered(arena, root)?;

    fn check<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> Result<i32, String> {
        let Some(node) = node else {
            return Ok(-1);
        };
        let lh = check(arena, get_l(arena, node))?;
        let rh = check(arena, get_r(arena, node))?;
        let expected = 1 + lh.max(rh);
        let cached = arena[node as usize].height();
        if cached != expected {
            return Err(format!(
                "Height mismatch on node {node}: expected {expected}, got {cached}"
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated on node {node}"));
        }
        Ok(expected)
    }

    check(arena, root).map(|_| ())
}

/// Debug printer for AVL trees.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Value: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={} bf={}] {:?}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                balance(arena, i),
                n.value()
            )
        }
    }
}
