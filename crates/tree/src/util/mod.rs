//! Arena helpers shared by every tree flavour.
//!
//! Navigation (`first`, `next`, ...), the two single rotations, and the
//! relinking primitives used by removal. None of these look at node payloads
//! except [`find`] and [`descend`].

pub mod swap;

use crate::types::{Node, Side, ValueNode};

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Side of its parent that `idx` hangs from, `None` for the root.
pub fn side_of<N: Node>(arena: &[N], idx: u32) -> Option<Side> {
    let p = get_p(arena, idx)?;
    if get_l(arena, p) == Some(idx) {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// Points the slot of `parent` that held `old` at `new`.
fn replace_child<N: Node>(arena: &mut [N], parent: Option<u32>, old: u32, new: Option<u32>) {
    if let Some(p) = parent {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, new);
        } else {
            set_r(arena, p, new);
        }
    }
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + size(arena, get_l(arena, r)) + size(arena, get_r(arena, r))
    })
}

/// Height of the subtree under `root`, counted in edges; `-1` when empty.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    match root {
        None => -1,
        Some(r) => 1 + height(arena, get_l(arena, r)).max(height(arena, get_r(arena, r))),
    }
}

/// Finds the node holding `value`.
pub fn find<N>(arena: &[N], root: Option<u32>, value: &N::Value) -> Option<u32>
where
    N: ValueNode,
    N::Value: Ord,
{
    descend(arena, root, value).ok()
}

/// Walks down from `root` looking for `value`.
///
/// Returns `Ok(idx)` when found, otherwise the attachment point a new node
/// holding `value` would hang from (`None` for an empty tree).
pub(crate) fn descend<N>(
    arena: &[N],
    root: Option<u32>,
    value: &N::Value,
) -> Result<u32, Option<(u32, Side)>>
where
    N: ValueNode,
    N::Value: Ord,
{
    let Some(mut curr) = root else {
        return Err(None);
    };
    loop {
        let side = match value.cmp(arena[curr as usize].value()) {
            std::cmp::Ordering::Equal => return Ok(curr),
            std::cmp::Ordering::Less => Side::Left,
            std::cmp::Ordering::Greater => Side::Right,
        };
        match child(arena, curr, side) {
            Some(c) => curr = c,
            None => return Err(Some((curr, side))),
        }
    }
}

/// Rotates `n` to the left: its right child takes its place.
///
/// Returns the new top of the rotated subtree. Panics if `n` has no right
/// child; callers check that first.
pub fn rotate_left<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let nr = get_r(arena, n).expect("rotate_left needs a right child");
    let p = get_p(arena, n);
    let nrl = get_l(arena, nr);

    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    replace_child(arena, p, n, Some(nr));
    set_p(arena, nr, p);
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    nr
}

/// Rotates `n` to the right: its left child takes its place.
pub fn rotate_right<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let nl = get_l(arena, n).expect("rotate_right needs a left child");
    let p = get_p(arena, n);
    let nlr = get_r(arena, nl);

    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    replace_child(arena, p, n, Some(nl));
    set_p(arena, nl, p);
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    nl
}

/// Rotates at the parent of `c` so that `c` moves one level up.
pub(crate) fn rotate_up<N: Node>(arena: &mut [N], c: u32) {
    let p = get_p(arena, c).expect("rotate_up needs a parent");
    if get_l(arena, p) == Some(c) {
        rotate_right(arena, p);
    } else {
        rotate_left(arena, p);
    }
}

/// Links the detached node `node` as the `side` child of `parent`.
pub(crate) fn attach<N: Node>(arena: &mut [N], node: u32, parent: u32, side: Side) {
    set_child(arena, parent, side, Some(node));
    set_p(arena, node, Some(parent));
}

/// If `node` has two children, exchanges its position with its in-order
/// successor so that `node` ends up with at most one child.
///
/// Returns the new root and the successor it traded places with, if any.
pub(crate) fn make_removable<N: Node>(arena: &mut [N], root: u32, node: u32) -> (u32, Option<u32>) {
    match (get_l(arena, node), get_r(arena, node)) {
        (Some(_), Some(r)) => {
            let successor = first(arena, Some(r)).expect("right subtree is non-empty");
            (swap(arena, root, node, successor), Some(successor))
        }
        _ => (root, None),
    }
}

/// Unlinks `node`, which must have at most one child, letting that child take
/// its place. Returns the new root (`None` once the tree is empty).
pub(crate) fn splice<N: Node>(arena: &mut [N], root: u32, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice needs a node with at most one child");
    let c = l.or(r);

    if let Some(c) = c {
        set_p(arena, c, p);
    }
    replace_child(arena, p, node, c);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    if p.is_some() {
        Some(root)
    } else {
        c
    }
}

/// Rewrites every link that points at `from` so it points at `to` instead.
///
/// Used right before `Vec::swap_remove(to)` moves the last arena node into
/// the slot freed by a removal; `to` must already be detached.
pub(crate) fn relocate<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    from: u32,
    to: u32,
) -> Option<u32> {
    replace_child(arena, get_p(arena, from), from, Some(to));
    if let Some(l) = get_l(arena, from) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, from) {
        set_p(arena, r, Some(to));
    }
    if root == Some(from) {
        Some(to)
    } else {
        root
    }
}

/// Checks parent links and strict in-order ordering.
pub fn assert_ordered<N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    N: ValueNode,
    N::Value: Ord,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn links<N: Node>(arena: &[N], node: u32) -> Result<(), String> {
        for (c, side) in [(get_l(arena, node), Side::Left), (get_r(arena, node), Side::Right)] {
            if let Some(c) = c {
                if get_p(arena, c) != Some(node) {
                    return Err(format!("Broken parent link on {side} child of node {node}"));
                }
                links(arena, c)?;
            }
        }
        Ok(())
    }
    links(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev as usize].value() >= arena[i as usize].value() {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }
    Ok(())
}
