use std::fmt::Debug;

use tracing::trace;

use crate::util::{self, get_l, get_p, get_r, side_of};

use super::types::{Color, RbNodeLike};

/// Absent children count as black.
#[inline]
fn is_black<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i as usize].color() == Color::Black)
}

#[inline]
fn is_red<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    !is_black(arena, i)
}

#[inline]
fn paint<N: RbNodeLike>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

#[inline]
fn color_of<N: RbNodeLike>(arena: &[N], i: u32) -> Color {
    arena[i as usize].color()
}

/// Rotates `c` above its parent, tracking the root.
fn lift<N: RbNodeLike>(arena: &mut [N], root: u32, c: u32) -> u32 {
    util::rotate_up(arena, c);
    trace!(node = c, "red-black rotation");
    if get_p(arena, c).is_none() {
        c
    } else {
        root
    }
}

fn sibling<N: RbNodeLike>(arena: &[N], i: u32) -> Option<u32> {
    let p = get_p(arena, i)?;
    if get_l(arena, p) == Some(i) {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

/// Repairs a red leaf just linked at `n`. Returns the new root.
pub fn insert<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> u32 {
    paint(arena, n, Color::Red);
    let mut root = root.unwrap_or(n);
    let mut n = n;

    loop {
        let Some(mut p) = get_p(arena, n) else {
            paint(arena, n, Color::Black);
            return n;
        };
        if is_black(arena, Some(p)) {
            return root;
        }
        let Some(g) = get_p(arena, p) else {
            // Painting a red root black never breaks the black height.
            paint(arena, p, Color::Black);
            return root;
        };

        let uncle = sibling(arena, p);
        if is_red(arena, uncle) {
            paint(arena, p, Color::Black);
            paint(arena, uncle.expect("red uncle exists"), Color::Black);
            paint(arena, g, Color::Red);
            n = g;
            continue;
        }

        if side_of(arena, n) != side_of(arena, p) {
            root = lift(arena, root, n);
            std::mem::swap(&mut n, &mut p);
        }

        paint(arena, p, Color::Black);
        paint(arena, g, Color::Red);
        return lift(arena, root, p);
    }
}

/// Unlinks `node` and restores the coloring. Returns the new root.
pub fn remove<N: RbNodeLike>(arena: &mut [N], root: u32, node: u32) -> Option<u32> {
    let (mut root, successor) = util::make_removable(arena, root, node);
    if let Some(s) = successor {
        // Colors belong to positions, and the two nodes just traded places.
        let cn = color_of(arena, node);
        let cs = color_of(arena, s);
        paint(arena, node, cs);
        paint(arena, s, cn);
    }

    let removed_black = color_of(arena, node) == Color::Black;
    match get_l(arena, node).or(get_r(arena, node)) {
        Some(child) => {
            let root = util::splice(arena, root, node)?;
            if !removed_black {
                return Some(root);
            }
            if is_red(arena, Some(child)) {
                paint(arena, child, Color::Black);
                return Some(root);
            }
            Some(fix_double_black(arena, root, child))
        }
        None => {
            if get_p(arena, node).is_none() {
                return None;
            }
            // The leaf stays linked through the fixup and stands in for the
            // black nil child that takes its place.
            if removed_black {
                root = fix_double_black(arena, root, node);
            }
            util::splice(arena, root, node)
        }
    }
}

/// Pushes the missing black unit at `v` up the tree until it can be absorbed.
fn fix_double_black<N: RbNodeLike>(arena: &mut [N], mut root: u32, mut v: u32) -> u32 {
    loop {
        let Some(p) = get_p(arena, v) else {
            paint(arena, v, Color::Black);
            return v;
        };
        let v_side = side_of(arena, v).expect("non-root node has a side");
        let mut s = sibling(arena, v).expect("doubly black node has a sibling");

        if is_red(arena, Some(s)) {
            paint(arena, s, Color::Black);
            paint(arena, p, Color::Red);
            root = lift(arena, root, s);
            s = sibling(arena, v).expect("rotation hands v a new sibling");
        }

        let near = util::child(arena, s, v_side);
        let far = util::child(arena, s, v_side.opposite());

        if is_black(arena, near) && is_black(arena, far) {
            paint(arena, s, Color::Red);
            if is_black(arena, Some(p)) {
                v = p;
                continue;
            }
            paint(arena, p, Color::Black);
            return root;
        }

        let far = if is_black(arena, far) {
            let near = near.expect("red near child exists");
            paint(arena, near, Color::Black);
            paint(arena, s, Color::Red);
            root = lift(arena, root, near);
            s = near;
            util::child(arena, s, v_side.opposite())
        } else {
            far
        };

        let parent_color = color_of(arena, p);
        paint(arena, s, parent_color);
        paint(arena, p, Color::Black);
        paint(arena, far.expect("red far child exists"), Color::Black);
        return lift(arena, root, s);
    }
}

/// Black height of the subtree, or the first violated property.
fn black_height<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Result<usize, String> {
    let Some(node) = node else {
        return Ok(1);
    };
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    if is_red(arena, Some(node)) && (is_red(arena, l) || is_red(arena, r)) {
        return Err(format!("Red node {node} has a red child"));
    }
    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err(format!("Black height mismatch under node {node}: {lh} vs {rh}"));
    }
    Ok(lh + usize::from(is_black(arena, Some(node))))
}

pub fn assert_red_black_tree<N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    N: RbNodeLike,
    N::Value: Ord,
{
    util::assert_ordered(arena, root)?;
    let Some(root) = root else {
        return Ok(());
    };
    if is_red(arena, Some(root)) {
        return Err("Root is not black".to_string());
    }
    black_height(arena, Some(root)).map(|_| ())
}

/// Debug printer for red-black trees.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: RbNodeLike,
    N::Value: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {} {:?}\n{tab}L={left}\n{tab}R={right}",
                n.color(),
                n.value()
            )
        }
    }
}
