use crate::types::Node;

use super::{get_l, get_p, get_r, set_child, set_l, set_p, set_r, side_of};

#[derive(Clone, Copy)]
struct Links {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
}

impl Links {
    fn of<N: Node>(arena: &[N], idx: u32) -> Self {
        Self {
            p: get_p(arena, idx),
            l: get_l(arena, idx),
            r: get_r(arena, idx),
        }
    }
}

/// Exchanges the tree positions of `x` and `y`.
///
/// Payloads stay in their arena slots; only links move. Works for any pair,
/// including a parent and its child. Returns the (possibly new) root.
pub fn swap<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let lx = Links::of(arena, x);
    let ly = Links::of(arena, y);
    let sx = side_of(arena, x);
    let sy = side_of(arena, y);
    let flip = |v: Option<u32>| match v {
        Some(i) if i == x => Some(y),
        Some(i) if i == y => Some(x),
        other => other,
    };

    // Outside neighbours first, while sides were captured on the old shape.
    for (links, side, moved_to) in [(lx, sx, y), (ly, sy, x)] {
        if let (Some(p), Some(side)) = (links.p, side) {
            if p != x && p != y {
                set_child(arena, p, side, Some(moved_to));
            }
        }
        for c in [links.l, links.r].into_iter().flatten() {
            if c != x && c != y {
                set_p(arena, c, Some(moved_to));
            }
        }
    }

    set_p(arena, y, flip(lx.p));
    set_l(arena, y, flip(lx.l));
    set_r(arena, y, flip(lx.r));
    set_p(arena, x, flip(ly.p));
    set_l(arena, x, flip(ly.l));
    set_r(arena, x, flip(ly.r));

    if root == x {
        y
    } else if root == y {
        x
    } else {
        root
    }
}
