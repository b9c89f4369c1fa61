use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;

use arboreal_graph::{Graph, GraphError};
use proptest::prelude::*;

fn chain_with_branch() -> Graph<u32> {
    // 1 - 2 - 4
    // |   |
    // 3   5      6 (isolated)
    let mut g = Graph::new();
    for v in 1..=6 {
        g.add_vertex(v).unwrap();
    }
    for (a, b) in [(1, 2), (1, 3), (2, 4), (2, 5)] {
        g.connect(&a, &b).unwrap();
    }
    g
}

#[test]
fn bfs_order_matrix() {
    let mut g = chain_with_branch();
    let mut order = Vec::new();
    g.bfs(&1, |v| order.push(*v.element())).unwrap();
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
}

#[test]
fn dfs_order_matrix() {
    let mut g = chain_with_branch();
    let mut order = Vec::new();
    g.dfs(&1, |v| order.push(*v.element())).unwrap();
    // neighbours are pushed in connection order, so the last one pops first
    assert_eq!(order, vec![1, 3, 2, 5, 4]);
}

#[test]
fn traversal_errors_matrix() {
    let mut g = chain_with_branch();
    assert!(matches!(g.bfs(&99, |_| {}), Err(GraphError::VertexNotFound)));
    assert!(matches!(g.dfs(&99, |_| {}), Err(GraphError::VertexNotFound)));
}

#[test]
fn early_exit_matrix() {
    let mut g = chain_with_branch();
    let hit = g
        .dfs_until(&1, |v| {
            if v.degree() == 3 {
                ControlFlow::Break(*v.element())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
    assert_eq!(hit, Some(2));

    let none = g
        .bfs_until(&6, |_| ControlFlow::<()>::Continue(()))
        .unwrap();
    assert_eq!(none, None);

    // marks were reset, so a full walk still reaches everything
    let mut count = 0;
    g.bfs(&1, |_| count += 1).unwrap();
    assert_eq!(count, 5);
}

#[test]
fn connectivity_matrix() {
    let mut g: Graph<u32> = Graph::new();
    assert!(g.is_connected());
    g.add_vertex(1).unwrap();
    assert!(g.is_connected());

    let mut g = chain_with_branch();
    assert!(!g.is_connected());
    g.connect(&5, &6).unwrap();
    assert!(g.is_connected());
    g.disconnect(&2, &5).unwrap();
    assert!(!g.is_connected());
}

proptest! {
    #[test]
    fn walks_visit_each_reachable_vertex_once(
        n in 1usize..24,
        edges in proptest::collection::vec((0usize..24, 0usize..24), 0..60),
        start in 0usize..24,
    ) {
        let mut g = Graph::new();
        for v in 0..n {
            g.add_vertex(v).unwrap();
        }
        let mut adjacency = vec![BTreeSet::new(); n];
        for (a, b) in edges {
            let (a, b) = (a % n, b % n);
            if a != b && g.connect(&a, &b).is_ok() {
                adjacency[a].insert(b);
                adjacency[b].insert(a);
            }
        }
        let start = start % n;

        let mut reachable = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            for &u in &adjacency[v] {
                if reachable.insert(u) {
                    stack.push(u);
                }
            }
        }

        for dfs in [false, true] {
            let mut seen = Vec::new();
            if dfs {
                g.dfs(&start, |v| seen.push(*v.element())).unwrap();
            } else {
                g.bfs(&start, |v| seen.push(*v.element())).unwrap();
            }
            let unique: HashSet<_> = seen.iter().copied().collect();
            prop_assert_eq!(unique.len(), seen.len());
            prop_assert_eq!(unique, reachable.clone());
        }
        prop_assert_eq!(g.is_connected(), reachable.len() == n);
    }

    #[test]
    fn connect_then_disconnect_round_trips(
        pairs in proptest::collection::vec((0u8..10, 0u8..10, 1u32..50), 0..40),
    ) {
        let mut g = Graph::new();
        for v in 0..10u8 {
            g.add_vertex(v).unwrap();
        }
        let empty = g.clone();
        let mut added = Vec::new();
        for (a, b, w) in pairs {
            let w = f64::from(w);
            if g.connect_weighted(&a, &b, w).is_ok() {
                prop_assert!(g.are_neighbors(&a, &b).unwrap());
                prop_assert!(g.are_neighbors(&b, &a).unwrap());
                prop_assert_eq!(g.weight(&b, &a).unwrap(), w);
                added.push((a, b));
            }
        }
        prop_assert_eq!(g.edge_count(), added.len());
        for (a, b) in added {
            g.disconnect(&a, &b).unwrap();
            prop_assert!(!g.are_neighbors(&a, &b).unwrap());
        }
        prop_assert_eq!(g, empty);
    }
}
