use arboreal_graph::{Color, Graph, GraphError};

fn graph(vertices: &[&'static str], edges: &[(&'static str, &'static str, f64)]) -> Graph<&'static str> {
    let mut g = Graph::new();
    for v in vertices {
        g.add_vertex(*v).unwrap();
    }
    for (a, b, w) in edges {
        g.connect_weighted(a, b, *w).unwrap();
    }
    g
}

#[test]
fn graph_vertex_crud_matrix() {
    let mut g = Graph::new();
    assert!(g.is_empty());
    let a = g.add_vertex("a").unwrap();
    let b = g.add_vertex("b").unwrap();
    assert_ne!(a, b);
    assert!(matches!(g.add_vertex("a"), Err(GraphError::DuplicateVertex)));
    assert_eq!(g.len(), 2);
    assert!(g.contains(&"a"));
    assert_eq!(g.vertex_id(&"b"), Some(b));
    assert_eq!(*g.vertex(&"a").unwrap().element(), "a");
    assert!(matches!(g.vertex(&"z"), Err(GraphError::VertexNotFound)));
    assert_eq!(g.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);

    assert_eq!(g.remove_vertex(&"a"), Some("a"));
    assert_eq!(g.remove_vertex(&"a"), None);
    assert_eq!(g.len(), 1);
    assert!(matches!(
        g.vertex_by_id(a),
        Err(GraphError::UnknownVertex(id)) if id == a
    ));
    assert_eq!(*g.vertex_by_id(b).unwrap().element(), "b");

    // "c" takes over the slot "a" left behind; the old id stays dead
    let c = g.add_vertex("c").unwrap();
    assert_eq!(c.index(), a.index());
    assert_ne!(c, a);
    assert!(matches!(
        g.set_color(a, Color::Red),
        Err(GraphError::UnknownVertex(id)) if id == a
    ));
    assert!(matches!(
        g.vertex_by_id(a),
        Err(GraphError::UnknownVertex(id)) if id == a
    ));
    g.connect(&"b", &"c").unwrap();
    assert!(matches!(
        g.path_weight(&[b, a]),
        Err(GraphError::UnknownVertex(id)) if id == a
    ));
    assert_eq!(g.path_weight(&[b, c]).unwrap(), 1.0);
    assert_eq!(g.vertex(&"c").unwrap().color(), Color::Uncolored);

    g.clear();
    let d = g.add_vertex("d").unwrap();
    for stale in [a, b, c] {
        assert_ne!(d, stale);
        assert!(matches!(g.vertex_by_id(stale), Err(GraphError::UnknownVertex(_))));
    }
}

#[test]
fn graph_edges_matrix() {
    let mut g = graph(&["a", "b", "c"], &[]);
    g.connect(&"a", &"b").unwrap();
    g.connect_weighted(&"b", &"c", 2.5).unwrap();
    assert_eq!(g.edge_count(), 2);

    assert!(g.are_neighbors(&"a", &"b").unwrap());
    assert!(g.are_neighbors(&"b", &"a").unwrap());
    assert!(!g.are_neighbors(&"a", &"c").unwrap());
    assert_eq!(g.weight(&"a", &"b").unwrap(), 1.0);
    assert_eq!(g.weight(&"c", &"b").unwrap(), 2.5);

    g.set_weight(&"c", &"b", 4.0).unwrap();
    assert_eq!(g.weight(&"b", &"c").unwrap(), 4.0);

    g.disconnect(&"b", &"a").unwrap();
    assert!(!g.are_neighbors(&"a", &"b").unwrap());
    assert_eq!(g.edge_count(), 1);
    assert!(matches!(g.weight(&"a", &"b"), Err(GraphError::NotConnected)));
}

#[test]
fn graph_edge_errors_matrix() {
    let mut g = graph(&["a", "b"], &[("a", "b", 1.0)]);

    assert!(matches!(g.connect(&"a", &"b"), Err(GraphError::AlreadyConnected)));
    assert!(matches!(g.connect(&"a", &"a"), Err(GraphError::SelfLoop)));
    assert!(matches!(g.connect(&"a", &"x"), Err(GraphError::VertexNotFound)));
    assert!(matches!(g.disconnect(&"x", &"a"), Err(GraphError::VertexNotFound)));
    assert!(matches!(g.are_neighbors(&"a", &"x"), Err(GraphError::VertexNotFound)));

    for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            g.connect_weighted(&"b", &"a", w),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(matches!(
            g.set_weight(&"a", &"b", w),
            Err(GraphError::InvalidWeight(_))
        ));
    }
    // weight is checked before the endpoints
    assert!(matches!(
        g.connect_weighted(&"x", &"y", -2.0),
        Err(GraphError::InvalidWeight(w)) if w == -2.0
    ));

    g.disconnect(&"a", &"b").unwrap();
    assert!(matches!(g.disconnect(&"a", &"b"), Err(GraphError::NotConnected)));
    assert!(matches!(g.set_weight(&"a", &"b", 2.0), Err(GraphError::NotConnected)));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn graph_remove_vertex_purges_edges_matrix() {
    let mut g = graph(
        &["a", "b", "c", "d"],
        &[("a", "b", 1.0), ("a", "c", 1.0), ("b", "c", 1.0), ("c", "d", 1.0)],
    );
    assert_eq!(g.remove_vertex(&"c"), Some("c"));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex(&"a").unwrap().degree(), 1);
    assert_eq!(g.vertex(&"d").unwrap().degree(), 0);

    // the freed slot is reused, the new vertex starts without edges
    g.add_vertex("e").unwrap();
    assert_eq!(g.vertex(&"e").unwrap().degree(), 0);
    assert_eq!(g.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "d", "e"]);
}

#[test]
fn graph_vertex_views_matrix() {
    let mut g = graph(&["a", "b", "c"], &[("a", "b", 2.0), ("a", "c", 3.0)]);
    let a = g.vertex(&"a").unwrap();
    assert_eq!(a.degree(), 2);
    assert_eq!(a.color(), Color::Uncolored);
    let around: Vec<_> = a.neighbors().map(|n| (*n.vertex.element(), n.weight)).collect();
    assert_eq!(around, vec![("b", 2.0), ("c", 3.0)]);

    let b = g.vertex_id(&"b").unwrap();
    g.set_color(b, Color::Red).unwrap();
    let a = g.vertex(&"a").unwrap();
    let colored: Vec<_> = a.neighbors().map(|n| n.vertex.color()).collect();
    assert_eq!(colored, vec![Color::Red, Color::Uncolored]);

    let mut seen = Vec::new();
    g.for_each_vertex(|v| seen.push((*v.element(), v.degree())));
    assert_eq!(seen, vec![("a", 2), ("b", 1), ("c", 1)]);
    assert_eq!(g.vertices().count(), 3);

    g.remove_vertex(&"b");
    assert!(matches!(
        g.set_color(b, Color::Black),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn graph_display_and_eq_matrix() {
    let g = graph(
        &["a", "b", "c"],
        &[("b", "c", 1.0), ("a", "b", 1.0)],
    );
    assert_eq!(g.to_string(), "{a, b, c}, {(a, b), (b, c)}");
    assert_eq!(Graph::<u8>::new().to_string(), "{}, {}");

    let same = graph(
        &["c", "b", "a"],
        &[("a", "b", 5.0), ("c", "b", 1.0)],
    );
    assert_eq!(g, same);

    let other = graph(&["a", "b", "c"], &[("a", "b", 1.0), ("a", "c", 1.0)]);
    assert_ne!(g, other);
    let smaller = graph(&["a", "b"], &[("a", "b", 1.0)]);
    assert_ne!(g, smaller);

    let mut cleared = g.clone();
    cleared.clear();
    assert!(cleared.is_empty());
    assert_eq!(cleared.edge_count(), 0);
    assert_eq!(cleared, Graph::new());
}
