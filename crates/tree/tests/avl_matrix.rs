use arboreal_tree::AvlTree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn avl_balanced_scenario_matrix() {
    let mut tree: AvlTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    tree.assert_valid().unwrap();
    // ceil(log2(7 + 1)) + 1
    assert!(tree.height() <= 4);
    assert_eq!(tree.height(), 2);

    assert_eq!(tree.remove(&5), Some(5));
    tree.assert_valid().unwrap();
    assert_eq!(tree.remove(&3), Some(3));
    tree.assert_valid().unwrap();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 4, 7, 8, 9]);
}

#[test]
fn avl_single_rotation_matrix() {
    let mut tree = AvlTree::new();
    for v in [1, 2, 3] {
        tree.insert(v);
    }
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 2);
    assert_eq!(root.height(), 1);
    assert_eq!(root.balance(), 0);
    assert!(root.left().unwrap().is_leaf());

    let mut tree = AvlTree::new();
    for v in [3, 2, 1] {
        tree.insert(v);
    }
    assert_eq!(*tree.root().unwrap().value(), 2);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_double_rotation_matrix() {
    let mut tree = AvlTree::new();
    for v in [3, 1, 2] {
        tree.insert(v);
    }
    assert_eq!(*tree.root().unwrap().value(), 2);
    tree.assert_valid().unwrap();

    let mut tree = AvlTree::new();
    for v in [1, 3, 2] {
        tree.insert(v);
    }
    assert_eq!(*tree.root().unwrap().value(), 2);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    // an AVL tree of 300 nodes is at most ~1.44 log2(n) tall
    assert!(tree.height() <= 11);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.remove(&i), Some(i));
        tree.assert_valid().unwrap();
    }
    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
    assert_eq!(tree.len(), 200);
}

#[test]
fn avl_delete_rebalances_upward_matrix() {
    // deleting 1 leaves 2 with a right-left heavy subtree
    let mut tree: AvlTree<i32> = [5, 2, 8, 1, 7, 10, 6].into_iter().collect();
    tree.assert_valid().unwrap();
    tree.remove(&1);
    tree.remove(&2);
    tree.assert_valid().unwrap();
    assert_eq!(*tree.root().unwrap().value(), 7);
}

#[test]
fn avl_random_ops_matrix() {
    let mut rng = StdRng::seed_from_u64(0xa11);
    for _ in 0..20 {
        let mut tree = AvlTree::new();
        let mut values: Vec<u32> = (0..200).map(|_| rng.gen_range(0..1000)).collect();
        let mut present = std::collections::BTreeSet::new();
        for &v in &values {
            assert_eq!(tree.insert(v), present.insert(v));
        }
        tree.assert_valid().unwrap();

        values.shuffle(&mut rng);
        for v in values.iter().take(120) {
            assert_eq!(tree.remove(v), present.take(v));
            tree.assert_valid().unwrap();
        }
        assert!(tree.iter().eq(present.iter()));
    }
}

#[test]
fn avl_print_matrix() {
    let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
    let out = tree.print();
    assert!(out.contains("h=1 bf=0"));
    assert!(out.contains('∅'));
}
