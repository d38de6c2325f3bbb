use std::collections::HashMap;

use lapsolve::algo::{compute_stretch, dijkstra_tree};
use lapsolve::generators::{grid2, grid2_with};
use lapsolve::graph::{AdjacencyArray, EdgeList, EdgeR};
use lapsolve::tree::TreeR;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tree-path resistance computed the slow way, by intersecting root paths.
fn path_resistance(tree: &TreeR, u: usize, v: usize) -> f64 {
    let mut pu = Vec::new();
    let mut pv = Vec::new();
    tree.root_path(u, &mut pu);
    tree.root_path(v, &mut pv);
    let on_u_path: HashMap<usize, f64> = pu.into_iter().collect();
    for (vertex, acc) in pv {
        if let Some(&from_u) = on_u_path.get(&vertex) {
            return from_u + acc;
        }
    }
    panic!("paths never met");
}

fn assert_stretches_match(es: &EdgeList<EdgeR>, tree: &TreeR) {
    let mut strs = vec![0.0; es.len()];
    compute_stretch(tree, es, &mut strs).unwrap();
    for (e, &s) in es.edges.iter().zip(&strs) {
        assert!(s > 0.0 && s.is_finite());
        let expected = path_resistance(tree, e.u, e.v) / e.resistance;
        assert!(
            (s - expected).abs() <= 1e-12 * expected.max(1.0),
            "stretch of ({}, {}) was {s}, expected {expected}",
            e.u,
            e.v
        );
    }
}

#[test]
fn tree_edges_have_stretch_one() {
    let es = grid2(4, 4);
    let tree = dijkstra_tree(&AdjacencyArray::new(&es), 0).unwrap();
    let mut strs = vec![0.0; es.len()];
    compute_stretch(&tree, &es, &mut strs).unwrap();
    for (e, &s) in es.edges.iter().zip(&strs) {
        if tree.is_tree_edge(e.u, e.v) {
            assert_eq!(s, 1.0);
        } else {
            // unweighted grid: every off-tree edge closes an odd cycle
            assert!(s >= 1.0);
        }
    }
}

#[test]
fn unweighted_grid_stretches() {
    let es = grid2(4, 4);
    let tree = dijkstra_tree(&AdjacencyArray::new(&es), 0).unwrap();
    assert_stretches_match(&es, &tree);
}

#[test]
fn weighted_grid_stretches() {
    let mut rng = StdRng::seed_from_u64(23);
    let es = grid2_with(4, 4, || rng.gen_range(1.0..100.0));
    let tree = dijkstra_tree(&AdjacencyArray::new(&es), 5).unwrap();
    assert_stretches_match(&es, &tree);
}

#[test]
fn known_square_stretch() {
    // unit square: tree is the path 1 - 0 - 2; the edge (1, 3) is two tree
    // hops away from closing, the edge (2, 3) likewise
    let mut es = EdgeList::<EdgeR>::with_vertices(4);
    es.add_edge(0, 1, 1.0);
    es.add_edge(0, 2, 1.0);
    es.add_edge(1, 3, 1.0);
    es.add_edge(2, 3, 1.0);
    let tree = dijkstra_tree(&AdjacencyArray::new(&es), 0).unwrap();
    let mut off = EdgeList::<EdgeR>::with_vertices(4);
    let mut expected = Vec::new();
    for e in &es.edges {
        if !tree.is_tree_edge(e.u, e.v) {
            off.push(*e);
            expected.push(path_resistance(&tree, e.u, e.v));
        }
    }
    assert_eq!(off.len(), 1);
    let mut strs = vec![0.0; 1];
    compute_stretch(&tree, &off, &mut strs).unwrap();
    assert_eq!(strs[0], 3.0);
    assert_eq!(expected[0], 3.0);
}
