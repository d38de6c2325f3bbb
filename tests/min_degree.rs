use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lapsolve::generators::{balanced_demand, grid2, random_tree};
use lapsolve::graph::AdjacencyMap;
use lapsolve::linalg::{mv, norm};
use lapsolve::{MinDegreeSolver, TreeSolver};

#[test]
fn tree_laplacian_solves_exactly() {
    let mut rng = StdRng::seed_from_u64(31);
    let tree = random_tree(500, &mut rng);
    let b = balanced_demand(500, -10.0, 10.0, &mut rng);

    let solver = MinDegreeSolver::new(AdjacencyMap::from_tree(&tree)).unwrap();
    let mut x = vec![0.0; 500];
    solver.solve(&b, &mut x).unwrap();

    let mut r = b.clone();
    mv(-1.0, &tree, &x, 1.0, &mut r);
    assert!(norm(&r) / norm(&b) <= 1e-10);
}

// a direct solve by subtree aggregation and the elimination factor must
// agree on trees
#[test]
fn agrees_with_tree_solver() {
    let mut rng = StdRng::seed_from_u64(32);
    let tree = random_tree(50, &mut rng);
    let b = balanced_demand(50, -10.0, 10.0, &mut rng);

    let mut direct = vec![0.0; 50];
    TreeSolver::new(&tree).solve(&b, &mut direct).unwrap();

    let mut factored = vec![0.0; 50];
    MinDegreeSolver::new(AdjacencyMap::from_tree(&tree))
        .unwrap()
        .solve(&b, &mut factored)
        .unwrap();

    for (a, b) in direct.iter().zip(&factored) {
        assert!((a - b).abs() <= 1e-10, "{a} vs {b}");
    }
}

#[test]
fn full_grid_is_still_exact() {
    // elimination is exact on any connected Laplacian, dense fill included
    let es = grid2(6, 6);
    let mut rng = StdRng::seed_from_u64(33);
    let b = balanced_demand(36, -1.0, 1.0, &mut rng);

    let mut g = AdjacencyMap::new(36);
    for e in &es.edges {
        g.add_edge_r(e);
    }
    let solver = MinDegreeSolver::new(g).unwrap();
    let mut x = vec![0.0; 36];
    solver.solve(&b, &mut x).unwrap();

    let mut r = b.clone();
    mv(-1.0, &es, &x, 1.0, &mut r);
    assert!(norm(&r) / norm(&b) <= 1e-10);
}

#[test]
fn fill_in_stays_near_linear_on_augmented_trees() {
    let mut rng = StdRng::seed_from_u64(34);
    let n = 1000;
    let tree = random_tree(n, &mut rng);
    let mut g = AdjacencyMap::from_tree(&tree);
    // a handful of extra edges, as the sampler would add
    for _ in 0..10 {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            g.add_edge(u, v, 1.0);
        }
    }
    let solver = MinDegreeSolver::new(g).unwrap();
    // tree columns carry one arc each; cycle vertices two; only the few
    // junction vertices more
    assert!(solver.factor_arcs() < 3 * n);
}
