//! Graph and right-hand-side generators for examples and tests.

use rand::Rng;

use crate::graph::{EdgeList, EdgeR};
use crate::tree::TreeR;

/// Generate a `rows × columns` grid with unit resistances; vertex `(i, j)`
/// maps to `i * columns + j`.
pub fn grid2(rows: usize, columns: usize) -> EdgeList<EdgeR> {
    grid2_with(rows, columns, || 1.0)
}

/// Generate a `rows × columns` grid drawing each edge resistance from
/// `weight`.
pub fn grid2_with<F: FnMut() -> f64>(rows: usize, columns: usize, mut weight: F) -> EdgeList<EdgeR> {
    let mut es = EdgeList::with_vertices(rows * columns);
    for i in 0..rows {
        for j in 0..columns {
            let v = i * columns + j;
            if j + 1 < columns {
                es.add_edge(v, v + 1, weight());
            }
            if i + 1 < rows {
                es.add_edge(v, v + columns, weight());
            }
        }
    }
    es
}

/// Generate a random rooted tree on `n` vertices: vertex `v` attaches to a
/// uniform earlier vertex with resistance uniform in `(1, 100)`.
pub fn random_tree<R: Rng + ?Sized>(n: usize, rng: &mut R) -> TreeR {
    let mut tree = TreeR::new(n);
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        tree.set_parent(v, parent, rng.gen_range(1.0..100.0));
    }
    tree
}

/// Generate a balanced demand vector: entries uniform in `(low, high)`, the
/// last entry set so the total is zero.
pub fn balanced_demand<R: Rng + ?Sized>(n: usize, low: f64, high: f64, rng: &mut R) -> Vec<f64> {
    let mut b = vec![0.0; n];
    let mut sum = 0.0;
    for value in b.iter_mut().take(n.saturating_sub(1)) {
        *value = rng.gen_range(low..high);
        sum += *value;
    }
    if n > 0 {
        b[n - 1] = -sum;
    }
    b
}
