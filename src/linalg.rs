//! BLAS-level glue: Laplacian mat-vec, inner products, norms.

use crate::graph::{Edge, EdgeList};
use crate::tree::TreeR;

/// The capability to apply a graph Laplacian: `out ← α·L·x + β·out`.
///
/// Implemented by both [`EdgeList`] parameterizations and by rooted trees, so
/// solvers accept whichever representation the caller already holds.
pub trait Laplacian {
    /// Dimension of the operator.
    fn node_count(&self) -> usize;

    /// `out ← α·L·x + β·out`.
    ///
    /// `x` and `out` must not alias; `out` doubles as the `y` input of the
    /// classic `αAx + βy` update.
    fn mul_add(&self, alpha: f64, x: &[f64], beta: f64, out: &mut [f64]);
}

#[inline]
fn scale(beta: f64, out: &mut [f64]) {
    if beta == 0.0 {
        out.fill(0.0);
    } else if beta != 1.0 {
        for o in out.iter_mut() {
            *o *= beta;
        }
    }
}

impl<E: Edge> Laplacian for EdgeList<E> {
    fn node_count(&self) -> usize {
        self.n
    }

    fn mul_add(&self, alpha: f64, x: &[f64], beta: f64, out: &mut [f64]) {
        scale(beta, out);
        for e in &self.edges {
            let (u, v) = e.endpoints();
            let current = alpha * e.conductance() * (x[u] - x[v]);
            out[u] += current;
            out[v] -= current;
        }
    }
}

impl Laplacian for TreeR {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn mul_add(&self, alpha: f64, x: &[f64], beta: f64, out: &mut [f64]) {
        scale(beta, out);
        for (v, node) in self.nodes().iter().enumerate() {
            if node.parent == v {
                continue;
            }
            let current = alpha * (x[v] - x[node.parent]) / node.resistance;
            out[v] += current;
            out[node.parent] -= current;
        }
    }
}

/// `out ← α·A·x + β·out` for any [`Laplacian`] operator.
///
/// **Panics** if the dimensions disagree.
pub fn mv<A: Laplacian + ?Sized>(alpha: f64, a: &A, x: &[f64], beta: f64, out: &mut [f64]) {
    let n = a.node_count();
    assert_eq!(x.len(), n);
    assert_eq!(out.len(), n);
    a.mul_add(alpha, x, beta, out);
}

/// Inner product.
///
/// **Panics** if the lengths disagree.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}
