use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::AdjacencyMap;
use crate::solve::Preconditioner;

/// One elimination column: the pivot vertex, its diagonal at elimination
/// time, and its arcs to the later-eliminated neighbors.
#[derive(Debug, Clone)]
struct Column {
    vertex: usize,
    pivot: f64,
    arcs: Vec<(usize, f64)>,
}

/// Sparse Cholesky-style factorization of a Laplacian given as an
/// [`AdjacencyMap`], eliminating vertices in minimum-degree order.
///
/// Eliminating a vertex replaces it by a weighted clique on its neighbors
/// (the Schur complement step); the Schur complement of a Laplacian is the
/// Laplacian of the reduced graph, so the whole factorization stays inside
/// the adjacency representation. Degree-one vertices eliminate without any
/// fill, so the tree portion of an augmented tree collapses in linear time
/// before the sampled extra edges are touched.
///
/// The solver exclusively owns its elimination columns; the input adjacency
/// is consumed as scratch and dropped at factorization end.
#[derive(Debug, Clone)]
pub struct MinDegreeSolver {
    n: usize,
    columns: Vec<Column>,
    /// The one vertex never eliminated; anchors the kernel of the Laplacian.
    terminal: usize,
}

impl MinDegreeSolver {
    /// Factor the Laplacian of `graph`.
    ///
    /// The heap is keyed by `(degree, vertex)` with lazy deletion: stale
    /// entries are skipped when popped.
    ///
    /// # Errors
    /// [`Error::SingularSystem`] if the graph falls apart during elimination,
    /// which only malformed (disconnected) input can cause.
    pub fn new(mut graph: AdjacencyMap) -> Result<Self> {
        let n = graph.node_count();
        let mut columns = Vec::with_capacity(n.saturating_sub(1));
        let mut eliminated = vec![false; n];

        let mut queue: BinaryHeap<Reverse<(usize, usize)>> = (0..n)
            .map(|v| Reverse((graph.degree(v), v)))
            .collect();

        let mut remaining = n;
        while remaining > 1 {
            let (degree, v) = match queue.pop() {
                Some(Reverse(key)) => key,
                None => return Err(Error::SingularSystem { vertex: n }),
            };
            if eliminated[v] || degree != graph.degree(v) {
                continue;
            }

            let arcs: Vec<(usize, f64)> = graph.neighbors(v).collect();
            let pivot: f64 = arcs.iter().map(|&(_, w)| w).sum();
            if arcs.is_empty() || !(pivot > 0.0) {
                return Err(Error::SingularSystem { vertex: v });
            }

            graph.remove_vertex(v);
            for (j, &(a, wa)) in arcs.iter().enumerate() {
                for &(b, wb) in &arcs[j + 1..] {
                    graph.add_edge(a, b, wa * wb / pivot);
                }
            }
            for &(a, _) in &arcs {
                queue.push(Reverse((graph.degree(a), a)));
            }

            columns.push(Column { vertex: v, pivot, arcs });
            eliminated[v] = true;
            remaining -= 1;
        }

        let terminal = (0..n).find(|&v| !eliminated[v]).unwrap_or(0);
        Ok(MinDegreeSolver {
            n,
            columns,
            terminal,
        })
    }

    /// Number of vertices of the factored system.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Arcs stored across all elimination columns, a fill-in measure.
    pub fn factor_arcs(&self) -> usize {
        self.columns.iter().map(|c| c.arcs.len()).sum()
    }

    /// Solve `L x = b` for balanced `b`.
    ///
    /// Exact for the factored Laplacian up to floating rounding; the result
    /// is recentered to mean zero.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the buffers do not match the system.
    pub fn solve(&self, b: &[f64], x: &mut [f64]) -> Result<()> {
        if b.len() != self.n {
            return Err(Error::DimensionMismatch {
                expected: self.n,
                found: b.len(),
            });
        }
        if x.len() != self.n {
            return Err(Error::DimensionMismatch {
                expected: self.n,
                found: x.len(),
            });
        }
        x.copy_from_slice(b);
        self.substitute(x);
        Ok(())
    }

    /// Forward and backward substitution in one buffer holding `b` on entry.
    ///
    /// Forward: fold each pivot's share of the right-hand side onto its
    /// later-eliminated neighbors. Backward: recover potentials against the
    /// pivot diagonals, terminal vertex pinned to zero.
    fn substitute(&self, x: &mut [f64]) {
        if x.is_empty() {
            return;
        }
        for col in &self.columns {
            let share = x[col.vertex] / col.pivot;
            for &(a, w) in &col.arcs {
                x[a] += share * w;
            }
        }
        x[self.terminal] = 0.0;
        for col in self.columns.iter().rev() {
            let mut sum = x[col.vertex];
            for &(a, w) in &col.arcs {
                sum += w * x[a];
            }
            x[col.vertex] = sum / col.pivot;
        }
        let mean = x.iter().sum::<f64>() / x.len() as f64;
        for value in x.iter_mut() {
            *value -= mean;
        }
    }
}

impl Preconditioner for MinDegreeSolver {
    fn apply(&self, r: &[f64], z: &mut [f64]) {
        debug_assert_eq!(r.len(), self.n);
        z.copy_from_slice(r);
        self.substitute(z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeList, EdgeR};
    use crate::linalg::mv;
    use crate::tree::TreeR;

    #[test]
    fn two_vertices() {
        let mut g = AdjacencyMap::new(2);
        g.add_edge(0, 1, 0.5);
        let s = MinDegreeSolver::new(g).unwrap();
        let b = [1.0, -1.0];
        let mut x = [0.0; 2];
        s.solve(&b, &mut x).unwrap();
        // potential difference = resistance * current = 2
        assert!((x[0] - x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn triangle_is_exact() {
        let mut es = EdgeList::<EdgeR>::with_vertices(3);
        es.add_edge(0, 1, 1.0);
        es.add_edge(1, 2, 2.0);
        es.add_edge(0, 2, 4.0);
        let mut g = AdjacencyMap::new(3);
        for e in &es.edges {
            g.add_edge_r(e);
        }
        let s = MinDegreeSolver::new(g).unwrap();
        let b = [3.0, -1.0, -2.0];
        let mut x = [0.0; 3];
        s.solve(&b, &mut x).unwrap();
        let mut r = b;
        mv(-1.0, &es, &x, 1.0, &mut r);
        for value in r {
            assert!(value.abs() < 1e-10);
        }
    }

    #[test]
    fn leaves_collapse_without_fill() {
        let mut t = TreeR::new(5);
        for v in 1..5 {
            t.set_parent(v, v - 1, 1.0);
        }
        let s = MinDegreeSolver::new(AdjacencyMap::from_tree(&t)).unwrap();
        // a path eliminates with one arc per column
        assert_eq!(s.factor_arcs(), 4);
    }

    #[test]
    fn disconnected_is_singular() {
        let mut g = AdjacencyMap::new(3);
        g.add_edge(0, 1, 1.0);
        assert!(matches!(
            MinDegreeSolver::new(g),
            Err(Error::SingularSystem { .. })
        ));
    }
}
