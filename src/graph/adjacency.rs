//! Compressed sparse adjacency arrays for fast neighbor iteration.

use crate::graph::{Edge, EdgeList};

/// An outgoing arc: the neighbor it leads to and the resistance of the
/// connecting edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub head: usize,
    pub resistance: f64,
}

/// CSR-style adjacency of an undirected graph.
///
/// `offsets` has length `n + 1`; the arcs leaving vertex `v` occupy
/// `arcs[offsets[v]..offsets[v + 1]]`. Each undirected edge contributes an
/// arc in both directions. Immutable after construction.
///
/// Using **O(|V| + |E|)** space.
#[derive(Debug, Clone)]
pub struct AdjacencyArray {
    offsets: Vec<usize>,
    arcs: Vec<Arc>,
}

impl AdjacencyArray {
    /// Build the adjacency of `es`.
    ///
    /// Parallel edges are kept as distinct arcs.
    ///
    /// Computes in **O(|V| + |E|)** time.
    ///
    /// **Panics** if an edge endpoint is out of range; validate the edge list
    /// first when it comes from outside.
    pub fn new<E: Edge>(es: &EdgeList<E>) -> Self {
        let n = es.n;
        let mut offsets = vec![0usize; n + 1];
        for e in &es.edges {
            let (u, v) = e.endpoints();
            offsets[u + 1] += 1;
            offsets[v + 1] += 1;
        }
        for i in 1..=n {
            offsets[i] += offsets[i - 1];
        }

        let mut arcs = vec![
            Arc {
                head: 0,
                resistance: 0.0
            };
            offsets[n]
        ];
        let mut cursor = offsets.clone();
        for e in &es.edges {
            let (u, v) = e.endpoints();
            let resistance = e.resistance();
            arcs[cursor[u]] = Arc {
                head: v,
                resistance,
            };
            cursor[u] += 1;
            arcs[cursor[v]] = Arc {
                head: u,
                resistance,
            };
            cursor[v] += 1;
        }

        AdjacencyArray { offsets, arcs }
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The arcs leaving `v`.
    ///
    /// Computes in **O(1)** time.
    pub fn neighbors(&self, v: usize) -> &[Arc] {
        &self.arcs[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Number of arcs leaving `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeR;

    #[test]
    fn arcs_both_directions() {
        let mut es = EdgeList::<EdgeR>::with_vertices(3);
        es.add_edge(0, 1, 2.0);
        es.add_edge(1, 2, 3.0);
        let g = AdjacencyArray::new(&es);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.neighbors(0)[0].head, 1);
        assert_eq!(g.neighbors(2)[0].resistance, 3.0);
    }

    #[test]
    fn parallel_edges_kept() {
        let mut es = EdgeList::<EdgeR>::with_vertices(2);
        es.add_edge(0, 1, 1.0);
        es.add_edge(0, 1, 4.0);
        let g = AdjacencyArray::new(&es);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.degree(1), 2);
    }
}
