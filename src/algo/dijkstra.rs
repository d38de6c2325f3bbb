use core::cmp::Ordering;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use crate::error::{Error, Result};
use crate::graph::AdjacencyArray;
use crate::tree::TreeR;

/// Heap entry ordering vertices nearest-first; distance ties pop the smaller
/// vertex, keeping the expansion order deterministic.
#[derive(Debug, Clone, Copy)]
struct Nearest {
    distance: f64,
    vertex: usize,
}

impl PartialEq for Nearest {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Nearest {}

impl PartialOrd for Nearest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nearest {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed on both fields so BinaryHeap::pop yields the minimum
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Build the shortest-path tree of `graph` rooted at `root`, with arc
/// resistances as lengths.
///
/// Each vertex records the final relaxed arc as its parent edge, so the
/// resistance stored per vertex is that arc's, not the path length. Stale
/// heap entries are skipped on pop rather than decreased in place.
///
/// # Arguments
/// * `graph`: adjacency of a connected undirected graph.
/// * `root`: the vertex to root the tree at.
///
/// # Returns
/// * [`TreeR`]: the shortest-path tree, rooted at `root`.
///
/// # Complexity
/// * Time complexity: **O((|V| + |E|) log |V|)**.
/// * Auxiliary space: **O(|V| + |E|)**.
///
/// # Errors
/// [`Error::GraphDisconnected`] if some vertex is unreachable from `root`.
///
/// **Panics** if `root` is out of bounds.
///
/// # Example
/// ```rust
/// use lapsolve::graph::{AdjacencyArray, EdgeList, EdgeR};
/// use lapsolve::algo::dijkstra_tree;
///
/// let mut es = EdgeList::<EdgeR>::with_vertices(3);
/// es.add_edge(0, 1, 1.0);
/// es.add_edge(1, 2, 1.0);
/// es.add_edge(0, 2, 3.0);
///
/// let tree = dijkstra_tree(&AdjacencyArray::new(&es), 0).unwrap();
/// // the heavy edge (0, 2) loses to the two-hop path
/// assert_eq!(tree.node(2).parent, 1);
/// ```
pub fn dijkstra_tree(graph: &AdjacencyArray, root: usize) -> Result<TreeR> {
    let n = graph.node_count();
    let mut tree = TreeR::with_root(n, root);
    let mut distance = vec![f64::INFINITY; n];
    let mut visited = FixedBitSet::with_capacity(n);
    let mut visit_next = BinaryHeap::new();

    distance[root] = 0.0;
    visit_next.push(Nearest {
        distance: 0.0,
        vertex: root,
    });
    let mut reached = 0;

    while let Some(Nearest {
        distance: score,
        vertex,
    }) = visit_next.pop()
    {
        if visited.contains(vertex) {
            continue;
        }
        visited.insert(vertex);
        reached += 1;
        for arc in graph.neighbors(vertex) {
            if visited.contains(arc.head) {
                continue;
            }
            let next_score = score + arc.resistance;
            if next_score < distance[arc.head] {
                distance[arc.head] = next_score;
                tree.set_parent(arc.head, vertex, arc.resistance);
                visit_next.push(Nearest {
                    distance: next_score,
                    vertex: arc.head,
                });
            }
        }
    }

    if reached != n {
        return Err(Error::GraphDisconnected);
    }
    Ok(tree)
}
