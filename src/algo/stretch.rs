use crate::error::{Error, Result};
use crate::graph::{EdgeList, EdgeR};
use crate::tree::TreeR;

/// Compute the stretch of every off-tree edge: the resistance of the tree
/// path between its endpoints divided by the edge's own resistance.
///
/// Endpoints walk toward each other along parent pointers — the deeper one
/// first, then both in lock step until they meet — so each edge costs the
/// length of its tree path; vertex depths are precomputed once in **O(n)**.
///
/// Stretches are strictly positive and finite, and at least 1 whenever the
/// tree path is no lighter than the edge itself.
///
/// # Arguments
/// * `tree`: the rooted spanning tree.
/// * `off_tree`: edges of the underlying graph that are not in the tree.
/// * `out`: one slot per off-tree edge.
///
/// # Errors
/// [`Error::DimensionMismatch`] if `out` is not parallel to
/// `off_tree.edges`.
pub fn compute_stretch(tree: &TreeR, off_tree: &EdgeList<EdgeR>, out: &mut [f64]) -> Result<()> {
    if out.len() != off_tree.edges.len() {
        return Err(Error::DimensionMismatch {
            expected: off_tree.edges.len(),
            found: out.len(),
        });
    }
    let depth = tree.depths();
    for (slot, e) in out.iter_mut().zip(&off_tree.edges) {
        *slot = tree_path_resistance(tree, &depth, e.u, e.v) / e.resistance;
    }
    Ok(())
}

/// Resistance of the unique tree path between `u` and `v`.
fn tree_path_resistance(tree: &TreeR, depth: &[usize], mut u: usize, mut v: usize) -> f64 {
    let mut acc = 0.0;
    while depth[u] > depth[v] {
        acc += tree.node(u).resistance;
        u = tree.node(u).parent;
    }
    while depth[v] > depth[u] {
        acc += tree.node(v).resistance;
        v = tree.node(v).parent;
    }
    while u != v {
        acc += tree.node(u).resistance + tree.node(v).resistance;
        u = tree.node(u).parent;
        v = tree.node(v).parent;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_along_a_path() {
        // 0 <- 1 <- 2 with unit resistances; edge (0, 2) closes the cycle
        let mut t = TreeR::new(3);
        t.set_parent(1, 0, 1.0);
        t.set_parent(2, 1, 1.0);
        let mut off = EdgeList::<EdgeR>::with_vertices(3);
        off.add_edge(0, 2, 1.0);
        off.add_edge(0, 2, 4.0);
        let mut strs = [0.0; 2];
        compute_stretch(&t, &off, &mut strs).unwrap();
        assert_eq!(strs[0], 2.0);
        assert_eq!(strs[1], 0.5);
    }

    #[test]
    fn stretch_across_branches() {
        //      0
        //    /   \
        //   1     2      path 3 - 1 - 0 - 2 has resistance 2 + 1 + 3
        //   |
        //   3
        let mut t = TreeR::new(4);
        t.set_parent(1, 0, 1.0);
        t.set_parent(2, 0, 3.0);
        t.set_parent(3, 1, 2.0);
        let mut off = EdgeList::<EdgeR>::with_vertices(4);
        off.add_edge(3, 2, 2.0);
        let mut strs = [0.0; 1];
        compute_stretch(&t, &off, &mut strs).unwrap();
        assert_eq!(strs[0], 3.0);
    }

    #[test]
    fn output_must_be_parallel() {
        let t = TreeR::new(2);
        let off = EdgeList::<EdgeR>::with_vertices(2);
        let mut strs = [0.0; 1];
        assert!(matches!(
            compute_stretch(&t, &off, &mut strs),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
