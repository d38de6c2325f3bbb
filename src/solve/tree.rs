use crate::error::{Error, Result};
use crate::solve::Preconditioner;
use crate::tree::TreeR;

/// Exact direct solver for a pure tree Laplacian.
///
/// On a tree the current through each edge is forced: it equals the total
/// demand in the subtree hanging below it. One upward sweep accumulates
/// subtree demands, one downward sweep integrates potentials, both **O(n)**.
/// The result is recentered to mean zero, the least-norm representative of
/// the solution coset.
#[derive(Debug, Clone)]
pub struct TreeSolver {
    nodes: Vec<(usize, f64)>,
    /// Non-root vertices ordered children before parents.
    order: Vec<usize>,
    root: usize,
}

impl TreeSolver {
    /// Prepare the elimination order for `tree`.
    pub fn new(tree: &TreeR) -> Self {
        let depth = tree.depths();
        let n = tree.node_count();

        // bucket vertices by depth, then emit deepest first
        let max_depth = depth.iter().copied().max().unwrap_or(0);
        let mut buckets = vec![0usize; max_depth + 2];
        for &d in &depth {
            buckets[d + 1] += 1;
        }
        for i in 1..buckets.len() {
            buckets[i] += buckets[i - 1];
        }
        let mut by_depth = vec![0usize; n];
        let mut cursor = buckets;
        for v in 0..n {
            by_depth[cursor[depth[v]]] = v;
            cursor[depth[v]] += 1;
        }

        let root = tree.root();
        let order = by_depth
            .into_iter()
            .rev()
            .filter(|&v| tree.node(v).parent != v)
            .collect();

        TreeSolver {
            nodes: tree
                .nodes()
                .iter()
                .map(|node| (node.parent, node.resistance))
                .collect(),
            order,
            root,
        }
    }

    /// Solve `L x = b` for balanced `b` (entries summing to zero).
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the buffers do not match the tree.
    pub fn solve(&self, b: &[f64], x: &mut [f64]) -> Result<()> {
        let n = self.nodes.len();
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.len(),
            });
        }
        if x.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: x.len(),
            });
        }
        x.copy_from_slice(b);
        self.substitute(x);
        Ok(())
    }

    /// Both sweeps in one caller-provided buffer holding `b` on entry.
    fn substitute(&self, x: &mut [f64]) {
        if x.is_empty() {
            return;
        }
        // upward: x[v] becomes the demand of v's subtree
        for &v in &self.order {
            let (parent, _) = self.nodes[v];
            x[parent] += x[v];
        }
        // downward: replace demands by potentials
        x[self.root] = 0.0;
        for &v in self.order.iter().rev() {
            let (parent, resistance) = self.nodes[v];
            x[v] = x[parent] + x[v] * resistance;
        }
        let mean = x.iter().sum::<f64>() / x.len() as f64;
        for value in x.iter_mut() {
            *value -= mean;
        }
    }
}

impl Preconditioner for TreeSolver {
    fn apply(&self, r: &[f64], z: &mut [f64]) {
        debug_assert_eq!(r.len(), self.nodes.len());
        z.copy_from_slice(r);
        self.substitute(z);
    }
}
