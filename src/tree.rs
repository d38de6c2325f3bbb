//! Rooted spanning trees in parent-pointer form.

use fixedbitset::FixedBitSet;

use crate::error::{Error, Result};
use crate::graph::{AdjacencyArray, EdgeList, EdgeR};

/// One vertex of a rooted tree: the parent pointer plus the resistance of the
/// edge to the parent. The root points to itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeNode {
    pub parent: usize,
    pub resistance: f64,
}

/// A rooted tree over vertices `0..n`, stored as one [`TreeNode`] per vertex.
///
/// Invariant: following `parent` from any vertex reaches the root in at most
/// `n` steps; there are no cycles. The builders in this crate guarantee it;
/// [`TreeR::set_parent`] trusts the caller.
#[derive(Debug, Clone, Default)]
pub struct TreeR {
    nodes: Vec<TreeNode>,
    root: usize,
}

impl TreeR {
    /// Create a tree of `n` isolated vertices rooted at vertex 0; attach
    /// vertices with [`TreeR::set_parent`].
    pub fn new(n: usize) -> Self {
        TreeR::with_root(n, 0)
    }

    /// Create a tree of `n` isolated vertices with the given root.
    pub fn with_root(n: usize, root: usize) -> Self {
        let nodes = (0..n)
            .map(|v| TreeNode {
                parent: v,
                resistance: 0.0,
            })
            .collect();
        TreeR { nodes, root }
    }

    /// Build the rooted form of a spanning tree given as an edge list, by
    /// breadth-first search from `root`.
    ///
    /// # Errors
    /// [`Error::GraphDisconnected`] if the edges do not span all vertices.
    pub fn from_edge_list(es: &EdgeList<EdgeR>, root: usize) -> Result<Self> {
        let g = AdjacencyArray::new(es);
        let n = es.n;
        let mut tree = TreeR::with_root(n, root);
        let mut discovered = FixedBitSet::with_capacity(n);
        let mut queue = std::collections::VecDeque::new();
        discovered.insert(root);
        queue.push_back(root);
        let mut reached = 1;
        while let Some(v) = queue.pop_front() {
            for arc in g.neighbors(v) {
                if !discovered.contains(arc.head) {
                    discovered.insert(arc.head);
                    tree.nodes[arc.head] = TreeNode {
                        parent: v,
                        resistance: arc.resistance,
                    };
                    queue.push_back(arc.head);
                    reached += 1;
                }
            }
        }
        if reached != n {
            return Err(Error::GraphDisconnected);
        }
        Ok(tree)
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// The node record of `v`.
    pub fn node(&self, v: usize) -> TreeNode {
        self.nodes[v]
    }

    /// Attach `v` below `parent` with the given edge resistance.
    ///
    /// The caller is responsible for keeping the structure acyclic.
    pub fn set_parent(&mut self, v: usize, parent: usize, resistance: f64) {
        self.nodes[v] = TreeNode { parent, resistance };
    }

    /// Return `true` if `(u, v)` is a tree edge (either orientation).
    pub fn is_tree_edge(&self, u: usize, v: usize) -> bool {
        self.nodes[u].parent == v || self.nodes[v].parent == u
    }

    /// Enumerate the path from `v` to the root into `out`: `(vertex,
    /// cumulative resistance from v)` pairs, starting at `v` with 0 and
    /// ending at the root.
    ///
    /// Runs in **O(depth)** with no allocation beyond growing `out`.
    pub fn root_path(&self, v: usize, out: &mut Vec<(usize, f64)>) {
        out.clear();
        let mut cursor = v;
        let mut acc = 0.0;
        out.push((cursor, acc));
        while self.nodes[cursor].parent != cursor {
            acc += self.nodes[cursor].resistance;
            cursor = self.nodes[cursor].parent;
            out.push((cursor, acc));
        }
    }

    /// Depth of every vertex (root has depth 0), in **O(n)**.
    pub fn depths(&self) -> Vec<usize> {
        const UNKNOWN: usize = usize::MAX;
        let n = self.nodes.len();
        let mut depth = vec![UNKNOWN; n];
        let mut stack = Vec::new();
        for start in 0..n {
            let mut v = start;
            while depth[v] == UNKNOWN && self.nodes[v].parent != v {
                stack.push(v);
                v = self.nodes[v].parent;
            }
            let mut d = if depth[v] == UNKNOWN { 0 } else { depth[v] };
            depth[v] = d;
            while let Some(u) = stack.pop() {
                d += 1;
                depth[u] = d;
            }
        }
        depth
    }
}
