use hashbrown::HashMap;
use rand::Rng;

use crate::algo::cluster::ClusterSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeList, EdgeR};

/// Build a low-stretch spanning tree with the Alon–Karp–Peleg–West
/// hierarchical clustering scheme.
///
/// Edge weights are normalized so the lightest is 1, then vertex partitions
/// are refined level by level: every active cluster draws an exponentially
/// distributed radius and absorbs neighboring clusters whose connecting edge
/// falls within it, the absorbing edges joining the tree. Clusters contract
/// and the radius scale grows by the growth factor `ρ ≈ m^(1/log n)`, so
/// progressively heavier edges become absorbable. The total stretch of the
/// off-tree edges is **O(m·polylog |V|)** in expectation.
///
/// A cluster is identified by its smallest vertex id. Radii are drawn per
/// level in ascending cluster-leader order and boundary edges are scanned in
/// a sorted order, so a fixed `rng` seed fixes the tree and ties resolve
/// toward the smaller cluster.
///
/// # Arguments
/// * `es`: a connected graph in resistance form.
/// * `rng`: source of the radius draws.
///
/// # Returns
/// * `EdgeList<EdgeR>`: exactly `n - 1` edges of `es` forming a spanning
///   tree.
///
/// # Errors
/// [`Error::MalformedEdge`] for out-of-range or non-positive edges,
/// [`Error::GraphDisconnected`] when the input does not span its vertices.
pub fn akpw<R: Rng + ?Sized>(es: &EdgeList<EdgeR>, rng: &mut R) -> Result<EdgeList<EdgeR>> {
    es.validate()?;
    let n = es.n;
    let mut tree = EdgeList::with_vertices(n);
    if n <= 1 {
        return Ok(tree);
    }
    if es.edges.is_empty() {
        return Err(Error::GraphDisconnected);
    }

    let m = es.edges.len();
    let min_resistance = es
        .edges
        .iter()
        .map(|e| e.resistance)
        .fold(f64::INFINITY, f64::min);
    let rho = growth_factor(n, m);

    // (normalized weight, edge index); shrinks as clusters swallow edges
    let mut boundary: Vec<(f64, usize)> = es
        .edges
        .iter()
        .enumerate()
        .map(|(i, e)| (e.resistance / min_resistance, i))
        .collect();

    let mut partition = ClusterSet::singletons(n);
    let mut scale = rho;
    let mut radius: HashMap<usize, f64> = HashMap::new();

    while partition.clusters() > 1 {
        // contract parallel boundary edges: per cluster pair keep the
        // lightest original edge as the absorption candidate
        let mut lightest: HashMap<(usize, usize), (f64, usize)> =
            HashMap::with_capacity(boundary.len());
        for &(w, i) in &boundary {
            let (u, v) = es.edges[i].endpoints();
            let a = partition.leader(u);
            let b = partition.leader(v);
            if a == b {
                continue;
            }
            let key = if a < b { (a, b) } else { (b, a) };
            let candidate = (w, i);
            lightest
                .entry(key)
                .and_modify(|best| {
                    if candidate < *best {
                        *best = candidate;
                    }
                })
                .or_insert(candidate);
        }
        if lightest.is_empty() {
            return Err(Error::GraphDisconnected);
        }

        let mut between: Vec<((usize, usize), (f64, usize))> = lightest.into_iter().collect();
        between.sort_unstable_by(|x, y| x.0.cmp(&y.0));

        // one radius per active cluster, drawn in ascending leader order so
        // the draw sequence is a function of the seed alone
        radius.clear();
        let mut leaders: Vec<usize> = between.iter().flat_map(|&((a, b), _)| [a, b]).collect();
        leaders.sort_unstable();
        leaders.dedup();
        for &c in &leaders {
            radius.insert(c, exponential(rng) * scale);
        }

        for &((a, b), (w, i)) in &between {
            if partition.same(a, b) {
                continue;
            }
            if w <= radius[&a] || w <= radius[&b] {
                partition.merge(a, b);
                tree.push(es.edges[i]);
            }
        }

        boundary.retain(|&(_, i)| {
            let (u, v) = es.edges[i].endpoints();
            partition.leader(u) != partition.leader(v)
        });
        scale *= rho;
    }

    debug_assert_eq!(tree.len(), n - 1);
    Ok(tree)
}

/// `ρ = max(2, m^(1/log₂ n))`.
fn growth_factor(n: usize, m: usize) -> f64 {
    let levels = (n as f64).log2().max(1.0);
    (m as f64).powf(1.0 / levels).max(2.0)
}

/// Standard exponential deviate by inversion; strictly positive.
fn exponential<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    -(1.0 - rng.gen::<f64>()).ln()
}
