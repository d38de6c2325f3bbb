use rand::Rng;

use crate::graph::{AdjacencyMap, EdgeList, EdgeR};
use crate::tree::TreeR;

/// Select off-tree edges by independent Bernoulli draws, edge `i` kept with
/// probability `min(1, multiplier·k·sᵢ/Σs)`.
///
/// With all probabilities below 1 the expected number of kept edges is
/// `multiplier·k`. Draws happen in edge-index order, one uniform deviate per
/// edge, so a fixed `rng` seed fixes the selection.
///
/// # Arguments
/// * `stretches`: per-edge stretches, parallel to the off-tree edge list.
/// * `k`: target preconditioner density parameter.
/// * `multiplier`: the sampling constant (5 in the classical setting).
///
/// # Returns
/// * `Vec<usize>`: indices of the selected edges, ascending.
pub fn sample_off_tree<R: Rng + ?Sized>(
    stretches: &[f64],
    k: usize,
    multiplier: f64,
    rng: &mut R,
) -> Vec<usize> {
    let total: f64 = stretches.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let weight = multiplier * k as f64 / total;
    stretches
        .iter()
        .enumerate()
        .filter(|&(_, s)| rng.gen::<f64>() < (weight * s).min(1.0))
        .map(|(i, _)| i)
        .collect()
}

/// Assemble the augmented tree: every tree edge plus the selected off-tree
/// edges, as a conductance adjacency ready for elimination.
pub fn augment_tree(tree: &TreeR, off_tree: &EdgeList<EdgeR>, selected: &[usize]) -> AdjacencyMap {
    let mut aug = AdjacencyMap::from_tree(tree);
    for &i in selected {
        aug.add_edge_r(&off_tree.edges[i]);
    }
    aug
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn certain_edges_always_kept() {
        // one dominant stretch with multiplier·k ≥ 1 forces p = 1
        let stretches = [1000.0, 1e-12];
        let mut rng = StdRng::seed_from_u64(3);
        let picks = sample_off_tree(&stretches, 1, 5.0, &mut rng);
        assert!(picks.contains(&0));
    }

    #[test]
    fn zero_stretch_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample_off_tree(&[], 4, 5.0, &mut rng).is_empty());
        assert!(sample_off_tree(&[0.0, 0.0], 4, 5.0, &mut rng).is_empty());
    }

    #[test]
    fn augmentation_adds_selected_edges() {
        let mut t = TreeR::new(3);
        t.set_parent(1, 0, 1.0);
        t.set_parent(2, 1, 1.0);
        let mut off = EdgeList::<EdgeR>::with_vertices(3);
        off.add_edge(0, 2, 2.0);
        let aug = augment_tree(&t, &off, &[0]);
        assert_eq!(aug.degree(0), 2);
        assert_eq!(aug.degree(2), 2);
    }
}
