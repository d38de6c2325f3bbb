use rand::Rng;

use crate::algo::{akpw, augment_tree, compute_stretch, dijkstra_tree, sample_off_tree};
use crate::error::Result;
use crate::graph::{AdjacencyArray, EdgeC, EdgeList, EdgeR};
use crate::solve::{MinDegreeSolver, PcgSolver, Summary};

/// The augmented-tree preconditioned solver for `L x = b`.
///
/// Pipeline: AKPW low-stretch spanning tree, rooted by a shortest-path pass;
/// stretches of the off-tree edges; stretch-weighted sampling of roughly
/// `multiplier·k` of them; minimum-degree factorization of the sampled
/// augmented tree; PCG on the conductance form of the input with that factor
/// as preconditioner.
///
/// `k` trades preconditioner density against iteration count. All random
/// draws (AKPW radii, sampling) come from the caller's RNG in a fixed order,
/// so a fixed seed fixes the run.
///
/// # Example
/// ```rust
/// use lapsolve::generators::{balanced_demand, grid2};
/// use lapsolve::AugTreePcg;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let es = grid2(4, 4);
/// let mut rng = StdRng::seed_from_u64(42);
/// let b = balanced_demand(16, -5.0, 5.0, &mut rng);
/// let mut x = vec![0.0; 16];
///
/// let summary = AugTreePcg::new(4)
///     .solve(&es, &b, &mut x, &mut rng)
///     .unwrap();
/// assert!(summary.residual <= 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct AugTreePcg {
    k: usize,
    multiplier: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl AugTreePcg {
    /// Configure a pipeline with preconditioner density parameter `k`,
    /// sampling multiplier 5, tolerance `1e-6` and a 200 iteration cap.
    pub fn new(k: usize) -> Self {
        AugTreePcg {
            k,
            multiplier: 5.0,
            tolerance: 1e-6,
            max_iterations: 200,
        }
    }

    /// Set the sampling constant scaling the expected number of off-tree
    /// edges added to the tree.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the relative residual at which PCG stops.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the PCG iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Build the minimum-degree factor of a freshly sampled augmented tree.
    ///
    /// Exposed separately so one factorization can precondition several
    /// right-hand sides.
    pub fn preconditioner<R: Rng + ?Sized>(
        &self,
        es: &EdgeList<EdgeR>,
        rng: &mut R,
    ) -> Result<MinDegreeSolver> {
        let tree_es = akpw(es, rng)?;
        let tree = dijkstra_tree(&AdjacencyArray::new(&tree_es), es.n / 2)?;

        let mut off_tree = EdgeList::with_vertices(es.n);
        for e in &es.edges {
            if !tree.is_tree_edge(e.u, e.v) {
                off_tree.push(*e);
            }
        }

        let mut stretches = vec![0.0; off_tree.len()];
        compute_stretch(&tree, &off_tree, &mut stretches)?;
        let selected = sample_off_tree(&stretches, self.k, self.multiplier, rng);
        MinDegreeSolver::new(augment_tree(&tree, &off_tree, &selected))
    }

    /// Solve `L x = b` for the Laplacian of `es` and balanced `b`, starting
    /// from the caller's `x`.
    ///
    /// # Errors
    /// Construction errors ([`crate::Error::MalformedEdge`],
    /// [`crate::Error::GraphDisconnected`],
    /// [`crate::Error::SingularSystem`]) and the PCG outcomes
    /// ([`crate::Error::NonConvergent`], [`crate::Error::Breakdown`],
    /// [`crate::Error::DimensionMismatch`]).
    pub fn solve<R: Rng + ?Sized>(
        &self,
        es: &EdgeList<EdgeR>,
        b: &[f64],
        x: &mut [f64],
        rng: &mut R,
    ) -> Result<Summary> {
        let preconditioner = self.preconditioner(es, rng)?;
        let conductances: EdgeList<EdgeC> = es.into();
        PcgSolver::new(&conductances, &preconditioner)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
            .solve(b, x)
    }
}
