//! **lapsolve** is a solver library for Laplacian (SDD) linear systems.
//!
//! A system `L x = b` over a weighted undirected graph is solved in nearly
//! linear time by building a low-stretch spanning tree ([`akpw`]), sampling a
//! few off-tree edges in proportion to their stretch
//! ([`compute_stretch`](algo::compute_stretch),
//! [`sample_off_tree`](algo::sample_off_tree)), factoring the sampled
//! augmented tree with a minimum-degree elimination ([`MinDegreeSolver`]),
//! and driving preconditioned conjugate gradient ([`PcgSolver`]) with that
//! factor. [`AugTreePcg`] packages the whole pipeline; the pieces are also
//! exposed individually, along with exact direct solves on trees
//! ([`TreeSolver`]) and the graph primitives they share.
//!
//! Such systems arise in electrical flow, effective resistance, graph
//! partitioning and max-flow computations. Right-hand sides must be balanced
//! (entries summing to zero, the compatibility condition of a connected
//! Laplacian); randomized choices draw from a caller-owned seedable RNG in a
//! fixed order, so fixing the seed fixes the run.
//!
//! ```rust
//! use lapsolve::generators::{balanced_demand, grid2};
//! use lapsolve::AugTreePcg;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let es = grid2(8, 8);
//! let mut rng = StdRng::seed_from_u64(1);
//! let b = balanced_demand(64, -5.0, 5.0, &mut rng);
//! let mut x = vec![0.0; 64];
//!
//! let summary = AugTreePcg::new(8).solve(&es, &b, &mut x, &mut rng).unwrap();
//! assert!(summary.residual <= 1e-6);
//! ```

pub mod algo;
pub mod error;
pub mod generators;
pub mod graph;
pub mod io;
pub mod linalg;
pub mod matrix;
pub mod prelude;
pub mod solve;
pub mod tree;

pub use crate::algo::{akpw, compute_stretch, dijkstra_tree};
pub use crate::error::{Error, Result};
pub use crate::graph::{AdjacencyArray, AdjacencyMap, EdgeC, EdgeList, EdgeR};
pub use crate::linalg::{dot, mv, norm, Laplacian};
pub use crate::matrix::{MatrixElement, SparseMatrix};
pub use crate::solve::{
    AugTreePcg, IdentitySolver, MinDegreeSolver, PcgSolver, Preconditioner, Summary, TreeSolver,
};
pub use crate::tree::TreeR;
