//! Commonly used items.
//!
//! ```rust
//! use lapsolve::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::algo::{akpw, compute_stretch, dijkstra_tree};
#[doc(no_inline)]
pub use crate::error::{Error, Result};
#[doc(no_inline)]
pub use crate::graph::{AdjacencyArray, AdjacencyMap, Edge, EdgeC, EdgeList, EdgeR};
#[doc(no_inline)]
pub use crate::linalg::{dot, mv, norm, Laplacian};
#[doc(no_inline)]
pub use crate::solve::{
    AugTreePcg, IdentitySolver, MinDegreeSolver, PcgSolver, Preconditioner, Summary, TreeSolver,
};
#[doc(no_inline)]
pub use crate::tree::{TreeNode, TreeR};
