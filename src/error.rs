//! Error types shared across builders, factorizations and solvers.

use core::fmt;

/// The error type for graph construction, tree building, factorization and
/// the iterative solvers.
///
/// Every failure is fatal to the call that produced it; there is no internal
/// recovery, and diagnostics are carried in the variants rather than written
/// to stderr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// An edge references a vertex outside `0..n`, joins a vertex to itself,
    /// or carries a non-positive weight.
    MalformedEdge {
        /// Tail of the offending edge.
        u: usize,
        /// Head of the offending edge.
        v: usize,
        /// The weight it carried.
        weight: f64,
    },
    /// A spanning-tree builder requires its input to connect all vertices.
    GraphDisconnected,
    /// Elimination ran out of usable pivots before the system was reduced to
    /// a single vertex. Only malformed (disconnected) input can cause this.
    SingularSystem {
        /// The vertex whose pivot vanished.
        vertex: usize,
    },
    /// The iteration cap was reached before the residual dropped below
    /// tolerance.
    NonConvergent {
        /// Iterations performed.
        iterations: usize,
        /// Relative residual at the last iteration.
        residual: f64,
    },
    /// `p·q <= 0` was observed inside conjugate gradient, which cannot happen
    /// for a positive semidefinite operator.
    Breakdown {
        /// Relative residual when the breakdown was detected.
        residual: f64,
    },
    /// Vector or matrix dimensions disagree.
    DimensionMismatch {
        /// The dimension the operation required.
        expected: usize,
        /// The dimension it was given.
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::MalformedEdge { u, v, weight } => {
                write!(f, "malformed edge ({u}, {v}) with weight {weight}")
            }
            Error::GraphDisconnected => f.write_str("graph is not connected"),
            Error::SingularSystem { vertex } => {
                write!(f, "singular system: no pivot left at vertex {vertex}")
            }
            Error::NonConvergent {
                iterations,
                residual,
            } => {
                write!(
                    f,
                    "no convergence after {iterations} iterations (relative residual {residual:e})"
                )
            }
            Error::Breakdown { residual } => {
                write!(
                    f,
                    "conjugate gradient breakdown (relative residual {residual:e})"
                )
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` with [`enum@Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;
