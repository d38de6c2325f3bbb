use crate::error::{Error, Result};
use crate::linalg::{dot, norm, Laplacian};
use crate::solve::{Preconditioner, Summary};

/// Preconditioned conjugate gradient against a [`Laplacian`] operator.
///
/// The operator must be symmetric positive semidefinite; for a connected
/// Laplacian the kernel is the all-ones vector and the right-hand side must
/// be balanced (entries summing to zero). The solver does not project onto
/// the balanced subspace.
///
/// Stops when `‖r‖ / ‖b‖` drops to the tolerance (default `1e-6`) or the
/// iteration cap (default 200) is reached.
///
/// # Example
/// ```rust
/// use lapsolve::generators::grid2;
/// use lapsolve::{IdentitySolver, PcgSolver};
///
/// let es = grid2(3, 3);
/// let mut b = vec![0.0; 9];
/// b[0] = 1.0;
/// b[8] = -1.0;
/// let mut x = vec![0.0; 9];
///
/// let summary = PcgSolver::new(&es, &IdentitySolver)
///     .solve(&b, &mut x)
///     .unwrap();
/// assert!(summary.residual <= 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct PcgSolver<'a, A, M> {
    a: &'a A,
    m: &'a M,
    tolerance: f64,
    max_iterations: usize,
}

impl<'a, A, M> PcgSolver<'a, A, M>
where
    A: Laplacian,
    M: Preconditioner,
{
    /// Pair the operator with a preconditioner, using the default tolerance
    /// and iteration cap.
    pub fn new(a: &'a A, m: &'a M) -> Self {
        PcgSolver {
            a,
            m,
            tolerance: 1e-6,
            max_iterations: 200,
        }
    }

    /// Set the relative residual at which iteration stops.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run PCG on `A x = b`, starting from the caller's `x`.
    ///
    /// # Errors
    /// * [`Error::DimensionMismatch`] if the buffers do not match the
    ///   operator.
    /// * [`Error::NonConvergent`] when the cap is reached, carrying the last
    ///   relative residual.
    /// * [`Error::Breakdown`] if `p·q ≤ 0` is observed, which indicates a
    ///   non-PSD operator or numerical collapse.
    pub fn solve(&self, b: &[f64], x: &mut [f64]) -> Result<Summary> {
        let n = self.a.node_count();
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

        let norm_b = norm(b);
        if norm_b == 0.0 {
            x.fill(0.0);
            return Ok(Summary {
                iterations: 0,
                residual: 0.0,
            });
        }

        // r = b - A x
        let mut r = b.to_vec();
        self.a.mul_add(-1.0, x, 1.0, &mut r);
        let mut z = vec![0.0; n];
        self.m.apply(&r, &mut z);
        let mut p = z.clone();
        let mut q = vec![0.0; n];
        let mut rho = dot(&r, &z);
        let mut residual = norm(&r) / norm_b;

        for iterations in 0..self.max_iterations {
            if residual <= self.tolerance {
                return Ok(Summary {
                    iterations,
                    residual,
                });
            }

            self.a.mul_add(1.0, &p, 0.0, &mut q);
            let pq = dot(&p, &q);
            if pq <= 0.0 {
                return Err(Error::Breakdown { residual });
            }
            let alpha = rho / pq;
            for i in 0..n {
                x[i] += alpha * p[i];
                r[i] -= alpha * q[i];
            }

            self.m.apply(&r, &mut z);
            let rho_next = dot(&r, &z);
            let beta = rho_next / rho;
            rho = rho_next;
            for i in 0..n {
                p[i] = z[i] + beta * p[i];
            }
            residual = norm(&r) / norm_b;
        }

        if residual <= self.tolerance {
            return Ok(Summary {
                iterations: self.max_iterations,
                residual,
            });
        }
        Err(Error::NonConvergent {
            iterations: self.max_iterations,
            residual,
        })
    }
}
