//! Ordinary least squares solver.
//!
//! Solves
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! for a tall design matrix `x` (more rows than columns). The regressor only
//! ever needs two columns (intercept and year), but the solver is generic over
//! the column count.
//!
//! We use SVD rather than QR: nalgebra's `QR::solve` expects a square system,
//! while the SVD solve handles the rectangular case directly and degrades
//! gracefully on rank-deficient input.

use nalgebra::{DMatrix, DVector};

/// Singular value cutoffs tried in order, strictest first.
const SVD_TOLERANCES: [f64; 3] = [1e-10, 1e-8, 1e-6];

/// Solve a least squares problem using SVD.
///
/// Returns `None` when no tolerance yields a finite solution.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() != y.len() || x.nrows() < x.ncols() {
        return None;
    }

    let svd = x.clone().svd(true, true);
    SVD_TOLERANCES.iter().find_map(|&tol| {
        svd.solve(y, tol)
            .ok()
            .filter(|beta| beta.iter().all(|v| v.is_finite()))
    })
}

/// Numerical rank of `x` at the strictest tolerance.
pub fn rank(x: &DMatrix<f64>) -> usize {
    x.clone().svd(false, false).rank(SVD_TOLERANCES[0])
}
