//! Laplacian assembly and cheap spectral-bound estimation.
//!
//! Two Laplacian forms are supported:
//! - combinatorial: `L = D - W`;
//! - normalized: `L = I - D^{-1/2} W D^{-1/2}`, where isolated nodes keep a
//!   zero row (their degree term is dropped rather than divided by zero).
//!
//! The spectral upper bound uses the Gershgorin circle theorem:
//! `lmax <= max_i (L_ii + sum_{j != i} |L_ij|)`. For a combinatorial
//! Laplacian this evaluates to at most twice the maximum degree, and for the
//! normalized form to at most 2. The bound is O(nnz), always valid, and
//! loose by at most a factor near 2 — acceptable for rescaling the Chebyshev
//! domain, where an overestimate only widens the approximation interval.

use super::csr::CsrMatrix;

/// Which Laplacian form a [`Graph`](super::Graph) exposes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LaplacianKind {
    /// Degree-minus-adjacency form `D - W`.
    #[default]
    Combinatorial,
    /// Symmetric degree-normalized form `I - D^{-1/2} W D^{-1/2}`.
    Normalized,
}

/// Weighted degree of every node (row sums of the adjacency).
pub(crate) fn degrees(weights: &CsrMatrix) -> Vec<f64> {
    (0..weights.n_rows())
        .map(|r| weights.row(r).1.iter().sum())
        .collect()
}

/// Assemble the Laplacian of `kind` from a validated symmetric adjacency.
pub(crate) fn build_laplacian(weights: &CsrMatrix, kind: LaplacianKind) -> CsrMatrix {
    let n = weights.n_rows();
    let deg = degrees(weights);
    let mut triplets = Vec::with_capacity(weights.nnz() + n);
    match kind {
        LaplacianKind::Combinatorial => {
            for r in 0..n {
                triplets.push((r, r, deg[r]));
                let (cols, vals) = weights.row(r);
                for (c, w) in cols.iter().zip(vals) {
                    triplets.push((r, *c, -w));
                }
            }
        }
        LaplacianKind::Normalized => {
            let inv_sqrt: Vec<f64> = deg
                .iter()
                .map(|&d| if d > 0.0 { d.sqrt().recip() } else { 0.0 })
                .collect();
            for r in 0..n {
                if deg[r] > 0.0 {
                    triplets.push((r, r, 1.0));
                }
                let (cols, vals) = weights.row(r);
                for (c, w) in cols.iter().zip(vals) {
                    triplets.push((r, *c, -inv_sqrt[r] * w * inv_sqrt[*c]));
                }
            }
        }
    }
    CsrMatrix::from_triplets(n, n, &triplets)
}

/// Gershgorin upper bound on the largest eigenvalue of a square matrix.
pub fn gershgorin_bound(l: &CsrMatrix) -> f64 {
    let mut bound: f64 = 0.0;
    for r in 0..l.n_rows() {
        let (cols, vals) = l.row(r);
        let mut radius = 0.0;
        let mut center = 0.0;
        for (c, v) in cols.iter().zip(vals) {
            if *c == r {
                center = *v;
            } else {
                radius += v.abs();
            }
        }
        bound = bound.max(center + radius);
    }
    bound
}
