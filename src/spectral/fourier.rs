//! Graph Fourier transforms against a supplied eigenbasis.
//!
//! The basis itself is produced by an external eigensolver: this crate never
//! performs an eigendecomposition. A [`FourierBasis`] holds the Laplacian's
//! eigenvalues (ascending) and the orthonormal eigenvector matrix `U`,
//! stored row-major with eigenvectors in columns. The forward transform is
//! `f_hat = U^T f`, the inverse `f = U f_hat`; both are O(N^2) dense
//! products per signal.

use crate::data::SignalBatch;
use crate::error::GraphSpectraError;
use crate::graph::Graph;

/// Supplied Laplacian eigenpairs for a graph of `n` nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierBasis {
    n: usize,
    /// Eigenvalues in ascending order.
    eigenvalues: Vec<f64>,
    /// Row-major `n x n` matrix; column `k` is the eigenvector of
    /// `eigenvalues[k]`.
    eigenvectors: Vec<f64>,
}

impl FourierBasis {
    /// Validate and wrap externally computed eigenpairs.
    pub fn try_new(
        eigenvalues: Vec<f64>,
        eigenvectors: Vec<f64>,
    ) -> Result<Self, GraphSpectraError> {
        let n = eigenvalues.len();
        if n == 0 {
            return Err(GraphSpectraError::BasisShapeMismatch {
                detail: "empty eigenvalue list".into(),
            });
        }
        if eigenvectors.len() != n * n {
            return Err(GraphSpectraError::BasisShapeMismatch {
                detail: format!(
                    "eigenvector buffer has {} entries, expected {n}x{n}",
                    eigenvectors.len()
                ),
            });
        }
        if eigenvalues.windows(2).any(|w| w[1] < w[0]) {
            return Err(GraphSpectraError::BasisShapeMismatch {
                detail: "eigenvalues must be in ascending order".into(),
            });
        }
        Ok(Self {
            n,
            eigenvalues,
            eigenvectors,
        })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Largest eigenvalue — the exact spectral upper bound.
    #[inline]
    pub fn lmax(&self) -> f64 {
        self.eigenvalues[self.n - 1]
    }

    /// Entry `U[row, col]`.
    #[inline]
    fn u(&self, row: usize, col: usize) -> f64 {
        self.eigenvectors[row * self.n + col]
    }

    /// Forward transform `f_hat = U^T f` for one node-domain signal.
    pub fn gft(&self, f: &[f64]) -> Result<Vec<f64>, GraphSpectraError> {
        if f.len() != self.n {
            return Err(GraphSpectraError::NodeCountMismatch {
                expected: self.n,
                got: f.len(),
            });
        }
        let mut out = vec![0.0; self.n];
        for (k, o) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (row, v) in f.iter().enumerate() {
                acc += self.u(row, k) * v;
            }
            *o = acc;
        }
        Ok(out)
    }

    /// Inverse transform `f = U f_hat` for one spectral-domain signal.
    pub fn igft(&self, f_hat: &[f64]) -> Result<Vec<f64>, GraphSpectraError> {
        if f_hat.len() != self.n {
            return Err(GraphSpectraError::NodeCountMismatch {
                expected: self.n,
                got: f_hat.len(),
            });
        }
        let mut out = vec![0.0; self.n];
        for (row, o) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, v) in f_hat.iter().enumerate() {
                acc += self.u(row, k) * v;
            }
            *o = acc;
        }
        Ok(out)
    }

    /// Forward transform applied to every `(batch, channel)` row.
    pub fn gft_batch(&self, s: &SignalBatch) -> Result<SignalBatch, GraphSpectraError> {
        self.transform_batch(s, true)
    }

    /// Inverse transform applied to every `(batch, channel)` row.
    pub fn igft_batch(&self, s: &SignalBatch) -> Result<SignalBatch, GraphSpectraError> {
        self.transform_batch(s, false)
    }

    fn transform_batch(
        &self,
        s: &SignalBatch,
        forward: bool,
    ) -> Result<SignalBatch, GraphSpectraError> {
        if s.nodes() != self.n {
            return Err(GraphSpectraError::NodeCountMismatch {
                expected: self.n,
                got: s.nodes(),
            });
        }
        let mut out = Vec::with_capacity(s.as_slice().len());
        for m in 0..s.batch() {
            for c in 0..s.channels() {
                let row = s.row(m, c);
                let t = if forward {
                    self.gft(row)?
                } else {
                    self.igft(row)?
                };
                out.extend_from_slice(&t);
            }
        }
        SignalBatch::try_new(s.batch(), s.channels(), self.n, out)
    }
}

/// Graph Fourier transform of `f` using the graph's attached basis.
pub fn gft(graph: &Graph, f: &[f64]) -> Result<Vec<f64>, GraphSpectraError> {
    graph.fourier_basis()?.gft(f)
}

/// Inverse graph Fourier transform of `f_hat` using the graph's attached basis.
pub fn igft(graph: &Graph, f_hat: &[f64]) -> Result<Vec<f64>, GraphSpectraError> {
    graph.fourier_basis()?.igft(f_hat)
}
