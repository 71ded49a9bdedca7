//! Graph structure: validated weighted adjacency plus lazily built spectral
//! caches.
//!
//! A [`Graph`] owns a symmetric, non-negative adjacency in CSR form and
//! exposes its Laplacian, spectral upper bound `lmax`, and (optionally) a
//! supplied Fourier basis through explicit single-assignment caches. All
//! cache state is `OnceCell`-guarded: concurrent first uses race benignly
//! and later reads see one frozen value. Presence is answered by explicit
//! `has_*` queries, never probed.

pub mod csr;
pub mod laplacian;

use once_cell::sync::OnceCell;

use crate::error::GraphSpectraError;
use crate::spectral::fourier::FourierBasis;
pub use csr::CsrMatrix;
pub use laplacian::{LaplacianKind, gershgorin_bound};

/// Weighted undirected graph with lazily computed spectral attributes.
#[derive(Debug)]
pub struct Graph {
    n: usize,
    weights: CsrMatrix,
    kind: LaplacianKind,
    laplacian: OnceCell<CsrMatrix>,
    lmax: OnceCell<f64>,
    fourier: OnceCell<FourierBasis>,
}

impl Graph {
    /// Build from a symmetric, non-negative weight matrix.
    ///
    /// Validation is O(nnz log nnz_row): every stored weight must be
    /// non-negative and mirrored exactly across the diagonal.
    pub fn from_weights(
        weights: CsrMatrix,
        kind: LaplacianKind,
    ) -> Result<Self, GraphSpectraError> {
        if weights.n_rows() != weights.n_cols() {
            return Err(GraphSpectraError::NonSquareWeights {
                rows: weights.n_rows(),
                cols: weights.n_cols(),
            });
        }
        let n = weights.n_rows();
        for r in 0..n {
            let (cols, vals) = weights.row(r);
            for (c, v) in cols.iter().zip(vals) {
                if *v < 0.0 {
                    return Err(GraphSpectraError::NegativeWeight {
                        row: r,
                        col: *c,
                        value: *v,
                    });
                }
                if (weights.get(*c, r) - v).abs() > 1e-12 * v.abs().max(1.0) {
                    return Err(GraphSpectraError::AsymmetricWeights { row: r, col: *c });
                }
            }
        }
        Ok(Self {
            n,
            weights,
            kind,
            laplacian: OnceCell::new(),
            lmax: OnceCell::new(),
            fourier: OnceCell::new(),
        })
    }

    /// Build from an undirected edge list; each `(i, j, w)` is mirrored.
    pub fn from_edges(
        n: usize,
        edges: &[(usize, usize, f64)],
        kind: LaplacianKind,
    ) -> Result<Self, GraphSpectraError> {
        let mut triplets = Vec::with_capacity(2 * edges.len());
        for &(i, j, w) in edges {
            if w < 0.0 {
                return Err(GraphSpectraError::NegativeWeight {
                    row: i,
                    col: j,
                    value: w,
                });
            }
            triplets.push((i, j, w));
            if i != j {
                triplets.push((j, i, w));
            }
        }
        Self::from_weights(CsrMatrix::from_triplets(n, n, &triplets), kind)
    }

    /// Number of nodes.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// The validated adjacency matrix.
    #[inline]
    pub fn weights(&self) -> &CsrMatrix {
        &self.weights
    }

    /// Which Laplacian form [`Graph::laplacian`] builds.
    #[inline]
    pub fn laplacian_kind(&self) -> LaplacianKind {
        self.kind
    }

    /// The graph Laplacian, assembled on first use and cached.
    pub fn laplacian(&self) -> &CsrMatrix {
        self.laplacian
            .get_or_init(|| laplacian::build_laplacian(&self.weights, self.kind))
    }

    /// Whether the Laplacian cache has been filled.
    #[inline]
    pub fn has_laplacian_cache(&self) -> bool {
        self.laplacian.get().is_some()
    }

    /// Cached spectral upper bound, if one has been supplied or estimated.
    #[inline]
    pub fn lmax(&self) -> Option<f64> {
        self.lmax.get().copied()
    }

    #[inline]
    pub fn has_lmax(&self) -> bool {
        self.lmax.get().is_some()
    }

    /// Supply an exact (or externally estimated) spectral upper bound.
    ///
    /// The cache is single-assignment: a second call with a different value
    /// is rejected rather than silently replacing what earlier computations
    /// already used.
    pub fn set_lmax(&self, lmax: f64) -> Result<(), GraphSpectraError> {
        if !(lmax > 0.0) {
            return Err(GraphSpectraError::NonPositiveLmax(lmax));
        }
        match self.lmax.set(lmax) {
            Ok(()) => Ok(()),
            Err(_) if self.lmax.get() == Some(&lmax) => Ok(()),
            Err(_) => Err(GraphSpectraError::NotSupported(
                "lmax is already set; spectral caches are single-assignment",
            )),
        }
    }

    /// Estimate `lmax` with the Gershgorin bound and cache it.
    ///
    /// Returns the effective value: a previously supplied bound wins over
    /// the estimate. The bound over-estimates by at most roughly 2x, which
    /// only widens the Chebyshev interval and costs accuracy, not
    /// correctness.
    pub fn estimate_lmax(&self) -> f64 {
        *self
            .lmax
            .get_or_init(|| gershgorin_bound(self.laplacian()).max(f64::MIN_POSITIVE))
    }

    /// Attach an externally computed Fourier basis (eigenpairs of `L`).
    ///
    /// Fills the `lmax` cache from the basis's largest eigenvalue when no
    /// bound is cached yet.
    pub fn set_fourier_basis(&self, basis: FourierBasis) -> Result<(), GraphSpectraError> {
        if basis.n() != self.n {
            return Err(GraphSpectraError::BasisShapeMismatch {
                detail: format!("basis covers {} node(s), graph has {}", basis.n(), self.n),
            });
        }
        let lmax = basis.lmax();
        if self.fourier.set(basis).is_err() {
            return Err(GraphSpectraError::NotSupported(
                "Fourier basis is already set; spectral caches are single-assignment",
            ));
        }
        if lmax > 0.0 {
            let _ = self.lmax.set(lmax);
        }
        Ok(())
    }

    /// The attached Fourier basis, if any.
    pub fn fourier_basis(&self) -> Result<&FourierBasis, GraphSpectraError> {
        self.fourier
            .get()
            .ok_or(GraphSpectraError::MissingFourierBasis)
    }

    #[inline]
    pub fn has_fourier_basis(&self) -> bool {
        self.fourier.get().is_some()
    }
}
