//! # graph-spectra
//!
//! graph-spectra is a Rust library for graph signal processing: it builds
//! graph Laplacians, transforms signals between the node and spectral
//! domains against a supplied eigenbasis, and — its core — applies spectral
//! filters through Chebyshev polynomial approximation with no
//! eigendecomposition, in O(order × edges) per signal.
//!
//! ## Features
//! - Validated weighted graphs with combinatorial or normalized Laplacians
//! - Single-assignment spectral caches (`lmax`, Laplacian, Fourier basis)
//!   with explicit `has_*` queries
//! - Chebyshev coefficient computation by Chebyshev-Gauss quadrature
//! - Three evaluation algorithms (direct cosine-sum, three-term recurrence,
//!   Clenshaw) with identical results up to rounding
//! - Eigendecomposition-free filtering of batched multi-channel signals
//! - Graph gradient/divergence operators and standard spectral kernels
//!
//! ## Determinism
//!
//! All computation is pure and deterministic. The optional `rayon` feature
//! parallelizes diffusion across independent signal rows only; the order/k
//! recurrences stay sequential, so results are identical with the feature
//! on or off. Unit tests fix RNG seeds explicitly.
//!
//! ## Usage
//! ```rust
//! use graph_spectra::prelude::*;
//!
//! let g = Graph::from_edges(
//!     4,
//!     &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
//!     LaplacianKind::Combinatorial,
//! )?;
//! g.set_lmax(4.0)?;
//!
//! let bank = FilterBank::new(vec![kernels::heat(1.0)]);
//! let filt = ChebyshevFilter::from_kernels(&g, bank, 30)?;
//!
//! let s = SignalBatch::from_node_signal(&[1.0, 0.0, 0.0, 0.0]);
//! let out = filt.filter(&g, &s, ChebyMethod::Recursive)?;
//! assert_eq!((out.batch(), out.channels(), out.nodes()), (1, 1, 4));
//! # Ok::<(), graph_spectra::GraphSpectraError>(())
//! ```

// Re-export our major subsystems:
pub mod data;
pub mod error;
pub mod filters;
pub mod graph;
pub mod spectral;

pub use error::GraphSpectraError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::{CoefficientTensor, SignalBatch};
    pub use crate::error::GraphSpectraError;
    pub use crate::filters::kernels;
    pub use crate::filters::{ChebyMethod, ChebyshevFilter, FilterBank, FilterResponse};
    pub use crate::graph::{CsrMatrix, Graph, LaplacianKind, gershgorin_bound};
    pub use crate::spectral::fourier::{FourierBasis, gft, igft};
    pub use crate::spectral::gradient::{div, grad, gradient_matrix};
}
