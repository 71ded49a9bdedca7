//! GraphSpectraError: Unified error type for graph-spectra public APIs
//!
//! This error type is used throughout the graph-spectra library to provide
//! robust, non-panicking error handling for all public APIs. Every shape and
//! argument check fires before any recurrence executes, so a failed call
//! performs no partial computation.

use thiserror::Error;

/// Unified error type for graph-spectra operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphSpectraError {
    /// Weight matrix is not square.
    #[error("weight matrix must be square, got {rows}x{cols}")]
    NonSquareWeights { rows: usize, cols: usize },
    /// Weight matrix is not symmetric.
    #[error("weight matrix must be symmetric: W[{row},{col}] != W[{col},{row}]")]
    AsymmetricWeights { row: usize, col: usize },
    /// A negative edge weight was supplied.
    #[error("edge weights must be non-negative, got {value} at ({row},{col})")]
    NegativeWeight { row: usize, col: usize, value: f64 },
    /// A non-positive spectral upper bound was supplied.
    #[error("lmax must be positive, got {0}")]
    NonPositiveLmax(f64),
    /// Unrecognized evaluation/filtering method name.
    #[error("unknown Chebyshev method `{0}` (expected `direct`, `recursive`, or `clenshaw`)")]
    UnknownMethod(String),
    /// Method is recognized but not applicable to the requested operation.
    #[error("method `{method}` is not available for {operation}")]
    MethodUnavailable {
        method: &'static str,
        operation: &'static str,
    },
    /// Signal channel count does not match the coefficient tensor's Fin.
    #[error("signal has {got} input channel(s) but the filter expects {expected}")]
    ChannelMismatch { expected: usize, got: usize },
    /// Signal node count does not match the graph.
    #[error("signal covers {got} node(s) but the graph has {expected}")]
    NodeCountMismatch { expected: usize, got: usize },
    /// Flat signal buffer length disagrees with the declared dimensions.
    #[error("signal buffer of length {len} does not match shape ({batch}, {channels}, {nodes})")]
    SignalShapeMismatch {
        len: usize,
        batch: usize,
        channels: usize,
        nodes: usize,
    },
    /// Coefficient buffer length disagrees with the declared tensor shape.
    #[error("coefficient buffer of length {len} does not match shape ({orders}, {fout}, {fin})")]
    CoefficientShapeMismatch {
        len: usize,
        orders: usize,
        fout: usize,
        fin: usize,
    },
    /// Quadrature was requested with zero nodes.
    #[error("Chebyshev quadrature needs at least one node")]
    EmptyQuadrature,
    /// A filter was constructed from a bank with no kernels.
    #[error("filter bank holds no kernels")]
    EmptyFilterBank,
    /// A Fourier transform was requested but the graph carries no basis.
    #[error("no Fourier basis attached; supply eigenpairs with set_fourier_basis()")]
    MissingFourierBasis,
    /// Supplied eigenpairs are inconsistent with the graph size.
    #[error("Fourier basis shape mismatch: {detail}")]
    BasisShapeMismatch { detail: String },
    /// Edge-domain signal length disagrees with the graph's edge count.
    #[error("edge signal has {got} value(s) but the graph has {expected} edge(s)")]
    EdgeCountMismatch { expected: usize, got: usize },
    /// Operation deliberately unsupported for this configuration.
    #[error("not supported: {0}")]
    NotSupported(&'static str),
}
