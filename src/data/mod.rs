//! Dense data containers for node-domain signals and Chebyshev coefficient
//! tensors.

pub mod coefficients;
pub mod signal;

pub use coefficients::CoefficientTensor;
pub use signal::SignalBatch;
