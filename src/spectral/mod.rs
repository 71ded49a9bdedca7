//! Spectral-domain operators: graph Fourier transforms against a supplied
//! eigenbasis, and first-order difference operators (gradient/divergence).

pub mod fourier;
pub mod gradient;

pub use fourier::{FourierBasis, gft, igft};
pub use gradient::{div, grad, gradient_matrix};
