//! Spectral filters: closed-form kernels, filter banks, and the Chebyshev
//! approximation engine.
//!
//! A spectral filter is a scalar function over the Laplacian's eigenvalue
//! range `[0, lmax]`. Kernels are shared behind an `Arc` so a bank can be
//! cloned into a filter cheaply and reused across many evaluate/filter
//! calls.

pub mod chebyshev;
pub mod kernels;

use std::sync::Arc;

pub use chebyshev::{ChebyMethod, ChebyshevFilter, FilterResponse};

/// A continuous spectral kernel `ℝ → ℝ`.
pub type Kernel = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// An ordered bank of spectral kernels evaluated and approximated together.
#[derive(Clone)]
pub struct FilterBank {
    kernels: Vec<Kernel>,
}

impl FilterBank {
    pub fn new(kernels: Vec<Kernel>) -> Self {
        Self { kernels }
    }

    /// Single-kernel bank from a plain closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            kernels: vec![Arc::new(f)],
        }
    }

    /// Number of kernels in the bank.
    #[inline]
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    #[inline]
    pub fn kernel(&self, i: usize) -> &Kernel {
        &self.kernels[i]
    }

    /// Exact kernel responses at `x`, row-major `(len, x.len())`.
    ///
    /// This is the reference the Chebyshev approximation converges to; the
    /// round-trip tests compare against it.
    pub fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len() * x.len());
        for g in &self.kernels {
            out.extend(x.iter().map(|&v| g(v)));
        }
        out
    }
}

impl std::fmt::Debug for FilterBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterBank")
            .field("kernels", &self.kernels.len())
            .finish()
    }
}
