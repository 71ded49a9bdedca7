//! Closed-form spectral kernels.
//!
//! Smooth low-pass kernels (heat, Gaussian) approximate well at modest
//! polynomial order; the rectangular ideal low-pass has a jump and converges
//! slowly, which makes it useful for exercising high-order behavior.

use std::sync::Arc;

use super::Kernel;

/// Heat (diffusion) kernel `exp(-tau * x)`.
pub fn heat(tau: f64) -> Kernel {
    Arc::new(move |x| (-tau * x).exp())
}

/// Gaussian bump `exp(-(x - mu)^2 / (2 sigma^2))`.
pub fn gaussian(mu: f64, sigma: f64) -> Kernel {
    Arc::new(move |x| {
        let d = (x - mu) / sigma;
        (-0.5 * d * d).exp()
    })
}

/// Ideal (rectangular) low-pass: 1 on `[0, cutoff]`, 0 above.
pub fn rectangular(cutoff: f64) -> Kernel {
    Arc::new(move |x| if x <= cutoff { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_decays_from_unity() {
        let g = heat(2.0);
        assert_eq!(g(0.0), 1.0);
        assert!(g(1.0) < g(0.5));
    }

    #[test]
    fn gaussian_peaks_at_mu() {
        let g = gaussian(1.0, 0.5);
        assert_eq!(g(1.0), 1.0);
        assert!(g(0.0) < 1.0 && g(2.0) < 1.0);
    }

    #[test]
    fn rectangular_is_an_indicator() {
        let g = rectangular(1.5);
        assert_eq!(g(1.5), 1.0);
        assert_eq!(g(1.6), 0.0);
    }
}
