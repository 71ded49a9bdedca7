//! The three evaluation algorithms and the two filtering algorithms must
//! agree with each other up to rounding for well-conditioned orders.

use graph_spectra::prelude::*;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn ring(n: usize) -> Graph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, 1.0)).collect();
    let g = Graph::from_edges(n, &edges, LaplacianKind::Combinatorial).unwrap();
    g.set_lmax(4.0).unwrap();
    g
}

#[test]
fn evaluate_methods_agree_for_random_coefficients() {
    let g = ring(4);
    let mut rng = SmallRng::seed_from_u64(7);
    for order in [0usize, 1, 2, 5, 17, 50] {
        let coeffs: Vec<f64> = (0..=order).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let filt =
            ChebyshevFilter::from_coefficients(&g, CoefficientTensor::from_vec(coeffs).unwrap())
                .unwrap();
        let xs: Vec<f64> = (0..=40).map(|i| 0.1 * i as f64).collect();
        let direct = filt.evaluate(&xs, ChebyMethod::Direct).unwrap();
        let rec = filt.evaluate(&xs, ChebyMethod::Recursive).unwrap();
        let clen = filt.evaluate(&xs, ChebyMethod::Clenshaw).unwrap();
        for p in 0..xs.len() {
            let (d, r, c) = (direct.at(0, 0, p), rec.at(0, 0, p), clen.at(0, 0, p));
            let scale = d.abs().max(1.0);
            assert!(
                (d - r).abs() < 1e-9 * scale,
                "order {order}: direct {d} vs recursive {r} at x={}",
                xs[p]
            );
            assert!(
                (r - c).abs() < 1e-9 * scale,
                "order {order}: recursive {r} vs clenshaw {c} at x={}",
                xs[p]
            );
        }
    }
}

#[test]
fn filter_variants_agree_on_random_signals() {
    let g = ring(12);
    let mut rng = SmallRng::seed_from_u64(99);
    for order in [0usize, 1, 2, 3, 10, 25] {
        let coeffs: Vec<f64> = (0..=order).map(|_| rng.gen_range(-0.5..0.5)).collect();
        let filt =
            ChebyshevFilter::from_coefficients(&g, CoefficientTensor::from_vec(coeffs).unwrap())
                .unwrap();
        let data: Vec<f64> = (0..2 * 12).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let s = SignalBatch::try_new(2, 1, 12, data).unwrap();
        let a = filt.filter(&g, &s, ChebyMethod::Recursive).unwrap();
        let b = filt.filter(&g, &s, ChebyMethod::Clenshaw).unwrap();
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!(
                (x - y).abs() < 1e-9 * x.abs().max(1.0),
                "order {order}: recursive {x} vs clenshaw {y}"
            );
        }
    }
}

#[test]
fn unknown_method_name_is_invalid_argument() {
    assert!(matches!(
        "bogus".parse::<ChebyMethod>(),
        Err(GraphSpectraError::UnknownMethod(_))
    ));
}

proptest! {
    /// Recursive and Clenshaw evaluation agree for arbitrary short
    /// coefficient vectors anywhere inside the rescaled domain.
    #[test]
    fn recursive_clenshaw_equivalence(
        coeffs in proptest::collection::vec(-1.0f64..1.0, 1..20),
        x in 0.0f64..4.0,
    ) {
        let g = ring(4);
        let filt =
            ChebyshevFilter::from_coefficients(&g, CoefficientTensor::from_vec(coeffs).unwrap())
                .unwrap();
        let r = filt.evaluate(&[x], ChebyMethod::Recursive).unwrap().at(0, 0, 0);
        let c = filt.evaluate(&[x], ChebyMethod::Clenshaw).unwrap().at(0, 0, 0);
        prop_assert!((r - c).abs() < 1e-9 * r.abs().max(1.0));
    }
}
