use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use graph_spectra::prelude::*;

// Synthetic Erdos-Renyi graph with uniform weights
fn random_graph(n: usize, p: f64, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.r#gen::<f64>() < p {
                edges.push((u, v, 1.0));
            }
        }
    }
    // chain keeps the graph connected regardless of p
    for u in 0..n - 1 {
        edges.push((u, u + 1, 1.0));
    }
    Graph::from_edges(n, &edges, LaplacianKind::Combinatorial).unwrap()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("cheby_filter");
    for &n in &[200usize, 1000] {
        let g = random_graph(n, 8.0 / n as f64, 42);
        g.estimate_lmax();
        let filt = ChebyshevFilter::from_kernels(
            &g,
            FilterBank::new(vec![kernels::heat(1.0)]),
            30,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let data: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let s = SignalBatch::from_node_signal(&data);

        for method in [ChebyMethod::Recursive, ChebyMethod::Clenshaw] {
            group.bench_with_input(
                BenchmarkId::new(method.name(), n),
                &(&g, &filt, &s),
                |b, (g, filt, s)| b.iter(|| filt.filter(g, s, method).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let g = random_graph(100, 0.1, 3);
    g.estimate_lmax();
    let filt =
        ChebyshevFilter::from_kernels(&g, FilterBank::new(vec![kernels::heat(1.0)]), 50)
            .unwrap();
    let xs: Vec<f64> = (0..1000).map(|i| i as f64 * 0.001 * filt.lmax()).collect();

    let mut group = c.benchmark_group("cheby_evaluate");
    for method in [ChebyMethod::Direct, ChebyMethod::Recursive, ChebyMethod::Clenshaw] {
        group.bench_function(method.name(), |b| {
            b.iter(|| filt.evaluate(&xs, method).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter, bench_evaluate);
criterion_main!(benches);
