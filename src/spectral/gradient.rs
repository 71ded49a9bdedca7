//! First-order difference operators: graph gradient and divergence.
//!
//! The gradient matrix `D` has one row per undirected edge. An edge
//! `(i, j, w)` with `i > j` contributes `sqrt(w)` at column `i` and
//! `-sqrt(w)` at column `j`, so `grad(f) = D f` lives on edges and the
//! adjoint `div(s) = D^T s` maps back to nodes. With this scaling
//! `D^T D = L` for the combinatorial Laplacian, which the tests pin down.
//!
//! Only combinatorial-Laplacian graphs are supported; the normalized form
//! would need degree rescaling of the incidence rows and is rejected
//! explicitly.

use crate::error::GraphSpectraError;
use crate::graph::{CsrMatrix, Graph, LaplacianKind};

/// Lower-triangular edge enumeration `(i, j, w)` with `i > j`, deterministic.
fn edges(graph: &Graph) -> Vec<(usize, usize, f64)> {
    let w = graph.weights();
    let mut out = Vec::new();
    for r in 0..w.n_rows() {
        let (cols, vals) = w.row(r);
        for (c, v) in cols.iter().zip(vals) {
            if *c < r && *v != 0.0 {
                out.push((r, *c, *v));
            }
        }
    }
    out
}

/// Number of undirected edges (self-loops excluded).
pub fn edge_count(graph: &Graph) -> usize {
    edges(graph).len()
}

/// The `Ne x N` gradient (incidence) matrix of the graph.
pub fn gradient_matrix(graph: &Graph) -> Result<CsrMatrix, GraphSpectraError> {
    if graph.laplacian_kind() != LaplacianKind::Combinatorial {
        return Err(GraphSpectraError::NotSupported(
            "gradient operator is only defined for the combinatorial Laplacian",
        ));
    }
    let edges = edges(graph);
    let mut triplets = Vec::with_capacity(2 * edges.len());
    for (e, (i, j, w)) in edges.iter().enumerate() {
        let sw = w.sqrt();
        triplets.push((e, *i, sw));
        triplets.push((e, *j, -sw));
    }
    Ok(CsrMatrix::from_triplets(edges.len(), graph.n(), &triplets))
}

/// Graph gradient: edge-domain differences `D f` of a node signal.
pub fn grad(graph: &Graph, f: &[f64]) -> Result<Vec<f64>, GraphSpectraError> {
    if f.len() != graph.n() {
        return Err(GraphSpectraError::NodeCountMismatch {
            expected: graph.n(),
            got: f.len(),
        });
    }
    Ok(gradient_matrix(graph)?.mul_vec(f))
}

/// Graph divergence: the adjoint `D^T s`, mapping an edge signal to nodes.
pub fn div(graph: &Graph, s: &[f64]) -> Result<Vec<f64>, GraphSpectraError> {
    let d = gradient_matrix(graph)?;
    if s.len() != d.n_rows() {
        return Err(GraphSpectraError::EdgeCountMismatch {
            expected: d.n_rows(),
            got: s.len(),
        });
    }
    Ok(d.transpose().mul_vec(s))
}
