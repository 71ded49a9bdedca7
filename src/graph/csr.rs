//! Immutable CSR (Compressed Sparse Row) matrix used for adjacency,
//! Laplacian, and incidence operators.
//!
//! Cache-friendly structure with deterministic iteration order: every row's
//! column indices are sorted and duplicate triplets are accumulated at build
//! time. The matrix is frozen after construction; spectral rescaling and
//! transposition return new matrices. Intended for read-mostly matvec
//! workloads — the Chebyshev diffusion loop spends essentially all of its
//! time in [`CsrMatrix::mul_stacked`].

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Immutable sparse matrix in CSR form with `f64` values.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix {
    n_rows: usize,
    n_cols: usize,
    /// CSR offsets into `indices`/`values`, length `n_rows + 1`.
    offsets: Vec<usize>,
    /// Column indices, sorted within each row.
    indices: Vec<usize>,
    /// Nonzero values aligned with `indices`.
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Build from triplets `(row, col, value)`, enforcing deterministic order.
    ///
    /// Duplicate `(row, col)` entries are summed. Entries that accumulate to
    /// exactly zero are kept; callers that need a guaranteed diagonal rely on
    /// this (see [`CsrMatrix::rescale_spectrum`]).
    ///
    /// # Panics
    /// Panics if a triplet lies outside the declared shape.
    pub fn from_triplets(n_rows: usize, n_cols: usize, triplets: &[(usize, usize, f64)]) -> Self {
        // 1) row degree counts
        let mut deg = vec![0usize; n_rows];
        for &(r, c, _) in triplets {
            assert!(r < n_rows && c < n_cols, "triplet ({r},{c}) out of bounds");
            deg[r] += 1;
        }

        // prefix sums
        let mut offsets = vec![0usize; n_rows + 1];
        for i in 0..n_rows {
            offsets[i + 1] = offsets[i] + deg[i];
        }

        // 2) scatter into rows
        let m = offsets[n_rows];
        let mut indices = vec![0usize; m];
        let mut values = vec![0f64; m];
        let mut write = offsets.clone();
        for &(r, c, v) in triplets {
            let pos = write[r];
            indices[pos] = c;
            values[pos] = v;
            write[r] += 1;
        }

        // 3) sort each row by column and merge duplicates in place
        let mut out_offsets = vec![0usize; n_rows + 1];
        let mut out_indices = Vec::with_capacity(m);
        let mut out_values = Vec::with_capacity(m);
        for r in 0..n_rows {
            let lo = offsets[r];
            let hi = offsets[r + 1];
            let mut row: Vec<(usize, f64)> = indices[lo..hi]
                .iter()
                .copied()
                .zip(values[lo..hi].iter().copied())
                .collect();
            row.sort_unstable_by_key(|(c, _)| *c);
            for (c, v) in row {
                match out_indices.last() {
                    Some(&last) if out_indices.len() > out_offsets[r] && last == c => {
                        *out_values.last_mut().unwrap() += v;
                    }
                    _ => {
                        out_indices.push(c);
                        out_values.push(v);
                    }
                }
            }
            out_offsets[r + 1] = out_indices.len();
        }

        Self {
            n_rows,
            n_cols,
            offsets: out_offsets,
            indices: out_indices,
            values: out_values,
        }
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            offsets: (0..=n).collect(),
            indices: (0..n).collect(),
            values: vec![1.0; n],
        }
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Column-index and value slices for row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> (&[usize], &[f64]) {
        let lo = self.offsets[r];
        let hi = self.offsets[r + 1];
        (&self.indices[lo..hi], &self.values[lo..hi])
    }

    /// Entry lookup by binary search within the row. O(log nnz_row).
    pub fn get(&self, r: usize, c: usize) -> f64 {
        let (cols, vals) = self.row(r);
        match cols.binary_search(&c) {
            Ok(k) => vals[k],
            Err(_) => 0.0,
        }
    }

    /// Dense matvec `y = A x`.
    ///
    /// # Panics
    /// Panics if `x.len() != n_cols`.
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(x.len(), self.n_cols, "matvec dimension mismatch");
        let mut y = vec![0.0; self.n_rows];
        self.mul_vec_into(x, &mut y);
        y
    }

    #[inline]
    fn mul_vec_into(&self, x: &[f64], y: &mut [f64]) {
        for r in 0..self.n_rows {
            let (cols, vals) = self.row(r);
            let mut acc = 0.0;
            for (c, v) in cols.iter().zip(vals) {
                acc += v * x[*c];
            }
            y[r] = acc;
        }
    }

    /// Apply the matrix to every row of a stacked row-major block.
    ///
    /// `x` holds `x.len() / n_cols` signal rows of length `n_cols`; the
    /// result row `out[r] = A · x[r]` is valid as a right-multiplication
    /// `x @ A` exactly when the matrix is symmetric, which holds for all
    /// operators this crate diffuses through. Rows are independent, so the
    /// `rayon` feature parallelizes across them without changing results.
    ///
    /// # Panics
    /// Panics if the matrix is not square or the lengths do not tile.
    pub fn mul_stacked(&self, x: &[f64], out: &mut [f64]) {
        assert_eq!(self.n_rows, self.n_cols, "mul_stacked needs a square matrix");
        let n = self.n_cols;
        assert!(n > 0 && x.len() % n == 0, "stacked block does not tile");
        assert_eq!(x.len(), out.len(), "output block size mismatch");

        #[cfg(feature = "rayon")]
        {
            out.par_chunks_mut(n)
                .zip(x.par_chunks(n))
                .for_each(|(y, row)| self.mul_vec_into(row, y));
        }
        #[cfg(not(feature = "rayon"))]
        {
            for (y, row) in out.chunks_mut(n).zip(x.chunks(n)) {
                self.mul_vec_into(row, y);
            }
        }
    }

    /// Transpose. O(nnz).
    pub fn transpose(&self) -> Self {
        let mut deg = vec![0usize; self.n_cols];
        for &c in &self.indices {
            deg[c] += 1;
        }
        let mut offsets = vec![0usize; self.n_cols + 1];
        for i in 0..self.n_cols {
            offsets[i + 1] = offsets[i] + deg[i];
        }
        let mut indices = vec![0usize; self.nnz()];
        let mut values = vec![0f64; self.nnz()];
        let mut write = offsets.clone();
        for r in 0..self.n_rows {
            let (cols, vals) = self.row(r);
            for (c, v) in cols.iter().zip(vals) {
                let pos = write[*c];
                indices[pos] = r;
                values[pos] = *v;
                write[*c] += 1;
            }
        }
        Self {
            n_rows: self.n_cols,
            n_cols: self.n_rows,
            offsets,
            indices,
            values,
        }
    }

    /// Affine spectral rescale `2·A/lmax − I` for a square matrix.
    ///
    /// Maps a spectrum contained in `[0, lmax]` onto `[-1, 1]`, the domain of
    /// the Chebyshev recurrences. The identity shift needs every diagonal
    /// entry present, so missing diagonals are inserted.
    pub fn rescale_spectrum(&self, lmax: f64) -> Self {
        assert_eq!(self.n_rows, self.n_cols, "spectral rescale needs a square matrix");
        let scale = 2.0 / lmax;
        let mut offsets = vec![0usize; self.n_rows + 1];
        let mut indices = Vec::with_capacity(self.nnz() + self.n_rows);
        let mut values = Vec::with_capacity(self.nnz() + self.n_rows);
        for r in 0..self.n_rows {
            let (cols, vals) = self.row(r);
            let mut wrote_diag = false;
            for (c, v) in cols.iter().zip(vals) {
                if *c == r {
                    indices.push(*c);
                    values.push(scale * v - 1.0);
                    wrote_diag = true;
                } else if *c > r && !wrote_diag {
                    indices.push(r);
                    values.push(-1.0);
                    wrote_diag = true;
                    indices.push(*c);
                    values.push(scale * v);
                } else {
                    indices.push(*c);
                    values.push(scale * v);
                }
            }
            if !wrote_diag {
                indices.push(r);
                values.push(-1.0);
            }
            offsets[r + 1] = indices.len();
        }
        Self {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            offsets,
            indices,
            values,
        }
    }
}
