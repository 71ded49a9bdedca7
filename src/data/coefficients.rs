//! Chebyshev coefficient tensors.
//!
//! Coefficients always live in a 3-D tensor of shape `(K+1, Fout, Fin)`:
//! `K` is the polynomial order, `Fout` the number of output filters, `Fin`
//! the number of input channels. Lower-rank inputs are normalized by
//! appending singleton axes, so a plain coefficient vector becomes
//! `(K+1, 1, 1)` and a filter bank's `(K+1, F)` matrix becomes
//! `(K+1, F, 1)`. The tensor is immutable once built.

use crate::error::GraphSpectraError;

/// Immutable `(K+1, Fout, Fin)` Chebyshev coefficient tensor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoefficientTensor {
    orders: usize,
    fout: usize,
    fin: usize,
    data: Vec<f64>,
}

impl CoefficientTensor {
    /// Wrap a row-major buffer, checking it tiles `(orders, fout, fin)`.
    pub fn try_new(
        orders: usize,
        fout: usize,
        fin: usize,
        data: Vec<f64>,
    ) -> Result<Self, GraphSpectraError> {
        if orders == 0 || data.len() != orders * fout * fin {
            return Err(GraphSpectraError::CoefficientShapeMismatch {
                len: data.len(),
                orders,
                fout,
                fin,
            });
        }
        Ok(Self {
            orders,
            fout,
            fin,
            data,
        })
    }

    /// A single filter's coefficient vector, normalized to `(K+1, 1, 1)`.
    pub fn from_vec(c: Vec<f64>) -> Result<Self, GraphSpectraError> {
        let orders = c.len();
        Self::try_new(orders, 1, 1, c)
    }

    /// A bank of `fout` filters' coefficients, normalized to `(K+1, fout, 1)`.
    ///
    /// The buffer is row-major `(K+1, fout)`.
    pub fn from_bank(orders: usize, fout: usize, data: Vec<f64>) -> Result<Self, GraphSpectraError> {
        Self::try_new(orders, fout, 1, data)
    }

    /// Polynomial order `K` (one less than the number of coefficient slabs).
    #[inline]
    pub fn order(&self) -> usize {
        self.orders - 1
    }

    /// Number of coefficient slabs, `K + 1`.
    #[inline]
    pub fn orders(&self) -> usize {
        self.orders
    }

    #[inline]
    pub fn fout(&self) -> usize {
        self.fout
    }

    #[inline]
    pub fn fin(&self) -> usize {
        self.fin
    }

    /// Coefficient for order `k`, output filter `o`, input channel `i`.
    #[inline]
    pub fn at(&self, k: usize, o: usize, i: usize) -> f64 {
        self.data[(k * self.fout + o) * self.fin + i]
    }

    /// The `(Fout, Fin)` slab for order `k`, row-major.
    #[inline]
    pub fn slab(&self, k: usize) -> &[f64] {
        let lo = k * self.fout * self.fin;
        &self.data[lo..lo + self.fout * self.fin]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_normalizes_to_three_dims() {
        let c = CoefficientTensor::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!((c.orders(), c.fout(), c.fin()), (3, 1, 1));
        assert_eq!(c.order(), 2);
        assert_eq!(c.at(1, 0, 0), 2.0);
    }

    #[test]
    fn bank_normalizes_with_singleton_fin() {
        let c = CoefficientTensor::from_bank(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!((c.orders(), c.fout(), c.fin()), (2, 3, 1));
        assert_eq!(c.slab(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn empty_tensor_is_rejected() {
        assert!(CoefficientTensor::from_vec(vec![]).is_err());
        assert!(CoefficientTensor::try_new(2, 2, 2, vec![0.0; 7]).is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let c = CoefficientTensor::try_new(2, 2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let ser = serde_json::to_string(&c).expect("serialize");
        let de: CoefficientTensor = serde_json::from_str(&ser).expect("deserialize");
        assert_eq!(c, de);
    }
}
