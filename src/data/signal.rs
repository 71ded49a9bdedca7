//! Batched node-domain signals.
//!
//! A [`SignalBatch`] is a row-major `(batch, channels, nodes)` block of
//! `f64`. The layout puts each node-signal in one contiguous row, which is
//! what the diffusion loop multiplies through the Laplacian; the channel
//! axis is the one contracted against a coefficient tensor's `Fin`.
//!
//! Numeric policy: reduced-precision input (e.g. `f32`) is upcast to `f64`
//! at construction, before any recurrence runs, so rounding error does not
//! accumulate across diffusion steps.

use num_traits::ToPrimitive;

use crate::error::GraphSpectraError;

/// Row-major `(batch, channels, nodes)` signal block.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalBatch {
    batch: usize,
    channels: usize,
    nodes: usize,
    data: Vec<f64>,
}

impl SignalBatch {
    /// Wrap an existing `f64` buffer, checking it tiles the declared shape.
    pub fn try_new(
        batch: usize,
        channels: usize,
        nodes: usize,
        data: Vec<f64>,
    ) -> Result<Self, GraphSpectraError> {
        if data.len() != batch * channels * nodes {
            return Err(GraphSpectraError::SignalShapeMismatch {
                len: data.len(),
                batch,
                channels,
                nodes,
            });
        }
        Ok(Self {
            batch,
            channels,
            nodes,
            data,
        })
    }

    /// Build from any numeric element type, upcasting to `f64`.
    ///
    /// Values that cannot be represented (e.g. exotic wrappers) become NaN
    /// rather than aborting; standard float/int inputs always convert.
    pub fn from_elements<T: ToPrimitive + Copy>(
        batch: usize,
        channels: usize,
        nodes: usize,
        data: &[T],
    ) -> Result<Self, GraphSpectraError> {
        let upcast: Vec<f64> = data
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect();
        Self::try_new(batch, channels, nodes, upcast)
    }

    /// A single one-channel signal over `f.len()` nodes.
    pub fn from_node_signal(f: &[f64]) -> Self {
        Self {
            batch: 1,
            channels: 1,
            nodes: f.len(),
            data: f.to_vec(),
        }
    }

    /// All-zero block of the given shape.
    pub fn zeros(batch: usize, channels: usize, nodes: usize) -> Self {
        Self {
            batch,
            channels,
            nodes,
            data: vec![0.0; batch * channels * nodes],
        }
    }

    #[inline]
    pub fn batch(&self) -> usize {
        self.batch
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Contiguous node-row for signal `m`, channel `c`.
    #[inline]
    pub fn row(&self, m: usize, c: usize) -> &[f64] {
        let lo = (m * self.channels + c) * self.nodes;
        &self.data[lo..lo + self.nodes]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume into the flat row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
