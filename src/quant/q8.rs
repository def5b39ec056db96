//! 8-bit block quantization with a shared f16 scale.

use serde::{Deserialize, Serialize};

use crate::error::{PrecisarError, Result};
use crate::float::{f16_to_f32, f32_to_f16};

/// Maximum code magnitude for the signed 8-bit format.
pub const Q8_CODE_RANGE: f32 = 127.0;

/// A block of values quantized to signed 8-bit codes.
///
/// Layout: one shared scale (binary16 bits) plus one `i8` code per element.
/// The codes approximate `value / scale`; reconstruction is `code × scale`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantBlock8 {
    /// Shared scale, stored as binary16 bits.
    scale: u16,
    /// One signed code per quantized element; the block length is the code
    /// count, so no separately-trusted length can drift from the buffer.
    codes: Vec<i8>,
}

impl QuantBlock8 {
    /// Quantize a block of f32 values to signed 8-bit codes.
    ///
    /// The scale is `max(|values|) / 127`, rounded through binary16 before
    /// the codes are derived so that encode and decode agree on the step. An
    /// all-zero block gets a zero scale and all-zero codes; no division
    /// happens in that case.
    ///
    /// # Errors
    ///
    /// `InvalidSize` for an empty input, `AllocationFailure` if the code
    /// buffer cannot be obtained.
    pub fn quantize(values: &[f32]) -> Result<Self> {
        if values.is_empty() {
            return Err(PrecisarError::InvalidSize);
        }

        let max_abs = values.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
        let scale = f32_to_f16(max_abs / Q8_CODE_RANGE);
        let step = f16_to_f32(scale);

        let mut codes = Vec::new();
        codes
            .try_reserve_exact(values.len())
            .map_err(|_| PrecisarError::AllocationFailure { elements: values.len() })?;

        for &value in values {
            let code = if step == 0.0 {
                0
            } else {
                (value / step).round().clamp(-Q8_CODE_RANGE, Q8_CODE_RANGE) as i8
            };
            codes.push(code);
        }

        Ok(Self { scale, codes })
    }

    /// Reconstruct the approximate f32 values, length [`len`](Self::len).
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the output buffer cannot be obtained.
    pub fn dequantize(&self) -> Result<Vec<f32>> {
        let step = f16_to_f32(self.scale);

        let mut out = Vec::new();
        out.try_reserve_exact(self.codes.len())
            .map_err(|_| PrecisarError::AllocationFailure { elements: self.codes.len() })?;
        out.extend(self.codes.iter().map(|&code| f32::from(code) * step));
        Ok(out)
    }

    /// Reassemble a block from a stored scale and code buffer, for storage
    /// layers that deserialized the parts separately.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the code buffer is empty.
    pub fn from_parts(scale: u16, codes: Vec<i8>) -> Result<Self> {
        if codes.is_empty() {
            return Err(PrecisarError::InvalidSize);
        }
        Ok(Self { scale, codes })
    }

    /// Number of quantized elements
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// A block always covers at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Shared scale as raw binary16 bits
    pub fn scale_bits(&self) -> u16 {
        self.scale
    }

    /// Shared scale as f32
    pub fn scale_f32(&self) -> f32 {
        f16_to_f32(self.scale)
    }

    /// The stored codes
    pub fn codes(&self) -> &[i8] {
        &self.codes
    }

    /// In-memory size of the quantized form: 2 scale bytes + 1 per code
    pub fn memory_bytes(&self) -> usize {
        2 + self.codes.len()
    }

    /// Compression ratio vs storing the block as f32
    pub fn compression_ratio(&self) -> f32 {
        (self.codes.len() * 4) as f32 / self.memory_bytes() as f32
    }
}
