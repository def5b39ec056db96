//! 4-bit-class block quantization with a shared f16 scale.
//!
//! Codes are unsigned and kept one per byte in memory; packing two codes per
//! byte is a storage optimization offered by [`QuantBlock4::packed_codes`],
//! not part of the value contract.

use serde::{Deserialize, Serialize};

use crate::error::{PrecisarError, Result};
use crate::float::{f16_to_f32, f32_to_f16};

/// Maximum code value for the unsigned format.
pub const Q4_CODE_RANGE: f32 = 255.0;

/// A block of values quantized to unsigned byte codes.
///
/// Layout: one shared scale (binary16 bits) plus one `u8` code per element.
/// The format is unsigned: negative inputs clamp to code 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantBlock4 {
    /// Shared scale, stored as binary16 bits.
    scale: u16,
    /// One unsigned code per quantized element; the block length is the code
    /// count, so no separately-trusted length can drift from the buffer.
    codes: Vec<u8>,
}

impl QuantBlock4 {
    /// Quantize a block of f32 values to unsigned byte codes.
    ///
    /// The scale is `max(|values|) / 255`, rounded through binary16 before
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
        let scale = f32_to_f16(max_abs / Q4_CODE_RANGE);
        let step = f16_to_f32(scale);

        let mut codes = Vec::new();
        codes
            .try_reserve_exact(values.len())
            .map_err(|_| PrecisarError::AllocationFailure { elements: values.len() })?;

        for &value in values {
            let code = if step == 0.0 {
                0
            } else {
                (value / step).round().clamp(0.0, Q4_CODE_RANGE) as u8
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
    pub fn from_parts(scale: u16, codes: Vec<u8>) -> Result<Self> {
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
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Pack two codes per byte, low nibble first.
    ///
    /// Only the low 4 bits of each code are kept, so this is a lossless
    /// storage form only for blocks whose codes all fit a nibble. An odd
    /// trailing code occupies the low nibble of the final byte.
    pub fn packed_codes(&self) -> Vec<u8> {
        let mut packed = vec![0u8; self.codes.len().div_ceil(2)];
        for (i, &code) in self.codes.iter().enumerate() {
            let nibble = code & 0x0f;
            if i.is_multiple_of(2) {
                packed[i / 2] = nibble;
            } else {
                packed[i / 2] |= nibble << 4;
            }
        }
        packed
    }

    /// Unpack `len` nibble codes produced by [`packed_codes`](Self::packed_codes).
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `packed` holds fewer than `len.div_ceil(2)` bytes.
    pub fn unpack_codes(packed: &[u8], len: usize) -> Result<Vec<u8>> {
        if packed.len() < len.div_ceil(2) {
            return Err(PrecisarError::InvalidSize);
        }
        let codes = (0..len)
            .map(|i| {
                let byte = packed[i / 2];
                if i.is_multiple_of(2) {
                    byte & 0x0f
                } else {
                    byte >> 4
                }
            })
            .collect();
        Ok(codes)
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
