//! Data type identifiers for the supported representations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage data types handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DType {
    /// 32-bit floating point (default)
    #[default]
    F32,
    /// 16-bit floating point (IEEE half precision)
    F16,
    /// 16-bit brain floating point (truncated mantissa)
    Bf16,
    /// 8-bit block-quantized integer codes with a shared f16 scale
    Q8,
    /// 4-bit block-quantized integer codes with a shared f16 scale
    Q4,
}

impl DType {
    /// Per-element storage cost in bytes, as the codes are held in memory.
    /// Q4 codes occupy one byte each here; nibble packing halves that on
    /// disk (see `QuantBlock4::packed_codes`).
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::F32 => 4,
            DType::F16 | DType::Bf16 => 2,
            DType::Q8 | DType::Q4 => 1,
        }
    }

    /// Bits of dynamic range per stored value.
    pub fn bits_per_value(&self) -> usize {
        match self {
            DType::F32 => 32,
            DType::F16 | DType::Bf16 => 16,
            DType::Q8 => 8,
            DType::Q4 => 4,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            DType::F32 => "f32",
            DType::F16 => "f16",
            DType::Bf16 => "bf16",
            DType::Q8 => "q8",
            DType::Q4 => "q4",
        }
    }

    /// Whether this is a reduced precision type
    pub fn is_reduced(&self) -> bool {
        !matches!(self, DType::F32)
    }

    /// Whether this is a block-quantized integer type
    pub fn is_quantized(&self) -> bool {
        matches!(self, DType::Q8 | DType::Q4)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
