//! precisar — reduced-precision numeric codecs
//!
//! Bit-exact conversion layer between standard 32-bit floats and three
//! smaller representations used to shrink large weight arrays:
//!
//! - bfloat16 (truncated binary32, round-to-nearest-even)
//! - IEEE 754 binary16 (full subnormal/Inf/NaN handling)
//! - block-quantized integer codes with a shared binary16 scale
//!   (signed 8-bit and unsigned byte-stored 4-bit-class)
//!
//! Every scalar conversion is a total function: NaN payloads, infinities,
//! subnormals and negative zero are all valid inputs with defined outputs.
//! The block quantizers are the only fallible operations and report through
//! [`PrecisarError`], never through sentinel float values.
//!
//! ## Example
//!
//! ```
//! use precisar::{f32_to_f16, f16_to_f32, QuantBlock8};
//!
//! assert_eq!(f32_to_f16(1.0), 0x3c00);
//! assert_eq!(f16_to_f32(0x3c00), 1.0);
//!
//! let block = QuantBlock8::quantize(&[1.0, -1.0, 0.5, -0.5])?;
//! let approx = block.dequantize()?;
//! assert!((approx[0] - 1.0).abs() <= 0.5 * block.scale_f32() + 1e-4);
//! # Ok::<(), precisar::PrecisarError>(())
//! ```

pub mod error;
pub mod float;
pub mod quant;

pub use error::{PrecisarError, Result};
pub use float::{
    bf16_to_f32, f16_to_f32, f32_to_bf16, f32_to_f16, fp32_from_bits, fp32_to_bits, DType,
};
pub use quant::{QuantBlock4, QuantBlock8, Q4_CODE_RANGE, Q8_CODE_RANGE};
