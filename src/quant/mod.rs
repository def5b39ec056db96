//! Block quantization: arrays of f32 compressed to integer codes.
//!
//! A block stores one shared scale ("delta") as binary16 bits plus one small
//! integer code per element. The scale is derived once from the block's
//! maximum absolute value, so reconstruction is `code × scale` and the
//! per-element round-trip error is bounded by half a quantization step plus
//! the f16 rounding already present in the scale itself.
//!
//! Two widths are provided:
//! - [`QuantBlock8`]: signed 8-bit codes, scale = max|v| / 127
//! - [`QuantBlock4`]: unsigned codes stored one per byte, scale = max|v| / 255
//!
//! Blocks own their code buffer; dropping the block releases it exactly
//! once. Both quantizers are pure and stateless, so concurrent calls on
//! disjoint inputs need no coordination.

mod q4;
mod q8;

#[cfg(test)]
mod tests;

pub use q4::{QuantBlock4, Q4_CODE_RANGE};
pub use q8::{QuantBlock8, Q8_CODE_RANGE};
