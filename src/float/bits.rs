//! Raw-bit view of binary32 values.
//!
//! Value-preserving reinterpretation between an f32 and its IEEE 754
//! encoding. No rounding, no transformation: `fp32_from_bits(fp32_to_bits(x))`
//! is bit-identical to `x` for every pattern, including negative zero and
//! every NaN payload.

/// Reinterpret an f32 as its raw IEEE 754 binary32 bit pattern.
#[inline]
pub fn fp32_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterpret a raw binary32 bit pattern as an f32.
#[inline]
pub fn fp32_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}
