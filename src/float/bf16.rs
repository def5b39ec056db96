//! bfloat16 codec (truncated binary32).
//!
//! bf16 shares binary32's sign bit and 8-bit exponent and keeps only the top
//! 7 mantissa bits, so encoding is a rounded 16-bit shift rather than a
//! rebias. Decoding is exact: the low 16 bits are simply zero.

use super::bits::{fp32_from_bits, fp32_to_bits};

/// Convert f32 to bf16 with round-to-nearest-even on the discarded bits.
///
/// NaN is forced to a quiet NaN so NaN-ness survives even when truncation
/// would zero the mantissa. Subnormal f32 magnitudes underflow the truncated
/// mantissa and flush to signed zero.
pub fn f32_to_bf16(value: f32) -> u16 {
    let bits = fp32_to_bits(value);

    // NaN: set the top mantissa bit of the truncated result.
    if (bits & 0x7fff_ffff) > 0x7f80_0000 {
        return ((bits >> 16) as u16) | 0x0040;
    }

    // Subnormal or zero: flush to signed zero.
    if (bits & 0x7f80_0000) == 0 {
        return ((bits >> 16) as u16) & 0x8000;
    }

    // Round up when the low 16 bits exceed the halfway point, or sit exactly
    // on it with bit 16 set (ties to even). The increment may carry into the
    // exponent; for the largest finite magnitudes that yields Inf, which is
    // the rounding-correct result.
    let round_up = (bits & 0xffff) > 0x8000 || (bits & 0x0001_8000) == 0x0001_8000;
    ((bits >> 16) + u32::from(round_up)) as u16
}

/// Convert bf16 to f32. Exact: the result's upper 16 bits equal the input.
pub fn bf16_to_f32(value: u16) -> f32 {
    fp32_from_bits(u32::from(value) << 16)
}
