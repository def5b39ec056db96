//! IEEE 754 binary16 codec.
//!
//! Full half-precision encode/decode independent of the host float's field
//! widths: 1 sign bit, 5 exponent bits (bias 15), 10 mantissa bits. Handles
//! subnormals on both sides, saturates out-of-range magnitudes to signed
//! infinity, and carries NaN through. The discarded 13 mantissa bits are
//! truncated, not rounded.

use super::bits::{fp32_from_bits, fp32_to_bits};

/// Convert f32 to IEEE half precision (binary16).
pub fn f32_to_f16(value: f32) -> u16 {
    let bits = fp32_to_bits(value);

    let sign = ((bits >> 16) & 0x8000) as u16;
    let exponent = (((bits >> 23) & 0xff) as i32) - 127 + 15;
    let mantissa = ((bits >> 13) & 0x3ff) as u16;

    if exponent <= 0 {
        if exponent < -10 {
            // Below even the subnormal half range; underflow to signed zero.
            return sign;
        }
        // Subnormal half: restore the implicit bit, shift into the 10-bit
        // mantissa field. The exponent field stays zero.
        return sign | ((mantissa | 0x400) >> (1 - exponent));
    }
    if exponent > 30 {
        if exponent == 0xff - 127 + 15 {
            // Source exponent all ones: Inf keeps a zero mantissa, NaN keeps
            // its top 10 payload bits.
            return sign | 0x7c00 | mantissa;
        }
        // Finite magnitude beyond the half range saturates to Inf.
        return sign | 0x7c00;
    }

    sign | ((exponent as u16) << 10) | mantissa
}

/// Convert IEEE half precision (binary16) to f32. Exact for every input.
pub fn f16_to_f32(value: u16) -> f32 {
    let sign = u32::from(value >> 15) & 0x1;
    let exponent = u32::from(value >> 10) & 0x1f;
    let mut mantissa = u32::from(value) & 0x3ff;

    let bits = if exponent == 0 {
        if mantissa == 0 {
            // Signed zero.
            sign << 31
        } else {
            // Subnormal half: normalize by shifting the mantissa until the
            // implicit bit reaches position 10, tracking the exponent as if
            // the value had been stored with exponent code 1.
            let mut exp = 1i32;
            while mantissa & 0x400 == 0 {
                mantissa <<= 1;
                exp -= 1;
            }
            mantissa &= 0x3ff;
            (sign << 31) | (((exp - 15 + 127) as u32) << 23) | (mantissa << 13)
        }
    } else if exponent == 31 {
        // Inf or NaN.
        (sign << 31) | 0x7f80_0000 | (mantissa << 13)
    } else {
        // Rebias 15 -> 127; exponent is at most 30 here, so add the bias
        // delta rather than subtracting first, which would underflow for
        // exponent codes below 15.
        (sign << 31) | ((exponent + 112) << 23) | (mantissa << 13)
    };

    fp32_from_bits(bits)
}
