//! Tests for the block quantizers

use super::*;
use crate::error::PrecisarError;
use crate::float::{f16_to_f32, f32_to_f16};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

// ========================================================================
// QuantBlock8
// ========================================================================

#[test]
fn test_q8_end_to_end() {
    let values = [1.0, -1.0, 0.5, -0.5];
    let block = QuantBlock8::quantize(&values).unwrap();

    assert_eq!(block.len(), 4);
    assert_eq!(block.scale_bits(), f32_to_f16(1.0 / 127.0));

    let decoded = block.dequantize().unwrap();
    assert_eq!(decoded.len(), 4);
    for (&orig, &deq) in values.iter().zip(decoded.iter()) {
        let error = (orig - deq).abs();
        assert!(
            error <= 0.5 * block.scale_f32() + 1e-6,
            "error {error} exceeds half a step for {orig} vs {deq}"
        );
    }
}

#[test]
fn test_q8_extreme_values_hit_the_code_range() {
    let block = QuantBlock8::quantize(&[2.0, -2.0]).unwrap();
    assert_eq!(block.codes(), &[127, -127]);
}

#[test]
fn test_q8_zero_block_is_safe() {
    let block = QuantBlock8::quantize(&[0.0, 0.0, 0.0]).unwrap();
    assert_eq!(block.scale_bits(), 0);
    assert_eq!(block.scale_f32(), 0.0);
    assert_eq!(block.codes(), &[0, 0, 0]);
    assert_eq!(block.dequantize().unwrap(), vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_q8_rejects_empty_input() {
    assert_eq!(QuantBlock8::quantize(&[]), Err(PrecisarError::InvalidSize));
}

#[test]
fn test_q8_single_element() {
    let block = QuantBlock8::quantize(&[-3.5]).unwrap();
    let decoded = block.dequantize().unwrap();
    assert_abs_diff_eq!(decoded[0], -3.5, epsilon = 0.5 * block.scale_f32() + 1e-4);
}

#[test]
fn test_q8_from_parts() {
    let block = QuantBlock8::from_parts(f32_to_f16(0.5), vec![2, -2, 0]).unwrap();
    assert_eq!(block.len(), 3);
    assert_eq!(block.dequantize().unwrap(), vec![1.0, -1.0, 0.0]);

    assert_eq!(
        QuantBlock8::from_parts(0, Vec::new()),
        Err(PrecisarError::InvalidSize)
    );
}

#[test]
fn test_q8_memory_accounting() {
    let block = QuantBlock8::quantize(&[1.0; 32]).unwrap();
    // 2 scale bytes + 32 codes
    assert_eq!(block.memory_bytes(), 34);
    let ratio = block.compression_ratio();
    assert!(ratio > 3.7 && ratio < 3.8, "ratio {ratio}");
}

// ========================================================================
// QuantBlock4
// ========================================================================

#[test]
fn test_q4_end_to_end() {
    let values = [0.0, 0.25, 0.5, 1.0];
    let block = QuantBlock4::quantize(&values).unwrap();

    assert_eq!(block.len(), 4);
    assert_eq!(block.scale_bits(), f32_to_f16(1.0 / 255.0));

    let decoded = block.dequantize().unwrap();
    for (&orig, &deq) in values.iter().zip(decoded.iter()) {
        let error = (orig - deq).abs();
        assert!(
            error <= 0.5 * block.scale_f32() + 1e-6,
            "error {error} exceeds half a step for {orig} vs {deq}"
        );
    }
}

#[test]
fn test_q4_negative_inputs_clamp_to_zero() {
    let block = QuantBlock4::quantize(&[-5.0, 10.0]).unwrap();
    assert_eq!(block.codes()[0], 0);
    assert_eq!(block.dequantize().unwrap()[0], 0.0);
}

#[test]
fn test_q4_zero_block_is_safe() {
    let block = QuantBlock4::quantize(&[0.0; 4]).unwrap();
    assert_eq!(block.scale_bits(), 0);
    assert_eq!(block.codes(), &[0, 0, 0, 0]);
    assert_eq!(block.dequantize().unwrap(), vec![0.0; 4]);
}

#[test]
fn test_q4_rejects_empty_input() {
    assert_eq!(QuantBlock4::quantize(&[]), Err(PrecisarError::InvalidSize));
}

#[test]
fn test_q4_nibble_packing_round_trip() {
    let codes = vec![0x0u8, 0x5, 0xa, 0xf, 0x3];
    let block = QuantBlock4::from_parts(f32_to_f16(1.0), codes.clone()).unwrap();

    let packed = block.packed_codes();
    assert_eq!(packed.len(), 3);
    assert_eq!(packed, vec![0x50, 0xfa, 0x03]);
    assert_eq!(QuantBlock4::unpack_codes(&packed, codes.len()).unwrap(), codes);
}

#[test]
fn test_q4_unpack_rejects_short_buffer() {
    // 5 codes need 3 packed bytes
    assert_eq!(
        QuantBlock4::unpack_codes(&[0x50, 0xfa], 5),
        Err(PrecisarError::InvalidSize)
    );
    assert_eq!(QuantBlock4::unpack_codes(&[], 1), Err(PrecisarError::InvalidSize));
    assert_eq!(QuantBlock4::unpack_codes(&[], 0).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_q4_memory_accounting() {
    let block = QuantBlock4::quantize(&[1.0; 16]).unwrap();
    assert_eq!(block.memory_bytes(), 18);
}

// ========================================================================
// Serde: length is derived from the code buffer
// ========================================================================

#[test]
fn test_q8_deserialized_length_follows_codes() {
    let block = QuantBlock8::quantize(&[1.0, -1.0, 0.5]).unwrap();
    let json = serde_json::to_string(&block).unwrap();
    let back: QuantBlock8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, block);
    assert_eq!(back.len(), back.codes().len());

    // A hand-written payload cannot smuggle in a disagreeing length; the
    // block length is the code count by construction
    let forged: QuantBlock8 =
        serde_json::from_str(r#"{"scale":0,"codes":[1,2],"len":99}"#).unwrap();
    assert_eq!(forged.len(), 2);
    assert_eq!(forged.dequantize().unwrap().len(), forged.len());
}

#[test]
fn test_q4_deserialized_length_follows_codes() {
    let block = QuantBlock4::quantize(&[0.5, 1.0]).unwrap();
    let json = serde_json::to_string(&block).unwrap();
    let back: QuantBlock4 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, block);
    assert_eq!(back.len(), back.codes().len());
}

// ========================================================================
// Scale storage
// ========================================================================

#[test]
fn test_scale_survives_f16_storage() {
    // The stored scale is the f16 image of max/range; requantizing the
    // decoded scale must not drift
    let block = QuantBlock8::quantize(&[0.75, -0.3]).unwrap();
    let stored = block.scale_bits();
    assert_eq!(f32_to_f16(f16_to_f32(stored)), stored);
}

// ========================================================================
// PROPERTY TESTS - Quantization error contract
// ========================================================================

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// Q8 round-trip error stays within half a quantization step
    #[test]
    fn prop_q8_error_bound(
        values in prop::collection::vec(-100.0f32..100.0, 1..128),
    ) {
        let block = QuantBlock8::quantize(&values).unwrap();
        let decoded = block.dequantize().unwrap();

        prop_assert_eq!(decoded.len(), values.len());

        // The absolute term covers blocks whose scale lands in the f16
        // subnormal range, where truncation costs up to 2^-24 per step.
        let bound = 0.5 * block.scale_f32() * 1.001 + 2e-5;
        for (i, (&orig, &deq)) in values.iter().zip(decoded.iter()).enumerate() {
            let error = (orig - deq).abs();
            prop_assert!(
                error <= bound,
                "q8 error {} > {} at index {}", error, bound, i
            );
        }
    }

    /// Q4 round-trip error stays within half a step for non-negative input
    #[test]
    fn prop_q4_error_bound(
        values in prop::collection::vec(0.0f32..100.0, 1..128),
    ) {
        let block = QuantBlock4::quantize(&values).unwrap();
        let decoded = block.dequantize().unwrap();

        prop_assert_eq!(decoded.len(), values.len());

        let bound = 0.5 * block.scale_f32() * 1.001 + 4e-5;
        for (i, (&orig, &deq)) in values.iter().zip(decoded.iter()).enumerate() {
            let error = (orig - deq).abs();
            prop_assert!(
                error <= bound,
                "q4 error {} > {} at index {}", error, bound, i
            );
        }
    }

    /// Codes never leave the representable range
    #[test]
    fn prop_q8_codes_in_range(
        values in prop::collection::vec(-1000.0f32..1000.0, 1..64),
    ) {
        let block = QuantBlock8::quantize(&values).unwrap();
        for &code in block.codes() {
            prop_assert!((-127..=127).contains(&i32::from(code)));
        }
    }

    /// Nibble packing round-trips whenever every code fits a nibble
    #[test]
    fn prop_q4_packing_round_trip(
        codes in prop::collection::vec(0u8..=0x0f, 1..64),
    ) {
        let block = QuantBlock4::from_parts(f32_to_f16(1.0), codes.clone()).unwrap();
        let packed = block.packed_codes();
        prop_assert_eq!(packed.len(), codes.len().div_ceil(2));
        prop_assert_eq!(QuantBlock4::unpack_codes(&packed, codes.len()).unwrap(), codes);
    }
}
