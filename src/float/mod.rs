//! Scalar precision codecs between f32 and 16-bit formats.
//!
//! Two reduced floating-point representations are supported:
//! - bfloat16: binary32's sign and 8-bit exponent with a 7-bit mantissa,
//!   i.e. the upper half of the binary32 bit pattern (see [`bf16`]).
//! - binary16: IEEE 754 half precision with a 5-bit exponent (bias 15) and
//!   10-bit mantissa, including subnormals (see [`f16`]).
//!
//! All conversions here are total functions over every bit pattern: NaN,
//! infinities, subnormals and negative zero are valid inputs and produce
//! well-defined outputs. Everything is built on the raw-bit view in
//! [`bits`].

pub mod bits;
pub mod bf16;
pub mod dtype;
pub mod f16;


// Re-export all public conversion functions and types
pub use bf16::{bf16_to_f32, f32_to_bf16};
pub use bits::{fp32_from_bits, fp32_to_bits};
pub use dtype::DType;
pub use f16::{f16_to_f32, f32_to_f16};
