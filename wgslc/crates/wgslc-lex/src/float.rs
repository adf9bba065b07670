//! Limits and conversions for the narrow float types.
//!
//! Literal values are carried as `f64`. These helpers check that a value fits
//! an `f32` or `f16` and round it to what that type can hold.

/// Largest finite `f32`
pub const F32_HIGHEST: f64 = f32::MAX as f64;
/// Most negative finite `f32`
pub const F32_LOWEST: f64 = f32::MIN as f64;
/// Smallest positive normal `f32` (2^-126)
pub const F32_SMALLEST: f64 = f32::MIN_POSITIVE as f64;
/// Smallest positive subnormal `f32` (2^-149)
pub const F32_SMALLEST_SUBNORMAL: f64 = f64::from_bits((1023 - 149) << 52);

/// Largest finite `f16`
pub const F16_HIGHEST: f64 = 65504.0;
/// Most negative finite `f16`
pub const F16_LOWEST: f64 = -65504.0;
/// Smallest positive normal `f16` (2^-14)
pub const F16_SMALLEST: f64 = f64::from_bits((1023 - 14) << 52);
/// Smallest positive subnormal `f16` (2^-24)
pub const F16_SMALLEST_SUBNORMAL: f64 = f64::from_bits((1023 - 24) << 52);

const F32_SIGN_MASK: u32 = 0x8000_0000;
const F32_EXPONENT_MASK: u32 = 0x7f80_0000;
const F32_MANTISSA_BITS: i32 = 23;
const F32_EXPONENT_BIAS: i32 = 127;

/// Convert to `f32` precision, or `None` if `value` is outside the `f32` range.
///
/// In-range values round to the nearest `f32`.
pub fn checked_f32(value: f64) -> Option<f64> {
    if !(F32_LOWEST..=F32_HIGHEST).contains(&value) {
        return None;
    }
    Some(value as f32 as f64)
}

/// Convert to `f16` precision, or `None` if `value` is outside the `f16` range.
pub fn checked_f16(value: f64) -> Option<f64> {
    if !(F16_LOWEST..=F16_HIGHEST).contains(&value) {
        return None;
    }
    Some(quantize_f16(value))
}

/// Drop the precision `f16` cannot hold.
///
/// The value is first rounded to `f32`, then the mantissa bits below `f16`
/// precision are cleared (truncation, not rounding). Magnitudes below 2^-24
/// become a zero of the same sign; magnitudes above the `f16` range become
/// infinity.
pub fn quantize_f16(value: f64) -> f64 {
    let bits = (value as f32).to_bits();
    let sign = bits & F32_SIGN_MASK;

    // Zero, infinity and NaN are already exact
    if bits & !F32_SIGN_MASK == 0 || bits & F32_EXPONENT_MASK == F32_EXPONENT_MASK {
        return f32::from_bits(bits) as f64;
    }

    let exponent = ((bits & F32_EXPONENT_MASK) >> F32_MANTISSA_BITS) as i32 - F32_EXPONENT_BIAS;
    let quantized = if exponent < -24 {
        sign
    } else if exponent < -14 {
        // Subnormal in f16: `exponent + 24` mantissa bits survive
        let discard = F32_MANTISSA_BITS - (exponent + 24);
        bits & !((1u32 << discard) - 1)
    } else if exponent <= 15 {
        bits & !((1u32 << (F32_MANTISSA_BITS - 10)) - 1)
    } else {
        sign | F32_EXPONENT_MASK
    };

    f32::from_bits(quantized) as f64
}
