//! IBM System/360 hexadecimal floating point conversion.
//!
//! An IBM single-precision word is laid out as:
//!
//! ```text
//!  31 | 30 ........ 24 | 23 ..................... 0
//! sign| exponent (7)   | fraction (24)
//! ```
//!
//! with value `(-1)^sign * 0.fraction * 16^(exponent - 64)`. The fraction
//! is not required to be normalized and there is no implicit leading bit.
//!
//! Conversion to IEEE is exact in `f64` and then rounded once to `f32`.
//! Magnitudes above `f32::MAX` become infinite, those below the smallest
//! `f32` subnormal become zero.
//!
//! Conversion to IBM truncates: the 24-bit IEEE significand is shifted
//! right by up to 3 bits to align the exponent on a nibble boundary, so
//! the round-trip relative error is below 2^-20. IEEE subnormals are
//! renormalized first, so they convert under the same bound. Non-finite
//! inputs are not supported.

/// 2^24, scaling the 24-bit fraction into `[0, 1)`.
const FRACTION_SCALE: f64 = 16_777_216.0;

const SIGN_MASK: u32 = 0x8000_0000;
const IBM_EXPONENT_MASK: u32 = 0x7F00_0000;
const IBM_FRACTION_MASK: u32 = 0x00FF_FFFF;
const IEEE_EXPONENT_MASK: u32 = 0x7F80_0000;
const IEEE_MANTISSA_MASK: u32 = 0x007F_FFFF;
const IEEE_IMPLICIT_BIT: u32 = 0x0080_0000;

/// Convert one IBM float word to an IEEE `f32`.
pub fn ibm_to_ieee(word: u32) -> f32 {
    let negative = word & SIGN_MASK != 0;
    let exponent = ((word & IBM_EXPONENT_MASK) >> 24) as i32;
    let fraction = (word & IBM_FRACTION_MASK) as f64 / FRACTION_SCALE;

    let magnitude = fraction * 16f64.powi(exponent - 64);
    let value = if negative { -magnitude } else { magnitude };
    value as f32
}

/// Convert a finite IEEE `f32` to an IBM float word.
///
/// `0.0` maps to the all-zero word; `-0.0` keeps only its sign bit.
pub fn ieee_to_ibm(value: f32) -> u32 {
    let bits = value.to_bits();
    let sign = bits & SIGN_MASK;
    if value == 0.0 {
        return sign;
    }

    let biased = ((bits & IEEE_EXPONENT_MASK) >> 23) as i32;
    let (exponent, significand) = if biased == 0 {
        // Subnormal: shift the leading one up to the implicit bit position.
        let mut exponent = -126;
        let mut significand = bits & IEEE_MANTISSA_MASK;
        while significand & IEEE_IMPLICIT_BIT == 0 {
            significand <<= 1;
            exponent -= 1;
        }
        (exponent, significand)
    } else {
        (biased - 127, (bits & IEEE_MANTISSA_MASK) | IEEE_IMPLICIT_BIT)
    };

    // IBM keeps the whole mantissa right of the radix point, IEEE keeps an
    // implicit 1 left of it, hence the +1 before rescaling to base 16.
    let remainder = (exponent + 1).rem_euclid(4);
    let mut exp16 = (exponent + 1).div_euclid(4);
    if remainder != 0 {
        exp16 += 1;
    }
    let shift = if remainder != 0 { 4 - remainder } else { 0 };

    let ibm_exponent = (exp16 + 64).clamp(0, 127) as u32;
    let mantissa = significand >> shift;

    sign | (ibm_exponent << 24) | mantissa
}

/// Convert a slice of IBM words to IEEE floats.
pub fn ibm_to_ieee_slice(words: &[u32]) -> Vec<f32> {
    words.iter().map(|&w| ibm_to_ieee(w)).collect()
}

/// Convert a slice of IEEE floats to IBM words.
pub fn ieee_to_ibm_slice(values: &[f32]) -> Vec<u32> {
    values.iter().map(|&v| ieee_to_ibm(v)).collect()
}

/// Decode big-endian IBM float bytes, appending to `out`.
///
/// Trailing bytes that do not fill a 4-byte word are ignored.
pub fn decode_ibm_be(data: &[u8], out: &mut Vec<f32>) {
    out.reserve(data.len() / 4);
    for chunk in data.chunks_exact(4) {
        let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        out.push(ibm_to_ieee(word));
    }
}
