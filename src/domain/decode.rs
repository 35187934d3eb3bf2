//! Bit-pattern decoding for the supported float formats.

use super::errors::DecodeError;
use super::format::FloatFormat;

/// Numeric classification of a decoded bit pattern.
///
/// Classification follows the IEEE convention: an all-ones exponent field
/// encodes infinity or NaN, an all-zero exponent field encodes zero or a
/// subnormal. The convention is applied uniformly to every format in the
/// family, including the 8-bit ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatClass {
    /// All-zero exponent and mantissa fields.
    Zero,
    /// Zero exponent field with a non-zero mantissa.
    Subnormal,
    /// Ordinary finite value.
    Normal,
    /// All-ones exponent with a zero mantissa.
    Infinite,
    /// All-ones exponent with a non-zero mantissa.
    Nan,
}

/// A bit pattern decoded under one format.
#[derive(Debug, Clone)]
pub struct DecodedValue {
    format: FloatFormat,
    bits: u64,
    class: FloatClass,
    value: f64,
}

impl DecodedValue {
    /// Format this value was decoded under.
    #[must_use]
    pub const fn format(&self) -> FloatFormat {
        self.format
    }

    /// Raw bit pattern, right-aligned in the low `total_bits`.
    #[must_use]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Numeric classification.
    #[must_use]
    pub const fn class(&self) -> FloatClass {
        self.class
    }

    /// Decoded numeric value; infinite for `Infinite`, NaN for `Nan`.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Sign bit.
    #[must_use]
    pub const fn sign_bit(&self) -> bool {
        (self.bits >> (self.format.total_bits() - 1)) & 1 == 1
    }

    /// Raw exponent field.
    #[must_use]
    pub const fn exponent_field(&self) -> u64 {
        let mask = (1u64 << self.format.exponent_bits()) - 1;
        (self.bits >> self.format.mantissa_bits()) & mask
    }

    /// Raw mantissa field.
    #[must_use]
    pub const fn mantissa_field(&self) -> u64 {
        let mantissa_bits = self.format.mantissa_bits();
        if mantissa_bits == 0 {
            0
        } else {
            self.bits & ((1u64 << mantissa_bits) - 1)
        }
    }

    /// Individual bits, most significant first: sign, exponent, mantissa.
    #[must_use]
    pub fn bit_vec(&self) -> Vec<u8> {
        let total = self.format.total_bits();
        (0..total)
            .map(|i| ((self.bits >> (total - 1 - i)) & 1) as u8)
            .collect()
    }

    /// Readout string: `inf`, `-inf`, `NaN`, or the decimal value.
    #[must_use]
    pub fn display(&self) -> String {
        match self.class {
            FloatClass::Infinite => {
                if self.sign_bit() {
                    "-inf".to_string()
                } else {
                    "inf".to_string()
                }
            }
            FloatClass::Nan => "NaN".to_string(),
            FloatClass::Zero | FloatClass::Subnormal | FloatClass::Normal => {
                self.value.to_string()
            }
        }
    }
}

/// Parses a hex string into a right-aligned bit pattern for `format`.
///
/// Input longer than the format's hex width is truncated to its leading
/// digits, matching the viewer's editing behavior.
///
/// # Errors
/// Returns [`DecodeError::InvalidHex`] for empty or non-hex input.
pub fn parse_hex(format: FloatFormat, input: &str) -> Result<u64, DecodeError> {
    let digits: String = input.chars().take(format.hex_digits()).collect();
    u64::from_str_radix(&digits, 16).map_err(|_| DecodeError::invalid_hex(input))
}

/// Decodes a right-aligned bit pattern under `format`.
///
/// Bits above the format's total width are ignored.
#[must_use]
pub fn decode(format: FloatFormat, bits: u64) -> DecodedValue {
    let total = format.total_bits();
    let exponent_bits = format.exponent_bits();
    let mantissa_bits = format.mantissa_bits();
    let bits = bits & ((1u64 << total) - 1);

    let sign = (bits >> (total - 1)) & 1 == 1;
    let signum = if sign { -1.0 } else { 1.0 };

    let exponent_mask = (1u64 << exponent_bits) - 1;
    let exponent_field = (bits >> mantissa_bits) & exponent_mask;
    let mantissa_field = if mantissa_bits == 0 {
        0
    } else {
        bits & ((1u64 << mantissa_bits) - 1)
    };

    let bias = (1i32 << (exponent_bits - 1)) - 1;
    let fraction = mantissa_field as f64 / f64::from(1u32 << mantissa_bits);

    let (class, value) = if exponent_field == exponent_mask {
        if mantissa_field == 0 {
            (FloatClass::Infinite, signum * f64::INFINITY)
        } else {
            (FloatClass::Nan, f64::NAN)
        }
    } else if exponent_field == 0 {
        if mantissa_field == 0 {
            (FloatClass::Zero, signum * 0.0)
        } else {
            let value = signum * fraction * 2.0_f64.powi(1 - bias);
            (FloatClass::Subnormal, value)
        }
    } else {
        let exponent = exponent_field as i32 - bias;
        let value = signum * (1.0 + fraction) * 2.0_f64.powi(exponent);
        (FloatClass::Normal, value)
    };

    DecodedValue {
        format,
        bits,
        class,
        value,
    }
}
