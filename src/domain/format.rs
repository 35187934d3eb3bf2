//! The floating-point format family.

use clap::ValueEnum;

/// A floating-point bit layout supported by the viewer.
///
/// Every layout is modeled as one sign bit followed by `exponent_bits`
/// exponent bits and `mantissa_bits` mantissa bits, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FloatFormat {
    /// IEEE 754 binary32.
    Fp32,
    /// IEEE 754 binary16.
    Fp16,
    /// bfloat16: binary32 with the mantissa truncated to 7 bits.
    Bf16,
    /// TensorFloat-32: 8 exponent and 10 mantissa bits.
    Tf32,
    /// 8-bit float with 4 exponent and 3 mantissa bits.
    #[default]
    #[value(name = "fp8e4m3")]
    Fp8E4M3,
    /// 8-bit float with 5 exponent and 2 mantissa bits.
    #[value(name = "fp8e5m2")]
    Fp8E5M2,
    /// 4-bit float with 2 exponent bits and 1 mantissa bit.
    Fp4,
    /// 8-bit exponent-only scale format.
    Ue8m0,
}

impl FloatFormat {
    /// Exponent field width in bits.
    #[must_use]
    pub const fn exponent_bits(self) -> u8 {
        match self {
            Self::Fp32 | Self::Bf16 | Self::Tf32 | Self::Ue8m0 => 8,
            Self::Fp16 | Self::Fp8E5M2 => 5,
            Self::Fp8E4M3 => 4,
            Self::Fp4 => 2,
        }
    }

    /// Mantissa field width in bits.
    #[must_use]
    pub const fn mantissa_bits(self) -> u8 {
        match self {
            Self::Fp32 => 23,
            Self::Fp16 | Self::Tf32 => 10,
            Self::Bf16 => 7,
            Self::Fp8E4M3 => 3,
            Self::Fp8E5M2 => 2,
            Self::Fp4 => 1,
            Self::Ue8m0 => 0,
        }
    }

    /// Total encoded width in bits, including the sign bit.
    #[must_use]
    pub const fn total_bits(self) -> u8 {
        1 + self.exponent_bits() + self.mantissa_bits()
    }

    /// Number of hex digits needed to write a full bit pattern.
    #[must_use]
    pub const fn hex_digits(self) -> usize {
        (self.total_bits() as usize).div_ceil(4)
    }

    /// Stable lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fp32 => "fp32",
            Self::Fp16 => "fp16",
            Self::Bf16 => "bf16",
            Self::Tf32 => "tf32",
            Self::Fp8E4M3 => "fp8e4m3",
            Self::Fp8E5M2 => "fp8e5m2",
            Self::Fp4 => "fp4",
            Self::Ue8m0 => "ue8m0",
        }
    }

    /// All supported formats, in display order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Fp32,
            Self::Fp16,
            Self::Bf16,
            Self::Tf32,
            Self::Fp8E4M3,
            Self::Fp8E5M2,
            Self::Fp4,
            Self::Ue8m0,
        ]
    }
}

impl std::fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
