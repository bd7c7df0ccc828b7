// This file is part of the minifloat project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Built-in formats

crate::minifloat!(
    /// Brain floating point, or bfloat16
    ///
    /// It has the same exponent range as [`f32`] with 7 explicit mantissa
    /// bits.  See <https://en.wikipedia.org/wiki/Bfloat16_floating-point_format>
    pub struct BF16(u16): 8, 7
);

crate::minifloat!(
    /// IEEE 754 binary16, or half precision
    ///
    /// See <https://en.wikipedia.org/wiki/Half-precision_floating-point_format>
    pub struct F16(u16): 5, 10
);

crate::minifloat!(
    /// 8-bit float with 4 exponent bits and 3 mantissa bits
    ///
    /// It follows IEEE 754 conventions, so it can store values up to ±240,
    /// ±∞, and NaN.
    pub struct F8E4M3(u8): 4, 3
);

crate::minifloat!(
    /// 8-bit float with 4 exponent bits and 3 mantissa bits, finite only
    ///
    /// It can store values up to ±448 and NaN, but not infinity.  NaN is
    /// exactly `0x7F` and `0xFF`.  See
    /// <https://github.com/jax-ml/ml_dtypes#float8_e4m3fn>
    pub struct F8E4M3FN(u8): 4, 3, FN
);

crate::minifloat!(
    /// 8-bit float with 5 exponent bits and 2 mantissa bits
    ///
    /// It can store values up to ±57344, ±∞, and NaN.
    pub struct F8E5M2(u8): 5, 2
);

impl BF16 {
    /// Positive infinity
    pub const INFINITY: Self = Self(0x7F80);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(0xFF80);

    /// Load a little-endian value
    #[must_use]
    pub const fn decode_le(bytes: [u8; 2]) -> Self {
        Self::from_le_bytes(bytes)
    }
}

impl F16 {
    /// Positive infinity
    pub const INFINITY: Self = Self(0x7C00);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(0xFC00);

    /// Load a little-endian value
    #[must_use]
    pub const fn decode_le(bytes: [u8; 2]) -> Self {
        Self::from_le_bytes(bytes)
    }
}

impl F8E4M3 {
    /// Positive infinity
    pub const INFINITY: Self = Self(0x78);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(0xF8);
}

impl F8E5M2 {
    /// Positive infinity
    pub const INFINITY: Self = Self(0x7C);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self(0xFC);
}

// SAFETY: every type is `repr(transparent)` over an unsigned integer, and
// every bit pattern is a valid value.
#[cfg(feature = "bytemuck")]
macro_rules! impl_pod {
    ($($name:ident)*) => {$(
        unsafe impl bytemuck::Zeroable for $name {}
        unsafe impl bytemuck::Pod for $name {}
    )*};
}

#[cfg(feature = "bytemuck")]
impl_pod!(BF16 F16 F8E4M3 F8E4M3FN F8E5M2);
