// This file is part of the minifloat project.
//
// Copyright (C) 2024 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Decode minifloats into [`f32`]
//!
//! This crate decodes the 16-bit and 8-bit floating-point encodings common in
//! machine learning into IEEE 754 binary32.  Every format is described by a
//! [`Format`] value and decoded by the same const synthesizer, so decoding is
//! total: each bit pattern maps to a finite value, a signed zero, a signed
//! infinity where the format has one, or a NaN.
//!
//! Built-in formats are [`BF16`], [`F16`], [`F8E4M3`], [`F8E4M3FN`], and
//! [`F8E5M2`].  More can be declared with [`minifloat!`].
#![no_std]

#[macro_use]
mod macros;

pub mod detail;
mod types;

pub use types::*;

#[doc(hidden)]
pub use num_traits;

/// Special value policy of a minifloat format
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NanStyle {
    /// The all-ones exponent encodes infinity (zero mantissa) or NaN.
    IEEE,

    /// Finite only.  The all-ones exponent is an ordinary exponent except
    /// when the mantissa is also all ones, which encodes NaN.
    FN,
}

/// Bit layout of a minifloat format
///
/// A layout is fully determined by its total width, the width of its
/// exponent field, and its [`NanStyle`].  The sign takes the top bit, the
/// exponent follows, and the mantissa takes the remaining low bits.  The bias
/// is always 2<sup>`exponent_bits` - 1</sup> - 1.
///
/// ```
/// use minifloat_decode::{Format, NanStyle};
///
/// const E4M3FN: Format = Format::new(8, 4, NanStyle::FN);
/// assert_eq!(E4M3FN.mantissa_bits(), 3);
/// assert_eq!(E4M3FN.bias(), 7);
/// assert_eq!(E4M3FN.nan_codes(), Some([0x7F, 0xFF]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    width: u32,
    exponent_bits: u32,
    nan: NanStyle,
}

impl Format {
    /// IEEE 754 binary32, the decoding target
    pub const BINARY32: Self = Self::new(32, 8, NanStyle::IEEE);

    /// Describe a layout
    ///
    /// # Panics
    ///
    /// Panics if the layout cannot be decoded into [`f32`].  In const
    /// context, this is a compile error.
    #[must_use]
    pub const fn new(width: u32, exponent_bits: u32, nan: NanStyle) -> Self {
        assert!(width >= 8 && width <= 32, "width must be between 8 and 32");
        assert!(exponent_bits >= 2, "at least 2 exponent bits are required");
        assert!(exponent_bits <= 8, "exponent does not fit in binary32");
        assert!(exponent_bits < width, "no room for the sign bit");
        assert!(width - exponent_bits - 1 <= 23, "mantissa does not fit in binary32");

        if let NanStyle::FN = nan {
            assert!(exponent_bits < 8, "extended exponent does not fit in binary32");
            assert!(width - exponent_bits > 1, "FN requires a mantissa");
        }

        Self { width, exponent_bits, nan }
    }

    /// Total width in bits
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Width of the exponent field
    #[must_use]
    pub const fn exponent_bits(self) -> u32 {
        self.exponent_bits
    }

    /// Width of the mantissa field, excluding the implicit bit
    #[must_use]
    pub const fn mantissa_bits(self) -> u32 {
        self.width - self.exponent_bits - 1
    }

    /// Special value policy
    #[must_use]
    pub const fn nan_style(self) -> NanStyle {
        self.nan
    }

    /// Bit index of the sign
    #[must_use]
    pub const fn sign_offset(self) -> u32 {
        self.width - 1
    }

    /// Bit index where the exponent field begins
    #[must_use]
    pub const fn exponent_offset(self) -> u32 {
        self.mantissa_bits()
    }

    /// Exponent field mask, right-aligned
    #[must_use]
    pub const fn exponent_mask(self) -> u32 {
        (1 << self.exponent_bits) - 1
    }

    /// Mantissa field mask
    #[must_use]
    pub const fn mantissa_mask(self) -> u32 {
        (1 << self.mantissa_bits()) - 1
    }

    /// Exponent bias
    #[must_use]
    pub const fn bias(self) -> i32 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    /// Whether the all-ones exponent with zero mantissa encodes infinity
    #[must_use]
    pub const fn has_infinity(self) -> bool {
        matches!(self.nan, NanStyle::IEEE)
    }

    /// Encodings reserved for NaN regardless of the generic exponent rule
    ///
    /// Only [`NanStyle::FN`] reserves codes: the positive and the negative
    /// encoding with all-ones exponent and mantissa.
    #[must_use]
    pub const fn nan_codes(self) -> Option<[u32; 2]> {
        match self.nan {
            NanStyle::IEEE => None,
            NanStyle::FN => Some([self.nan_bits(), self.nan_bits() | 1 << self.sign_offset()]),
        }
    }

    /// Check if `raw` is one of [`nan_codes`][Self::nan_codes]
    #[must_use]
    pub const fn is_reserved_nan(self, raw: u32) -> bool {
        matches!(self.nan, NanStyle::FN) && raw & !(1 << self.sign_offset()) == self.nan_bits()
    }

    /// Canonical positive NaN: all-ones exponent and mantissa
    #[must_use]
    pub const fn nan_bits(self) -> u32 {
        self.exponent_mask() << self.exponent_offset() | self.mantissa_mask()
    }

    /// Positive infinity, if the format has it
    #[must_use]
    pub const fn infinity_bits(self) -> Option<u32> {
        match self.nan {
            NanStyle::IEEE => Some(self.exponent_mask() << self.exponent_offset()),
            NanStyle::FN => None,
        }
    }

    /// Largest finite value
    #[must_use]
    pub const fn max_bits(self) -> u32 {
        match self.nan {
            NanStyle::IEEE => (self.exponent_mask() - 1) << self.exponent_offset() | self.mantissa_mask(),
            NanStyle::FN => self.nan_bits() - 1,
        }
    }

    /// Smallest positive normal value
    #[must_use]
    pub const fn min_positive_bits(self) -> u32 {
        1 << self.exponent_offset()
    }

    /// Smallest positive subnormal value
    #[must_use]
    pub const fn min_subnormal_bits(self) -> u32 {
        1
    }
}

/// Common interface of minifloat types
///
/// Types generated by [`minifloat!`] implement this trait.  Constants are
/// derived from [`FORMAT`][Self::FORMAT] and follow the conventions of
/// [`f32`], e.g. [`MAX_EXP`][Self::MAX_EXP] is one more than the largest
/// finite exponent.
pub trait Minifloat: Copy {
    /// Raw storage
    type Bits: Copy + Into<u32>;

    /// Bit layout
    const FORMAT: Format;

    /// Exponent bit-width
    const E: u32 = Self::FORMAT.exponent_bits();

    /// Explicit mantissa bit-width
    const M: u32 = Self::FORMAT.mantissa_bits();

    /// NaN encoding style
    const N: NanStyle = Self::FORMAT.nan_style();

    /// Exponent bias
    const B: i32 = Self::FORMAT.bias();

    /// The radix of the internal representation
    const RADIX: u32 = 2;

    /// The number of digits in the significand, including the implicit bit
    const MANTISSA_DIGITS: u32 = Self::M + 1;

    /// One greater than the maximum possible power of 2 exponent
    const MAX_EXP: i32 = (1 << Self::E) - Self::B - matches!(Self::N, NanStyle::IEEE) as i32;

    /// One greater than the minimum possible normal power of 2 exponent
    const MIN_EXP: i32 = 2 - Self::B;

    /// One representation of NaN
    const NAN: Self;

    /// Raw transmutation from bits
    #[must_use]
    fn from_bits(v: Self::Bits) -> Self;

    /// Raw transmutation to bits
    #[must_use]
    fn to_bits(self) -> Self::Bits;

    /// Sign, exponent, and mantissa fields
    #[must_use]
    fn components(self) -> (u8, u8, Self::Bits);

    /// Exact conversion to [`f32`]
    #[must_use]
    fn to_f32(self) -> f32 {
        f32::from_bits(detail::to_binary32(self.to_bits().into(), Self::FORMAT))
    }

    /// Exact conversion to [`f64`]
    #[must_use]
    fn to_f64(self) -> f64 {
        self.to_f32().into()
    }

    /// Check if the value is NaN
    #[must_use]
    fn is_nan(self) -> bool {
        let bits: u32 = self.to_bits().into();
        let format = Self::FORMAT;

        match format.infinity_bits() {
            Some(infinity) => bits & !(1 << format.sign_offset()) > infinity,
            None => format.is_reserved_nan(bits),
        }
    }

    /// Check if the value is positive or negative infinity
    #[must_use]
    fn is_infinite(self) -> bool {
        let bits: u32 = self.to_bits().into();
        Self::FORMAT.infinity_bits() == Some(bits & !(1 << Self::FORMAT.sign_offset()))
    }

    /// Check if the value is neither infinite nor NaN
    #[must_use]
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Check if the sign bit is set
    #[must_use]
    fn is_sign_negative(self) -> bool {
        let bits: u32 = self.to_bits().into();
        bits >> Self::FORMAT.sign_offset() & 1 == 1
    }

    /// Check if the sign bit is clear
    #[must_use]
    fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }
}

/// Sign, exponent, and mantissa fields of an [`f32`]
///
/// ```
/// assert_eq!(minifloat_decode::f32_components(-2.0), (1, 128, 0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn f32_components(x: f32) -> (u8, u8, u32) {
    let (sign, exponent, mantissa) = detail::decompose(x.to_bits(), Format::BINARY32);
    (sign as u8, exponent as u8, mantissa)
}
