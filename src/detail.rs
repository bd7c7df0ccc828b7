// This file is part of the minifloat project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details
//!
//! This module is not considered part of the public API.  Symbols here are
//! public for macros to work.  They are not meant to be used directly.

use crate::{Format, NanStyle};

const F32: Format = Format::BINARY32;

/// Implicit leading bit of a normal [`f32`]
const F32_IMPLICIT_BIT: u32 = 1 << F32.exponent_offset();

/// Split `raw` into sign, exponent, and mantissa fields
///
/// Bits above `format.width()` must be clear.
#[must_use]
pub const fn decompose(raw: u32, format: Format) -> (u32, u32, u32) {
    let sign = raw >> format.sign_offset() & 1;
    let exponent = raw >> format.exponent_offset() & format.exponent_mask();
    let mantissa = raw & format.mantissa_mask();
    (sign, exponent, mantissa)
}

/// Decode `raw` in `format` into the bits of the equal [`f32`]
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn to_binary32(raw: u32, format: Format) -> u32 {
    let (sign, exponent, mantissa) = decompose(raw, format);
    let sign = sign << F32.sign_offset();
    let mut mantissa = mantissa << (F32.mantissa_bits() - format.mantissa_bits());
    let special = F32.exponent_mask() << F32.exponent_offset();

    match format.nan_style() {
        NanStyle::IEEE if exponent == format.exponent_mask() => return sign | special | mantissa,
        NanStyle::FN if format.is_reserved_nan(raw) => return sign | special | mantissa,
        _ => (),
    }

    let mut exponent = exponent as i32;

    if exponent == 0 {
        if mantissa == 0 {
            return sign;
        }

        // Subnormal: shift until the implicit bit appears
        exponent = 1;

        while mantissa & F32_IMPLICIT_BIT == 0 {
            mantissa <<= 1;
            exponent -= 1;
        }

        mantissa &= F32.mantissa_mask();
    }

    let exponent = exponent + F32.bias() - format.bias();

    // Only reachable when the biases match, i.e. 8 exponent bits
    if exponent <= 0 {
        return sign | (mantissa | F32_IMPLICIT_BIT) >> (1 - exponent) as u32;
    }

    sign | (exponent as u32) << F32.exponent_offset() | mantissa
}
