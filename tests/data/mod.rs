// This file is part of the minifloat project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reference decodings as `(bits, value, sign, exponent, mantissa)`
//!
//! 8-bit tables are exhaustive.  16-bit tables sample every 257th code plus
//! the smallest subnormals and the special values of both signs.
