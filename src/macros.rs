// This file is part of the minifloat project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Define a minifloat type backed by an unsigned integer
///
/// The syntax is `minifloat!(vis struct Name(bits): E, M)` with an optional
/// trailing [`NanStyle`][crate::NanStyle] variant, which defaults to `IEEE`.
/// The sign, `E` exponent bits, and `M` mantissa bits must fill the storage
/// exactly.
///
/// ```
/// minifloat_decode::minifloat!(pub struct F8E3M4(u8): 3, 4);
/// minifloat_decode::minifloat!(pub struct F8E3M4FN(u8): 3, 4, FN);
///
/// assert_eq!(F8E3M4::from_bits(0x30).to_f32(), 1.0);
/// assert_eq!(F8E3M4FN::MAX.to_f32(), 30.0);
/// ```
#[macro_export]
macro_rules! minifloat {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($bits:ty): $e:expr, $m:expr) => {
        $crate::minifloat!($(#[$attr])* $vis struct $name($bits): $e, $m, IEEE);
    };
    ($(#[$attr:meta])* $vis:vis struct $name:ident($bits:ty): $e:expr, $m:expr, $n:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default)]
        #[repr(transparent)]
        $vis struct $name($bits);

        const _: () = assert!(
            1 + $e + $m == <$bits>::BITS,
            "sign, exponent, and mantissa must fill the storage"
        );

        impl $name {
            /// One representation of NaN
            pub const NAN: Self = Self::from_format_bits(<Self as $crate::Minifloat>::FORMAT.nan_bits());

            /// Largest finite value
            pub const MAX: Self = Self::from_format_bits(<Self as $crate::Minifloat>::FORMAT.max_bits());

            /// Smallest finite value
            pub const MIN: Self = Self::from_format_bits(
                <Self as $crate::Minifloat>::FORMAT.max_bits()
                    | 1 << <Self as $crate::Minifloat>::FORMAT.sign_offset(),
            );

            /// Smallest positive normal value
            pub const MIN_POSITIVE: Self =
                Self::from_format_bits(<Self as $crate::Minifloat>::FORMAT.min_positive_bits());

            /// Smallest positive subnormal value
            pub const MIN_POSITIVE_SUBNORMAL: Self =
                Self::from_format_bits(<Self as $crate::Minifloat>::FORMAT.min_subnormal_bits());

            #[allow(clippy::cast_possible_truncation)]
            const fn from_format_bits(v: u32) -> Self {
                Self(v as $bits)
            }

            /// Raw transmutation from bits
            #[must_use]
            pub const fn from_bits(v: $bits) -> Self {
                Self(v)
            }

            /// Raw transmutation to bits
            #[must_use]
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Sign, exponent, and mantissa fields
            #[must_use]
            #[allow(clippy::cast_possible_truncation)]
            pub const fn components(self) -> (u8, u8, $bits) {
                let (sign, exponent, mantissa) =
                    $crate::detail::decompose(self.0 as u32, <Self as $crate::Minifloat>::FORMAT);
                (sign as u8, exponent as u8, mantissa as $bits)
            }

            /// Exact conversion to [`f32`]
            #[must_use]
            pub const fn to_f32(self) -> f32 {
                f32::from_bits($crate::detail::to_binary32(self.0 as u32, <Self as $crate::Minifloat>::FORMAT))
            }

            /// Create a value from its little-endian representation
            #[must_use]
            pub const fn from_le_bytes(bytes: [u8; ::core::mem::size_of::<$bits>()]) -> Self {
                Self(<$bits>::from_le_bytes(bytes))
            }

            /// Create a value from its big-endian representation
            #[must_use]
            pub const fn from_be_bytes(bytes: [u8; ::core::mem::size_of::<$bits>()]) -> Self {
                Self(<$bits>::from_be_bytes(bytes))
            }

            /// Decode a little-endian buffer
            ///
            /// A trailing partial element is ignored.
            pub fn decode_le_iter(bytes: &[u8]) -> impl Iterator<Item = Self> + '_ {
                bytes.chunks_exact(::core::mem::size_of::<$bits>()).map(|chunk| {
                    let mut buffer = [0; ::core::mem::size_of::<$bits>()];
                    buffer.copy_from_slice(chunk);
                    Self::from_le_bytes(buffer)
                })
            }
        }

        impl $crate::Minifloat for $name {
            type Bits = $bits;
            const FORMAT: $crate::Format = $crate::Format::new(<$bits>::BITS, $e, $crate::NanStyle::$n);
            const NAN: Self = $name::NAN;

            fn from_bits(v: $bits) -> Self {
                Self(v)
            }

            fn to_bits(self) -> $bits {
                self.0
            }

            fn components(self) -> (u8, u8, $bits) {
                $name::components(self)
            }

            fn to_f32(self) -> f32 {
                $name::to_f32(self)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $name::to_f32(*self) == $name::to_f32(*other)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                $name::to_f32(*self).partial_cmp(&$name::to_f32(*other))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&$name::to_f32(*self), f)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$name::to_f32(*self), f)
            }
        }

        impl From<$name> for f32 {
            fn from(x: $name) -> Self {
                $name::to_f32(x)
            }
        }

        impl From<$name> for f64 {
            fn from(x: $name) -> Self {
                $name::to_f32(x).into()
            }
        }

        impl $crate::num_traits::ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                $crate::num_traits::ToPrimitive::to_i64(&$name::to_f32(*self))
            }

            fn to_u64(&self) -> Option<u64> {
                $crate::num_traits::ToPrimitive::to_u64(&$name::to_f32(*self))
            }

            fn to_f32(&self) -> Option<f32> {
                Some($name::to_f32(*self))
            }

            fn to_f64(&self) -> Option<f64> {
                Some($name::to_f32(*self).into())
            }
        }

        impl $crate::num_traits::FromBytes for $name {
            type Bytes = [u8; ::core::mem::size_of::<$bits>()];

            fn from_be_bytes(bytes: &Self::Bytes) -> Self {
                $name::from_be_bytes(*bytes)
            }

            fn from_le_bytes(bytes: &Self::Bytes) -> Self {
                $name::from_le_bytes(*bytes)
            }
        }
    };
}
