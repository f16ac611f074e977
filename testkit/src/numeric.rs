//! Numeric-kind capabilities used by the simulators
//!
//! [`SimulatedValue`] describes how a value type is drawn and what its
//! defaults are. Floating kinds draw real values, integral kinds draw
//! integers with an exclusive upper bound, and unsigned kinds default their
//! lower bound to zero instead of -10.
//!
//! [`CompressedIndex`] covers the integer types used for the secondary
//! indices and the row pointers of a compressed sparse matrix.

use crate::rng::RngManager;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A numeric type that the simulators can produce.
pub trait SimulatedValue:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + 'static
{
    /// Value left in slots whose density roll failed.
    fn zero() -> Self;

    /// Default inclusive lower bound: -10, or 0 for unsigned kinds.
    fn default_lower() -> Self;

    /// Default exclusive upper bound.
    fn default_upper() -> Self;

    /// Whether `[lower, upper)` is a non-empty range that can be sampled.
    fn valid_bounds(lower: Self, upper: Self) -> bool;

    /// Draw a uniform value in `[lower, upper)`.
    ///
    /// Callers must check [`SimulatedValue::valid_bounds`] first.
    fn draw_uniform(rng: &mut RngManager, lower: Self, upper: Self) -> Self;

    /// Append the canonical little-endian encoding of `self`.
    fn write_le_bytes(self, out: &mut Vec<u8>);
}

macro_rules! impl_float {
    ($t:ty, $unit:ident) => {
        impl SimulatedValue for $t {
            fn zero() -> Self {
                0.0
            }

            fn default_lower() -> Self {
                -10.0
            }

            fn default_upper() -> Self {
                10.0
            }

            fn valid_bounds(lower: Self, upper: Self) -> bool {
                lower.is_finite() && upper.is_finite() && lower < upper && (upper - lower).is_finite()
            }

            fn draw_uniform(rng: &mut RngManager, lower: Self, upper: Self) -> Self {
                let width = upper - lower;
                loop {
                    // Rounding can land exactly on `upper`; redraw to keep it exclusive.
                    let value = lower + width * rng.$unit();
                    if value < upper {
                        return value;
                    }
                }
            }

            fn write_le_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    };
}

macro_rules! impl_integer {
    ($t:ty, $lower:expr, $wire:ty) => {
        impl SimulatedValue for $t {
            fn zero() -> Self {
                0
            }

            fn default_lower() -> Self {
                $lower
            }

            fn default_upper() -> Self {
                10
            }

            fn valid_bounds(lower: Self, upper: Self) -> bool {
                lower < upper
            }

            fn draw_uniform(rng: &mut RngManager, lower: Self, upper: Self) -> Self {
                debug_assert!(lower < upper);
                let span = (upper as i128 - lower as i128) as u64;
                (lower as i128 + rng.below(span) as i128) as $t
            }

            fn write_le_bytes(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&(self as $wire).to_le_bytes());
            }
        }
    };
}

impl_float!(f64, next_f64);
impl_float!(f32, next_f32);

impl_integer!(i8, -10, i8);
impl_integer!(i16, -10, i16);
impl_integer!(i32, -10, i32);
impl_integer!(i64, -10, i64);
impl_integer!(isize, -10, i64);
impl_integer!(u8, 0, u8);
impl_integer!(u16, 0, u16);
impl_integer!(u32, 0, u32);
impl_integer!(u64, 0, u64);
impl_integer!(usize, 0, u64);

/// An integer type usable as a sparse index or pointer.
pub trait CompressedIndex: Copy + PartialOrd + fmt::Debug + 'static {
    /// Convert from `usize`, or `None` if the value does not fit.
    fn from_usize(value: usize) -> Option<Self>;

    /// Convert to `usize`, or `None` if negative or too large.
    fn to_usize(self) -> Option<usize>;

    /// Append the canonical little-endian encoding of `self`.
    fn write_le_bytes(self, out: &mut Vec<u8>);
}

macro_rules! impl_compressed_index {
    ($($t:ty => $wire:ty),* $(,)?) => {
        $(
            impl CompressedIndex for $t {
                fn from_usize(value: usize) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                fn write_le_bytes(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&(self as $wire).to_le_bytes());
                }
            }
        )*
    };
}

impl_compressed_index!(
    i8 => i8,
    i16 => i16,
    i32 => i32,
    i64 => i64,
    isize => i64,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => u64,
);
