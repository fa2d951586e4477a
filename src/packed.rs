use std::fmt::{Debug, Display};
use std::hash::Hash;

use floatn::FloatN;
use tracing::debug;

use crate::error::{Error, Result};

/// A fixed-width integer encoding of a small tuple of float components.
///
/// Every packed format stores nothing but its packed integer, so equality
/// and hashing are bitwise.  Component 0 occupies the lowest bits of the
/// packed integer, and each following component sits at the next
/// element-width offset.
pub trait PackedVector: Copy + Eq + Hash + Debug + Display {
    /// The integer type holding all components.
    type Packed: Copy + Into<u64>;

    /// The full-precision tuple this format encodes and decodes.
    type Vector: FloatN;

    /// Width of `Packed` in bits.
    const BITS: u32;

    /// Wraps a packed integer verbatim.  All bit patterns are valid.
    fn from_packed(packed: Self::Packed) -> Self;

    fn packed_value(&self) -> Self::Packed;

    /// Encodes a full-precision tuple, clamping and rounding as the format
    /// dictates.
    fn from_vector(vector: Self::Vector) -> Self;

    /// Decodes to a full-precision tuple.
    fn to_vector(&self) -> Self::Vector;

    /// Encodes the first `Vector::LANES` values of a slice.
    ///
    /// Fails with `Error::InvalidArgument` if fewer values than that are
    /// supplied.  Extra values are ignored.
    fn from_slice(values: &[f32]) -> Result<Self> {
        match <Self::Vector as FloatN>::from_slice(values) {
            Some(vector) => Ok(Self::from_vector(vector)),
            None => {
                let expected = <Self::Vector as FloatN>::LANES;
                debug!(
                    expected,
                    actual = values.len(),
                    "too few components to build packed vector"
                );
                Err(Error::invalid_argument(expected, values.len()))
            }
        }
    }
}

/// Implements the parts of a packed format that don't depend on its
/// encoding: packed access, the `PackedVector` trait, hex `Display`, and
/// conversions.
///
/// The type must be a struct with a single `packed` field and inherent
/// `from_vector()` and `to_vector()` methods.
macro_rules! impl_packed_vector {
    ($name:ident, $packed:ty, $vector:ty) => {
        impl $name {
            /// Wraps a packed integer verbatim.
            #[inline(always)]
            pub const fn from_packed(packed: $packed) -> $name {
                $name { packed }
            }

            /// Returns the packed integer.
            #[inline(always)]
            pub const fn packed_value(&self) -> $packed {
                self.packed
            }
        }

        impl $crate::PackedVector for $name {
            type Packed = $packed;
            type Vector = $vector;

            const BITS: u32 = <$packed>::BITS;

            #[inline(always)]
            fn from_packed(packed: $packed) -> $name {
                $name::from_packed(packed)
            }

            #[inline(always)]
            fn packed_value(&self) -> $packed {
                self.packed
            }

            #[inline(always)]
            fn from_vector(vector: $vector) -> $name {
                $name::from_vector(vector)
            }

            #[inline(always)]
            fn to_vector(&self) -> $vector {
                $name::to_vector(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "{:0width$X}",
                    self.packed,
                    width = (<$packed>::BITS / 4) as usize
                )
            }
        }

        impl From<$vector> for $name {
            #[inline(always)]
            fn from(vector: $vector) -> $name {
                $name::from_vector(vector)
            }
        }

        impl From<$name> for $vector {
            #[inline(always)]
            fn from(v: $name) -> $vector {
                v.to_vector()
            }
        }

        impl From<$packed> for $name {
            #[inline(always)]
            fn from(packed: $packed) -> $name {
                $name { packed }
            }
        }

        impl From<$name> for $packed {
            #[inline(always)]
            fn from(v: $name) -> $packed {
                v.packed
            }
        }
    };
}
