//! Runtime selection of a packed format.
//!
//! The codec types are the primary interface, but tools that pick a format
//! from user input (a config file, a command line) need to go through a
//! value.  `Format` names every codec and forwards to it, with packed values
//! widened to `u64`.

use std::fmt;
use std::str::FromStr;

use floatn::FloatN;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::{
    Byte2, Byte2Normalized, Byte4, Byte4Normalized, Half2, Half4, PackedVector, Short2,
    Short2Normalized, Short4, Short4Normalized, UByte2, UByte2Normalized, UByte4,
    UByte4Normalized, UShort2, UShort2Normalized, UShort4, UShort4Normalized,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    Byte2,
    Byte2Normalized,
    Byte4,
    Byte4Normalized,
    UByte2,
    UByte2Normalized,
    UByte4,
    UByte4Normalized,
    Short2,
    Short2Normalized,
    Short4,
    Short4Normalized,
    UShort2,
    UShort2Normalized,
    UShort4,
    UShort4Normalized,
    Half2,
    Half4,
}

// Calls `$body` with `$T` bound to the codec type for `$format`.
macro_rules! with_codec {
    ($format:expr, $T:ident => $body:expr) => {
        match $format {
            Format::Byte2 => {
                type $T = Byte2;
                $body
            }
            Format::Byte2Normalized => {
                type $T = Byte2Normalized;
                $body
            }
            Format::Byte4 => {
                type $T = Byte4;
                $body
            }
            Format::Byte4Normalized => {
                type $T = Byte4Normalized;
                $body
            }
            Format::UByte2 => {
                type $T = UByte2;
                $body
            }
            Format::UByte2Normalized => {
                type $T = UByte2Normalized;
                $body
            }
            Format::UByte4 => {
                type $T = UByte4;
                $body
            }
            Format::UByte4Normalized => {
                type $T = UByte4Normalized;
                $body
            }
            Format::Short2 => {
                type $T = Short2;
                $body
            }
            Format::Short2Normalized => {
                type $T = Short2Normalized;
                $body
            }
            Format::Short4 => {
                type $T = Short4;
                $body
            }
            Format::Short4Normalized => {
                type $T = Short4Normalized;
                $body
            }
            Format::UShort2 => {
                type $T = UShort2;
                $body
            }
            Format::UShort2Normalized => {
                type $T = UShort2Normalized;
                $body
            }
            Format::UShort4 => {
                type $T = UShort4;
                $body
            }
            Format::UShort4Normalized => {
                type $T = UShort4Normalized;
                $body
            }
            Format::Half2 => {
                type $T = Half2;
                $body
            }
            Format::Half4 => {
                type $T = Half4;
                $body
            }
        }
    };
}

impl Format {
    pub const ALL: [Format; 18] = [
        Format::Byte2,
        Format::Byte2Normalized,
        Format::Byte4,
        Format::Byte4Normalized,
        Format::UByte2,
        Format::UByte2Normalized,
        Format::UByte4,
        Format::UByte4Normalized,
        Format::Short2,
        Format::Short2Normalized,
        Format::Short4,
        Format::Short4Normalized,
        Format::UShort2,
        Format::UShort2Normalized,
        Format::UShort4,
        Format::UShort4Normalized,
        Format::Half2,
        Format::Half4,
    ];

    /// The name of the codec type, e.g. `"Short2Normalized"`.
    pub fn name(self) -> &'static str {
        match self {
            Format::Byte2 => "Byte2",
            Format::Byte2Normalized => "Byte2Normalized",
            Format::Byte4 => "Byte4",
            Format::Byte4Normalized => "Byte4Normalized",
            Format::UByte2 => "UByte2",
            Format::UByte2Normalized => "UByte2Normalized",
            Format::UByte4 => "UByte4",
            Format::UByte4Normalized => "UByte4Normalized",
            Format::Short2 => "Short2",
            Format::Short2Normalized => "Short2Normalized",
            Format::Short4 => "Short4",
            Format::Short4Normalized => "Short4Normalized",
            Format::UShort2 => "UShort2",
            Format::UShort2Normalized => "UShort2Normalized",
            Format::UShort4 => "UShort4",
            Format::UShort4Normalized => "UShort4Normalized",
            Format::Half2 => "Half2",
            Format::Half4 => "Half4",
        }
    }

    /// Number of components.
    pub fn arity(self) -> usize {
        with_codec!(self, T => <<T as PackedVector>::Vector as FloatN>::LANES)
    }

    /// Width of the packed integer in bits.
    pub fn bits(self) -> u32 {
        with_codec!(self, T => <T as PackedVector>::BITS)
    }

    /// Encodes the first `arity()` values.
    ///
    /// Fails if fewer than `arity()` values are supplied.
    pub fn encode(self, values: &[f32]) -> Result<u64> {
        let packed: u64 = with_codec!(self, T => T::from_slice(values)?.packed_value().into());
        trace!(format = self.name(), ?values, packed, "encoded");
        Ok(packed)
    }

    /// Decodes the low `bits()` bits of `packed`.  Higher bits are ignored.
    pub fn decode(self, packed: u64) -> Vec<f32> {
        with_codec!(self, T => {
            let v = T::from_packed(packed as _).to_vector();
            (0..<<T as PackedVector>::Vector as FloatN>::LANES)
                .map(|i| v.get_n(i))
                .collect()
        })
    }

    /// Renders a packed value as fixed-width uppercase hex, the same way
    /// the codec types display themselves.
    pub fn format_packed(self, packed: u64) -> String {
        with_codec!(self, T => {
            T::from_packed(packed as _).to_string()
        })
    }

    /// Parses hex text (with or without a `0x` prefix) as a packed value of
    /// this format.
    pub fn parse_packed(self, text: &str) -> Result<u64> {
        let bits = self.bits();
        let digits = text
            .trim()
            .trim_start_matches("0x")
            .trim_start_matches("0X");

        let value = match u64::from_str_radix(digits, 16) {
            Ok(value) if bits == 64 || value >> bits == 0 => value,
            _ => {
                debug!(format = self.name(), text, "rejected packed value");
                return Err(Error::invalid_packed(text, bits));
            }
        };

        Ok(value)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Matches codec type names case-insensitively, ignoring `-` and `_`, so
    /// `"ubyte4-normalized"` names `UByte4Normalized`.
    fn from_str(s: &str) -> Result<Format> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Format::ALL
            .iter()
            .copied()
            .find(|format| format.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &format in Format::ALL.iter() {
            assert_eq!(format.name().parse::<Format>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!("ubyte4-normalized".parse::<Format>(), Ok(Format::UByte4Normalized));
        assert_eq!("SHORT_2".parse::<Format>(), Ok(Format::Short2));
        assert_eq!(
            "Byte3".parse::<Format>(),
            Err(Error::UnknownFormat("Byte3".into()))
        );
    }

    #[test]
    fn arity_and_bits() {
        assert_eq!(Format::Byte2.arity(), 2);
        assert_eq!(Format::Byte2.bits(), 16);
        assert_eq!(Format::UByte4Normalized.bits(), 32);
        assert_eq!(Format::Short2.bits(), 32);
        assert_eq!(Format::UShort4.arity(), 4);
        assert_eq!(Format::UShort4.bits(), 64);
        assert_eq!(Format::Half2.bits(), 32);
        assert_eq!(Format::Half4.bits(), 64);

        for &format in Format::ALL.iter() {
            let per_component = format.bits() as usize / format.arity();
            assert!(per_component == 8 || per_component == 16);
        }
    }

    #[test]
    fn encode_matches_codecs() {
        assert_eq!(
            Format::Byte4.encode(&[125.0, -125.0, 100.0, -5.0]),
            Ok(4217668477)
        );
        assert_eq!(Format::Short2.encode(&[250.0, 450.0]), Ok(29491450));
        assert_eq!(
            Format::Half4.encode(&[1.0, 1.0, 1.0, 1.0]),
            Ok(0x3C00_3C00_3C00_3C00)
        );
    }

    #[test]
    fn encode_too_few_values() {
        assert_eq!(
            Format::UShort4Normalized.encode(&[0.5, 0.5]),
            Err(Error::invalid_argument(4, 2))
        );
    }

    #[test]
    fn decode() {
        assert_eq!(
            Format::Byte4.decode(4217668477),
            vec![125.0, -125.0, 100.0, -5.0]
        );
        assert_eq!(Format::Short2Normalized.decode(0x8000), vec![-1.0, 0.0]);
        // Bits above the format's width are ignored.
        assert_eq!(Format::UByte2.decode(0xFFFF_0201), vec![1.0, 2.0]);
    }

    #[test]
    fn format_packed() {
        assert_eq!(Format::UByte2.format_packed(0xA), "000A");
        assert_eq!(Format::Byte4Normalized.format_packed(0), "00000000");
        assert_eq!(Format::Half4.format_packed(1), "0000000000000001");
    }

    #[test]
    fn parse_packed() {
        assert_eq!(Format::Byte4.parse_packed("FB64837D"), Ok(4217668477));
        assert_eq!(Format::Byte4.parse_packed("0xfb64837d"), Ok(4217668477));
        assert_eq!(
            Format::Short4.parse_packed("FFFFFFFFFFFFFFFF"),
            Ok(u64::MAX)
        );
        assert_eq!(
            Format::Byte2.parse_packed("10000"),
            Err(Error::invalid_packed("10000", 16))
        );
        assert!(Format::Byte2.parse_packed("xyz").is_err());
        assert!(Format::Byte2.parse_packed("").is_err());
    }
}
