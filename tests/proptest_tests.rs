use proptest::prelude::*;
use proptest::test_runner::Config;

use packed_vector::{
    Byte2, Byte2Normalized, Byte4, Byte4Normalized, Float2, Float4, Format, Half2, Half4,
    Short2, Short2Normalized, Short4, Short4Normalized, UByte2Normalized, UByte4,
    UByte4Normalized, UShort2, UShort2Normalized, UShort4, UShort4Normalized,
};

/// Checks that every component of `b` is within `delta` of `a`.
fn within(a: &[f32], b: &[f32], delta: f32) -> bool {
    let r = a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= delta);

    if !r {
        println!("delta: {}, left: {:?}, right: {:?}", delta, a, b);
    }

    r
}

proptest! {
    #![proptest_config(Config::with_cases(4096))]

    // Raw integer formats decode components exactly.

    #[test]
    fn pt_byte4_components_exact(x in any::<i8>(), y in any::<i8>(), z in any::<i8>(), w in any::<i8>()) {
        let v = Byte4::new(x, y, z, w);
        prop_assert_eq!(
            v.to_vector(),
            Float4::new(f32::from(x), f32::from(y), f32::from(z), f32::from(w))
        );
        prop_assert_eq!((v.x(), v.y(), v.z(), v.w()), (x, y, z, w));
    }

    #[test]
    fn pt_short4_components_exact(x in any::<i16>(), y in any::<i16>(), z in any::<i16>(), w in any::<i16>()) {
        let v = Short4::new(x, y, z, w);
        prop_assert_eq!(
            v.to_vector(),
            Float4::new(f32::from(x), f32::from(y), f32::from(z), f32::from(w))
        );
    }

    #[test]
    fn pt_ushort4_float_path_exact(x in any::<u16>(), y in any::<u16>(), z in any::<u16>(), w in any::<u16>()) {
        let v = UShort4::new(x, y, z, w);
        prop_assert_eq!(UShort4::from_vector(v.to_vector()), v);
    }

    #[test]
    fn pt_short2_float_path_exact(x in -32767i16..=32767, y in -32767i16..=32767) {
        let v = Short2::from_floats(f32::from(x), f32::from(y));
        prop_assert_eq!(v, Short2::new(x, y));
    }

    // Bit layout: component constructors and packed constructors agree.

    #[test]
    fn pt_byte2_layout(p in any::<u16>()) {
        let v = Byte2::from_packed(p);
        prop_assert_eq!(Byte2::new(v.x(), v.y()), v);
        prop_assert_eq!(p, (v.x() as u8 as u16) | ((v.y() as u8 as u16) << 8));
    }

    #[test]
    fn pt_ushort2_layout(p in any::<u32>()) {
        let v = UShort2::from_packed(p);
        prop_assert_eq!(UShort2::new(v.x(), v.y()), v);
        prop_assert_eq!(p, (v.x() as u32) | ((v.y() as u32) << 16));
    }

    #[test]
    fn pt_ubyte4_layout(p in any::<u32>()) {
        let v = UByte4::from_packed(p);
        prop_assert_eq!(UByte4::new(v.x(), v.y(), v.z(), v.w()), v);
        prop_assert_eq!(v.to_string(), format!("{:08X}", p));
    }

    // Clamping: anything beyond the range encodes like the boundary.

    #[test]
    fn pt_byte2_clamp(big in 127.0f32..1e30, small in -1e30f32..-127.0) {
        prop_assert_eq!(Byte2::from_floats(big, small), Byte2::new(127, -127));
    }

    #[test]
    fn pt_ushort2_clamp(big in 65535.0f32..1e30, small in -1e30f32..0.0) {
        prop_assert_eq!(UShort2::from_floats(big, small), UShort2::new(65535, 0));
    }

    #[test]
    fn pt_snorm_clamp(big in 1.0f32..1e30, small in -1e30f32..-1.0) {
        prop_assert_eq!(
            Short4Normalized::from_floats(big, small, big, small),
            Short4Normalized::from_floats(1.0, -1.0, 1.0, -1.0)
        );
    }

    #[test]
    fn pt_unorm_clamp(big in 1.0f32..1e30, small in -1e30f32..0.0) {
        prop_assert_eq!(
            UByte4Normalized::from_floats(big, small, big, small),
            UByte4Normalized::new(255, 0, 255, 0)
        );
    }

    // Normalized formats round-trip within one quantization step.

    #[test]
    fn pt_byte_snorm_precision(v in (-1.0f32..=1.0, -1.0f32..=1.0, -1.0f32..=1.0, -1.0f32..=1.0)) {
        let f = Float4::from(v);
        let step = 1.0 / 127.0;

        prop_assert!(within(&f.to_array(), &Byte4Normalized::from_vector(f).to_vector().to_array(), step));

        let f2 = Float2::new(v.0, v.1);
        prop_assert!(within(&f2.to_array(), &Byte2Normalized::from_vector(f2).to_vector().to_array(), step));
    }

    #[test]
    fn pt_short_snorm_precision(v in (-1.0f32..=1.0, -1.0f32..=1.0, -1.0f32..=1.0, -1.0f32..=1.0)) {
        let f = Float4::from(v);
        let step = 1.0 / 32767.0;

        prop_assert!(within(&f.to_array(), &Short4Normalized::from_vector(f).to_vector().to_array(), step));

        let f2 = Float2::new(v.0, v.1);
        prop_assert!(within(&f2.to_array(), &Short2Normalized::from_vector(f2).to_vector().to_array(), step));
    }

    #[test]
    fn pt_byte_unorm_precision(v in (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)) {
        let f = Float4::from(v);
        let step = 1.0 / 255.0;

        prop_assert!(within(&f.to_array(), &UByte4Normalized::from_vector(f).to_vector().to_array(), step));

        let f2 = Float2::new(v.0, v.1);
        prop_assert!(within(&f2.to_array(), &UByte2Normalized::from_vector(f2).to_vector().to_array(), step));
    }

    #[test]
    fn pt_short_unorm_precision(v in (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)) {
        let f = Float4::from(v);
        let step = 1.0 / 65535.0;

        prop_assert!(within(&f.to_array(), &UShort4Normalized::from_vector(f).to_vector().to_array(), step));

        let f2 = Float2::new(v.0, v.1);
        prop_assert!(within(&f2.to_array(), &UShort2Normalized::from_vector(f2).to_vector().to_array(), step));
    }

    // Normalized formats re-encode their own decoded values unchanged.

    #[test]
    fn pt_snorm_reencode(x in -127i8..=127, y in -127i8..=127, z in -127i8..=127, w in -127i8..=127) {
        let v = Byte4Normalized::new(x, y, z, w);
        prop_assert_eq!(Byte4Normalized::from_vector(v.to_vector()), v);
    }

    #[test]
    fn pt_unorm_reencode(x in any::<u16>(), y in any::<u16>()) {
        let v = UShort2Normalized::new(x, y);
        prop_assert_eq!(UShort2Normalized::from_vector(v.to_vector()), v);
    }

    // Half formats.

    #[test]
    fn pt_half_precision(v in (-65504.0f32..65504.0, -1.0f32..1.0)) {
        let d = Half2::from_floats(v.0, v.1).to_vector();

        // 11 bits of precision, rounded.
        prop_assert!((d.get_0() - v.0).abs() <= v.0.abs() / 2048.0 + 1e-7);
        prop_assert!((d.get_1() - v.1).abs() <= v.1.abs() / 2048.0 + 1e-7);
    }

    #[test]
    fn pt_half_reencode(p in any::<u64>()) {
        let v = Half4::from_packed(p);
        let d = v.to_vector();
        let has_nan = d.to_array().iter().any(|n| n.is_nan());

        if !has_nan {
            prop_assert_eq!(Half4::from_vector(d), v);
        }
    }

    // The runtime registry agrees with the codec types.

    #[test]
    fn pt_format_round_trip(index in 0usize..18, p in any::<u64>()) {
        let format = Format::ALL[index];
        let mask = if format.bits() == 64 { u64::MAX } else { (1u64 << format.bits()) - 1 };

        let decoded = format.decode(p);
        prop_assert_eq!(decoded.len(), format.arity());

        let text = format.format_packed(p);
        prop_assert_eq!(text.len() as u32, format.bits() / 4);
        prop_assert_eq!(format.parse_packed(&text), Ok(p & mask));

        // Encoding is idempotent on its own output.
        if let Ok(encoded) = format.encode(&decoded) {
            let redecoded = format.decode(encoded);
            if redecoded.iter().all(|n| !n.is_nan()) {
                prop_assert_eq!(format.encode(&redecoded), Ok(encoded));
            }
        }
    }
}
