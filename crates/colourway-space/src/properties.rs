//! Round-trip and symmetry properties across the conversion graph.

use proptest::prelude::*;

use crate::{Colour, ColourModel, Hsl, Hwb, Lab, Lch, Linear, Rgb, Space, Xyy, Xyz, Yuv};

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

/// Component values reaching past the displayable range on both sides.
fn wide() -> impl Strategy<Value = f64> {
    -0.5f64..=1.5
}

fn rgb() -> impl Strategy<Value = Rgb> {
    (unit(), unit(), unit()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn lab() -> impl Strategy<Value = Lab> {
    (0.0f64..100.0, -128.0f64..128.0, -128.0f64..128.0).prop_map(|(l, a, b)| Lab::new(l, a, b))
}

proptest! {
    #[test]
    fn rgb_hsl_roundtrip(rgb in rgb()) {
        let back = Rgb::from(Hsl::from(rgb));
        prop_assert!(back.equal_within(&rgb, 1e-9), "{rgb:?} -> {back:?}");
    }

    #[test]
    fn rgb_hwb_roundtrip(rgb in rgb()) {
        let back = Rgb::from(Hwb::from(rgb));
        prop_assert!(back.equal_within(&rgb, 1e-9), "{rgb:?} -> {back:?}");
    }

    #[test]
    fn rgb_linear_roundtrip(rgb in rgb()) {
        let back = Rgb::from(Linear::from(rgb));
        prop_assert!(back.equal_within(&rgb, 1e-9));
    }

    #[test]
    fn linear_xyz_roundtrip(r in wide(), g in wide(), b in wide()) {
        let lin = Linear::new(r, g, b);
        let back = Linear::from(Xyz::from(lin));
        prop_assert!(back.equal_within(&lin, 1e-5));
    }

    #[test]
    fn xyz_lab_roundtrip(x in wide(), y in wide(), z in wide()) {
        let xyz = Xyz::new(x, y, z);
        let back = Xyz::from(Lab::from(xyz));
        prop_assert!(back.equal_within(&xyz, 1e-5), "{xyz:?} -> {back:?}");
    }

    #[test]
    fn lab_lch_roundtrip(lab in lab()) {
        let back = Lab::from(Lch::from(lab));
        prop_assert!(back.equal_within(&lab, 1e-9));
    }

    #[test]
    fn lch_hue_in_range(lab in lab()) {
        let lch = Lch::from(lab);
        prop_assert!((0.0..360.0).contains(&lch.h));
        prop_assert!(lch.c >= 0.0);
    }

    #[test]
    fn linear_yuv_roundtrip(rgb in rgb()) {
        let lin = Linear::from(rgb);
        let back = Linear::from(Yuv::from(lin));
        prop_assert!(back.equal_within(&lin, 1e-9));
    }

    #[test]
    fn xyz_xyy_roundtrip(x in 0.01f64..1.0, y in 0.01f64..1.0, z in 0.01f64..1.0) {
        let xyz = Xyz::new(x, y, z);
        let back = Xyz::from(Xyy::from(xyz));
        prop_assert!(back.equal_within(&xyz, 1e-9));
    }

    #[test]
    fn delta_e_is_symmetric(a in lab(), b in lab()) {
        let ab = a.delta_e(&b);
        prop_assert_eq!(ab, b.delta_e(&a));
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(a.delta_e(&a), 0.0);
    }

    #[test]
    fn every_space_reproduces_8bit_rgb(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let colour = Colour::new(Rgb::from_rgb8(r, g, b));
        for space in Space::ALL {
            // Chromatic YCC does not invert exactly.
            if space == Space::Ycc {
                continue;
            }
            let again = Colour::new(colour.value_in(space));
            prop_assert!(
                again.equal_to(&colour, None),
                "{space}: {} -> {}",
                colour.rgb(),
                again.rgb()
            );
        }
    }
}

#[test]
fn out_of_gamut_roundtrips() {
    let lin = Linear::new(1.2, -0.1, 0.5);
    let xyz = Xyz::from(lin);
    assert!(Linear::from(xyz).equal_to(&lin));

    let lab = Lab::from(xyz);
    assert!(Xyz::from(lab).equal_to(&xyz));
    assert!(Lab::from(Lch::from(lab)).equal_to(&lab));
    assert!(Linear::from(Yuv::from(lin)).equal_to(&lin));

    // Display RGB clamps, so only the linear value carries the excursion.
    let rgb = Rgb::from(lin);
    assert_eq!((rgb.r, rgb.g), (1.0, 0.0));
}
