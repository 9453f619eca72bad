//! WCAG-style contrast evaluation.
//!
//! Relative luminance and contrast ratio per WCAG 2.x. Contrast is defined
//! on gamma-decoded sRGB, while every lightness *adjustment* in this crate
//! happens in OKLCh; the two spaces meet only through these functions.

use crate::color::{srgb_to_linear, Srgb};

/// 3:1, the WCAG AA floor for large text and UI components.
pub const AA_LARGE: f64 = 3.0;

/// 4.5:1, the WCAG AA floor for normal text.
pub const AA_NORMAL: f64 = 4.5;

/// 7:1, the WCAG AAA floor for normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// Relative luminance of a color per WCAG 2.x, in [0, 1].
///
/// Weights the gamma-decoded channels as 0.2126 R + 0.7152 G + 0.0722 B.
pub fn relative_luminance(c: Srgb) -> f64 {
    let lin = srgb_to_linear(c);
    0.2126 * lin.r + 0.7152 * lin.g + 0.0722 * lin.b
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
/// Symmetric: the lighter color always takes the numerator.
pub fn contrast_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
///
/// Returns `None` if either string fails to parse.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Option<f64> {
    let a = Srgb::from_hex(a).ok()?;
    let b = Srgb::from_hex(b).ok()?;
    Some(contrast_ratio(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Relative luminance tests --

    #[test]
    fn luminance_of_black_is_zero() {
        let black = Srgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        };
        assert_eq!(relative_luminance(black), 0.0);
    }

    #[test]
    fn luminance_of_white_is_one() {
        let white = Srgb {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        };
        assert!((relative_luminance(white) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn green_is_brighter_than_red_and_blue() {
        let red = Srgb::from_hex("#ff0000").unwrap();
        let green = Srgb::from_hex("#00ff00").unwrap();
        let blue = Srgb::from_hex("#0000ff").unwrap();
        let lr = relative_luminance(red);
        let lg = relative_luminance(green);
        let lb = relative_luminance(blue);
        assert!(lg > lr, "green {lg} should exceed red {lr}");
        assert!(lr > lb, "red {lr} should exceed blue {lb}");
    }

    // -- Contrast ratio tests --

    #[test]
    fn black_on_white_is_maximum_contrast() {
        let ratio = contrast_ratio_hex("#000000", "#ffffff").unwrap();
        assert!((ratio - 21.0).abs() < 1e-6, "expected 21, got {ratio}");
    }

    #[test]
    fn identical_colors_have_unit_contrast() {
        let ratio = contrast_ratio_hex("#3b82f6", "#3b82f6").unwrap();
        assert!((ratio - 1.0).abs() < 1e-9, "expected 1, got {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio_hex("#1e293b", "#f8fafc").unwrap();
        let ba = contrast_ratio_hex("#f8fafc", "#1e293b").unwrap();
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn gray_767676_on_white_is_about_4_point_5() {
        // The canonical "just passes AA" gray.
        let ratio = contrast_ratio_hex("#767676", "#ffffff").unwrap();
        assert!((ratio - 4.54).abs() < 0.01, "expected ~4.54, got {ratio}");
    }

    #[test]
    fn red_on_white_fails_aa_normal() {
        let ratio = contrast_ratio_hex("#ff0000", "#ffffff").unwrap();
        assert!((ratio - 3.99).abs() < 0.01, "expected ~3.99, got {ratio}");
        assert!(ratio < AA_NORMAL);
        assert!(ratio >= AA_LARGE);
    }

    #[test]
    fn dark_slate_on_white_passes_aaa() {
        let ratio = contrast_ratio_hex("#1e293b", "#ffffff").unwrap();
        assert!(ratio > AAA_NORMAL, "expected above 7, got {ratio}");
    }

    #[test]
    fn contrast_ratio_hex_returns_none_for_unparsable_input() {
        assert!(contrast_ratio_hex("#ggg", "#ffffff").is_none());
        assert!(contrast_ratio_hex("#ffffff", "oops").is_none());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn srgb_component() -> impl Strategy<Value = f64> {
            0.0_f64..=1.0
        }

        proptest! {
            #[test]
            fn contrast_ratio_is_within_bounds_and_symmetric(
                r1 in srgb_component(), g1 in srgb_component(), b1 in srgb_component(),
                r2 in srgb_component(), g2 in srgb_component(), b2 in srgb_component(),
            ) {
                let a = Srgb { r: r1, g: g1, b: b1 };
                let b = Srgb { r: r2, g: g2, b: b2 };
                let ratio = contrast_ratio(a, b);
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {ratio} out of [1, 21]");
                prop_assert!((ratio - contrast_ratio(b, a)).abs() < 1e-12);
            }

            #[test]
            fn luminance_is_monotonic_in_gray_level(
                lo in 0.0_f64..=1.0,
                delta in 0.0_f64..=1.0,
            ) {
                let hi = (lo + delta).min(1.0);
                let dark = Srgb { r: lo, g: lo, b: lo };
                let light = Srgb { r: hi, g: hi, b: hi };
                prop_assert!(relative_luminance(light) >= relative_luminance(dark));
            }
        }
    }
}
