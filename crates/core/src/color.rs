//! Color types and perceptual math for accent-engine.
//!
//! Provides four color types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`) and
//! pure conversion functions between them, plus the two distance metrics
//! the matching operations are built on: Euclidean distance in OKLab
//! (`delta_e`) and circular hue distance in OKLCh degrees (`hue_distance`).
//! Uses `f64` throughout for precision.
//!
//! The OKLab color space is perceptually uniform, so "nearest token by
//! `delta_e`" means the token that looks closest, not the closest RGB bytes.

use crate::error::PaletteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PaletteError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, PaletteError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // Length is in bytes; non-ASCII must be rejected before byte-slicing.
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PaletteError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"` (lowercase).
    ///
    /// Components are quantized to 8-bit (0-255) with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl OkLch {
    /// Whether this color reads as light (lightness above 0.5).
    ///
    /// This single test decides the solver's search direction and the
    /// key-background mix ratios, so light/dark handling stays consistent
    /// across the crate.
    pub fn is_light(self) -> bool {
        self.l > 0.5
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to linear RGB via the inverse OKLab matrix transform.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLab to OKLCh (cylindrical form).
///
/// NaN guard: if chroma is less than 1e-10, hue is set to 0.0 to avoid
/// indeterminate `atan2(0, 0)` results.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    OkLch { l: c.l, c: ch, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// Convenience: sRGB to OKLab via the chain sRGB -> linear -> OKLab.
pub fn srgb_to_oklab(c: Srgb) -> OkLab {
    linear_to_oklab(srgb_to_linear(c))
}

/// Convenience: sRGB to OKLCh via the chain sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(srgb_to_oklab(c))
}

/// Convenience: OKLCh to sRGB via the chain OKLCh -> OKLab -> linear -> sRGB,
/// with output clamped to [0, 1].
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    let srgb = linear_to_srgb(oklab_to_linear(oklch_to_oklab(c)));
    Srgb {
        r: srgb.r.clamp(0.0, 1.0),
        g: srgb.g.clamp(0.0, 1.0),
        b: srgb.b.clamp(0.0, 1.0),
    }
}

/// Perceptual distance between two OKLab colors (Euclidean, ΔE-OK).
pub fn delta_e(a: OkLab, b: OkLab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Perceptual distance between two hex colors.
///
/// Returns `None` if either string fails to parse.
pub fn delta_e_hex(a: &str, b: &str) -> Option<f64> {
    let a = Srgb::from_hex(a).ok()?;
    let b = Srgb::from_hex(b).ok()?;
    Some(delta_e(srgb_to_oklab(a), srgb_to_oklab(b)))
}

/// Circular distance between two hue angles in degrees, always in [0, 180].
///
/// Inputs may be any finite angle; they are normalized mod 360 first, so
/// `hue_distance(350.0, 10.0)` is 20, not 340.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Componentwise linear interpolation in OKLab: `t = 0` returns `a`,
/// `t = 1` returns `b`. Out-of-range or NaN `t` clamps into [0, 1].
pub fn mix_oklab(a: OkLab, b: OkLab, t: f64) -> OkLab {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    OkLab {
        l: a.l + t * (b.l - a.l),
        a: a.a + t * (b.a - a.a),
        b: a.b + t * (b.b - a.b),
    }
}
