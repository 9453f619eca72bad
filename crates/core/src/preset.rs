//! Constraint presets.
//!
//! A preset narrows which catalog colors are eligible for matching and sets
//! the minimum contrast ratio selections must clear. Eligibility is judged
//! in OKLCh so "pastel" and "dark" mean the same thing across hues.

use crate::color::OkLch;
use crate::error::PaletteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named constraint profile for matching and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// No eligibility restriction, 4.5:1 contrast floor.
    #[default]
    Default,
    /// Light, low-chroma colors; relaxed 3:1 contrast floor.
    Pastel,
    /// Saturated colors at mid lightness.
    Vibrant,
    /// Dark colors only.
    Dark,
    /// No eligibility restriction, 7:1 contrast floor.
    HighContrast,
}

impl Preset {
    /// All presets, in display order.
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Default,
            Preset::Pastel,
            Preset::Vibrant,
            Preset::Dark,
            Preset::HighContrast,
        ]
    }

    /// Whether a color is eligible for matching under this preset.
    pub fn admits(self, c: OkLch) -> bool {
        match self {
            Preset::Default | Preset::HighContrast => true,
            Preset::Pastel => c.l >= 0.75 && c.c <= 0.10,
            Preset::Vibrant => c.c >= 0.12 && (0.35..=0.85).contains(&c.l),
            Preset::Dark => c.l <= 0.40,
        }
    }

    /// Minimum contrast ratio selections must reach under this preset.
    pub fn min_contrast(self) -> f64 {
        match self {
            Preset::Pastel => 3.0,
            Preset::HighContrast => 7.0,
            Preset::Default | Preset::Vibrant | Preset::Dark => 4.5,
        }
    }

    /// The kebab-case name used on the wire and the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Pastel => "pastel",
            Preset::Vibrant => "vibrant",
            Preset::Dark => "dark",
            Preset::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Preset::Default),
            "pastel" => Ok(Preset::Pastel),
            "vibrant" => Ok(Preset::Vibrant),
            "dark" => Ok(Preset::Dark),
            "high-contrast" => Ok(Preset::HighContrast),
            other => Err(PaletteError::UnknownPreset(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{srgb_to_oklch, Srgb};

    fn lch_of(hex: &str) -> OkLch {
        srgb_to_oklch(Srgb::from_hex(hex).unwrap())
    }

    // -- Eligibility tests --

    #[test]
    fn default_and_high_contrast_admit_everything() {
        for hex in ["#000000", "#ffffff", "#ef4444", "#fef2f2", "#450a0a"] {
            assert!(Preset::Default.admits(lch_of(hex)), "default rejected {hex}");
            assert!(
                Preset::HighContrast.admits(lch_of(hex)),
                "high-contrast rejected {hex}"
            );
        }
    }

    #[test]
    fn pastel_admits_light_washed_colors_only() {
        // Pale pink: high lightness, low chroma.
        assert!(Preset::Pastel.admits(lch_of("#fecaca")));
        // Saturated mid red fails both bounds.
        assert!(!Preset::Pastel.admits(lch_of("#ef4444")));
        // Near-black fails the lightness bound.
        assert!(!Preset::Pastel.admits(lch_of("#450a0a")));
    }

    #[test]
    fn vibrant_requires_chroma_and_mid_lightness() {
        assert!(Preset::Vibrant.admits(lch_of("#ef4444")));
        assert!(Preset::Vibrant.admits(lch_of("#3b82f6")));
        // Washed-out pink has too little chroma.
        assert!(!Preset::Vibrant.admits(lch_of("#fef2f2")));
        // Gray has no chroma at all.
        assert!(!Preset::Vibrant.admits(lch_of("#808080")));
    }

    #[test]
    fn dark_admits_low_lightness_only() {
        assert!(Preset::Dark.admits(lch_of("#450a0a")));
        assert!(Preset::Dark.admits(lch_of("#000000")));
        assert!(!Preset::Dark.admits(lch_of("#fef2f2")));
        assert!(!Preset::Dark.admits(lch_of("#f87171")));
    }

    // -- Contrast floor tests --

    #[test]
    fn contrast_floors_match_wcag_levels() {
        assert_eq!(Preset::Default.min_contrast(), 4.5);
        assert_eq!(Preset::Pastel.min_contrast(), 3.0);
        assert_eq!(Preset::Vibrant.min_contrast(), 4.5);
        assert_eq!(Preset::Dark.min_contrast(), 4.5);
        assert_eq!(Preset::HighContrast.min_contrast(), 7.0);
    }

    // -- Name round-trip tests --

    #[test]
    fn display_and_from_str_round_trip() {
        for &preset in Preset::all() {
            let parsed: Preset = preset.to_string().parse().unwrap();
            assert_eq!(parsed, preset);
        }
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "neon".parse::<Preset>().unwrap_err();
        assert!(matches!(err, PaletteError::UnknownPreset(ref name) if name == "neon"));
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&Preset::HighContrast).unwrap();
        assert_eq!(json, "\"high-contrast\"");
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Preset::HighContrast);
    }

    #[test]
    fn default_preset_is_default() {
        assert_eq!(Preset::default(), Preset::Default);
    }
}
