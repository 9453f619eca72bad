//! Derived surface colors: key backgrounds and soft borders.
//!
//! A key background is the subtle fill behind a keycap or chip showing the
//! primary accent: the backdrop tinted toward the primary in OKLab, pushed
//! to a readable contrast against the text color, and re-snapped onto the
//! primary's own tonal scale when a catalog is at hand.

use crate::color::{
    delta_e, mix_oklab, oklab_to_oklch, oklch_to_srgb, srgb_to_oklab, srgb_to_oklch, OkLch, Srgb,
};
use crate::contrast::contrast_ratio;
use crate::matcher::TokenRef;
use crate::preset::Preset;
use crate::solver::solve_lightness;
use crate::token::TokenCatalog;
use serde::{Deserialize, Serialize};

/// Default minimum contrast a key background keeps against its text color.
pub const DEFAULT_KEY_TEXT_CONTRAST: f64 = 4.5;

/// OKLCh lightness floor for soft borders.
const SOFT_BORDER_LIGHTNESS_FLOOR: f64 = 0.6;

/// Chroma multiplier for soft borders.
const SOFT_BORDER_CHROMA_SCALE: f64 = 0.5;

/// A derived key-background color, with catalog provenance when the result
/// re-snapped onto a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBackground {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenRef>,
}

/// How strongly the primary tints the backdrop, by preset and backdrop
/// lightness.
fn mix_ratio(preset: Preset, background_is_light: bool) -> f64 {
    match (preset, background_is_light) {
        (Preset::Pastel, true) => 0.22,
        (Preset::Pastel, false) => 0.18,
        (Preset::HighContrast, true) => 0.14,
        (Preset::HighContrast, false) => 0.16,
        (Preset::Dark, true) => 0.12,
        (Preset::Dark, false) => 0.20,
        (Preset::Default | Preset::Vibrant, true) => 0.16,
        (Preset::Default | Preset::Vibrant, false) => 0.18,
    }
}

/// Resolves the key background for `primary_hex` shown over
/// `background_hex` with `text_hex` on top.
///
/// The backdrop is mixed toward the primary in OKLab, then lightness-solved
/// to `min_text_contrast` against the text color. With a catalog present,
/// the result re-snaps to the perceptually nearest token of the primary's
/// own hue family that still clears the contrast floor; the family comes
/// from an exact catalog hit on the primary, else `hue_hint`, else the
/// family nearest the primary's hue angle. Without a catalog (or when no
/// same-family token clears the floor) the computed hex is returned as-is
/// with no provenance.
///
/// Returns `None` only when one of the three input hexes fails to parse.
pub fn resolve_key_background(
    primary_hex: &str,
    background_hex: &str,
    text_hex: &str,
    preset: Preset,
    catalog: Option<&TokenCatalog>,
    hue_hint: Option<&str>,
    min_text_contrast: f64,
) -> Option<KeyBackground> {
    let primary = Srgb::from_hex(primary_hex).ok()?;
    let background = Srgb::from_hex(background_hex).ok()?;
    let text = Srgb::from_hex(text_hex).ok()?;

    let ratio = mix_ratio(preset, srgb_to_oklch(background).is_light());
    let mixed = mix_oklab(srgb_to_oklab(background), srgb_to_oklab(primary), ratio);
    let adjusted = solve_lightness(oklab_to_oklch(mixed), text, min_text_contrast);
    let adjusted_srgb = oklch_to_srgb(adjusted);

    let Some(catalog) = catalog else {
        return Some(KeyBackground {
            hex: adjusted_srgb.to_hex(),
            token: None,
        });
    };

    if let Some(family) = primary_hue_family(primary_hex, primary, catalog, hue_hint) {
        let adjusted_lab = srgb_to_oklab(adjusted_srgb);
        let snapped = catalog
            .matchable()
            .into_iter()
            .filter(|c| c.hue.eq_ignore_ascii_case(&family))
            .filter(|c| contrast_ratio(c.srgb, text) >= min_text_contrast)
            .min_by(|a, b| {
                delta_e(adjusted_lab, a.lab).total_cmp(&delta_e(adjusted_lab, b.lab))
            });
        if let Some(c) = snapped {
            return Some(KeyBackground {
                hex: c.token.hex.clone(),
                token: Some(TokenRef {
                    hue: c.hue.to_string(),
                    step: c.scale,
                }),
            });
        }
    }

    Some(KeyBackground {
        hex: adjusted_srgb.to_hex(),
        token: None,
    })
}

/// The hue family to re-snap into: exact catalog hit on the primary hex,
/// else the caller's hint, else the family nearest the primary's hue angle.
fn primary_hue_family(
    primary_hex: &str,
    primary: Srgb,
    catalog: &TokenCatalog,
    hue_hint: Option<&str>,
) -> Option<String> {
    if let Some(token) = catalog.find_by_hex(primary_hex) {
        if let Some((hue, _)) = token.chromatic_parts() {
            return Some(hue.to_string());
        }
    }
    if let Some(hint) = hue_hint {
        return Some(hint.to_string());
    }
    catalog
        .nearest_hue_name(srgb_to_oklch(primary).h)
        .map(str::to_string)
}

/// Derives a soft border color for a swatch of `hex`: same hue, chroma
/// halved, lightness raised to at least 0.6.
///
/// Returns `None` if the hex fails to parse.
pub fn soft_border_color(hex: &str) -> Option<String> {
    let lch = srgb_to_oklch(Srgb::from_hex(hex).ok()?);
    let border = OkLch {
        l: lch.l.max(SOFT_BORDER_LIGHTNESS_FLOOR),
        c: lch.c * SOFT_BORDER_CHROMA_SCALE,
        h: lch.h,
    };
    Some(oklch_to_srgb(border).to_hex())
}
