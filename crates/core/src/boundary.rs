//! Contrast crossings along a tonal scale.
//!
//! Answers "which steps of this hue family are safe as text?" for theming
//! UIs: against a light page background the usable region is the dark end
//! of the scale, against a dark page background the light end, and the
//! boundaries mark where each region starts.

use crate::color::Srgb;
use crate::contrast::{contrast_ratio, AA_LARGE, AA_NORMAL};
use crate::token::TokenCatalog;
use serde::{Deserialize, Serialize};

/// The steps where a tonal scale crosses the 3:1 and 4.5:1 contrast
/// thresholds against a light and a dark reference background.
///
/// Each field holds the outermost compliant step on its side: the lightest
/// step still readable on the light background, the darkest still readable
/// on the dark one. `None` means no step of the scale meets that threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastBoundaries {
    /// Lightest step with at least 3:1 against the light background.
    pub light_aa_large: Option<u16>,
    /// Lightest step with at least 4.5:1 against the light background.
    pub light_aa: Option<u16>,
    /// Darkest step with at least 4.5:1 against the dark background.
    pub dark_aa: Option<u16>,
    /// Darkest step with at least 3:1 against the dark background.
    pub dark_aa_large: Option<u16>,
}

/// Locates the four contrast boundaries of an ordered tonal scale.
///
/// `scale` must be sorted ascending by step with lightness decreasing as
/// steps grow; [`TokenCatalog::tonal_scale`] produces exactly that shape.
pub fn locate_boundaries(
    scale: &[(u16, Srgb)],
    light_bg: Srgb,
    dark_bg: Srgb,
) -> ContrastBoundaries {
    ContrastBoundaries {
        light_aa_large: first_compliant(scale, light_bg, AA_LARGE),
        light_aa: first_compliant(scale, light_bg, AA_NORMAL),
        dark_aa: last_compliant(scale, dark_bg, AA_NORMAL),
        dark_aa_large: last_compliant(scale, dark_bg, AA_LARGE),
    }
}

/// Boundaries for one of the catalog's hue families.
///
/// Returns `None` when the family has no matchable tokens or either
/// background hex fails to parse.
pub fn boundaries_for_hue(
    catalog: &TokenCatalog,
    hue: &str,
    light_bg_hex: &str,
    dark_bg_hex: &str,
) -> Option<ContrastBoundaries> {
    let light_bg = Srgb::from_hex(light_bg_hex).ok()?;
    let dark_bg = Srgb::from_hex(dark_bg_hex).ok()?;
    let scale = catalog.tonal_scale(hue);
    if scale.is_empty() {
        return None;
    }
    Some(locate_boundaries(&scale, light_bg, dark_bg))
}

/// The lightest (first) step whose contrast against `bg` reaches
/// `threshold`.
fn first_compliant(scale: &[(u16, Srgb)], bg: Srgb, threshold: f64) -> Option<u16> {
    scale
        .iter()
        .find(|&&(_, color)| contrast_ratio(color, bg) >= threshold)
        .map(|&(step, _)| step)
}

/// The darkest (last) step whose contrast against `bg` reaches `threshold`.
fn last_compliant(scale: &[(u16, Srgb)], bg: Srgb, threshold: f64) -> Option<u16> {
    scale
        .iter()
        .rev()
        .find(|&&(_, color)| contrast_ratio(color, bg) >= threshold)
        .map(|&(step, _)| step)
}
