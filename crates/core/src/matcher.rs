//! Nearest-token matching by perceptual distance.
//!
//! Ranks a catalog's eligible tokens by OKLab distance to an arbitrary
//! input color. This is the read side of the crate: snapping never invents
//! colors, it only picks from the catalog.

use crate::color::{delta_e, srgb_to_oklab, Srgb};
use crate::preset::Preset;
use crate::token::{Token, TokenCatalog};
use serde::{Deserialize, Serialize};

/// Catalog provenance of a resolved color: which hue family and scale step
/// the hex came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    pub hue: String,
    pub step: u16,
}

/// A resolved color, with provenance when it came from a catalog token.
///
/// Derived colors that left the catalog (for example a solver output that
/// never re-snapped) carry `token: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenRef>,
}

/// A catalog token ranked by perceptual distance to a target.
#[derive(Debug, Clone)]
pub struct RankedToken<'a> {
    pub token: &'a Token,
    pub delta_e: f64,
}

/// Ranks the eligible catalog by OKLab distance to `target_hex`, closest
/// first, returning at most `limit` entries.
///
/// The sort is stable, so distance ties keep catalog order and the result
/// is fully deterministic. An unparsable target or an empty catalog yields
/// an empty list; this never errors.
pub fn find_nearest<'a>(
    target_hex: &str,
    catalog: &'a TokenCatalog,
    preset: Preset,
    limit: usize,
) -> Vec<RankedToken<'a>> {
    let Ok(target) = Srgb::from_hex(target_hex) else {
        return Vec::new();
    };
    if limit == 0 {
        return Vec::new();
    }
    let target_lab = srgb_to_oklab(target);
    let mut ranked: Vec<RankedToken<'a>> = catalog
        .eligible(preset)
        .into_iter()
        .map(|c| RankedToken {
            token: c.token,
            delta_e: delta_e(target_lab, c.lab),
        })
        .collect();
    ranked.sort_by(|a, b| a.delta_e.total_cmp(&b.delta_e));
    ranked.truncate(limit);
    ranked
}

/// Snaps `target_hex` to the single nearest eligible token.
///
/// Returns `None` when the target is unparsable or the catalog has no
/// matchable tokens.
pub fn snap_to_nearest(
    target_hex: &str,
    catalog: &TokenCatalog,
    preset: Preset,
) -> Option<MatchResult> {
    let top = find_nearest(target_hex, catalog, preset, 1).into_iter().next()?;
    let (hue, step) = top.token.chromatic_parts()?;
    Some(MatchResult {
        hex: top.token.hex.clone(),
        token: Some(TokenRef {
            hue: hue.to_string(),
            step,
        }),
    })
}
