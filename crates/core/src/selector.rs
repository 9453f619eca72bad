//! Hue-distant multi-selection.
//!
//! Picks several accent tokens at once, keeping every pick at least
//! [`MIN_HUE_SEPARATION`] degrees of hue away from the hues already in use
//! and from each other, while honoring the preset's eligibility predicate
//! and contrast floor. Randomness comes in as a plain `FnMut() -> f64`
//! closure, so callers choose between a seeded [`crate::prng::Xorshift64`]
//! for replayable picks and anything else they like.

use crate::color::{hue_distance, Srgb};
use crate::contrast::contrast_ratio;
use crate::matcher::{MatchResult, TokenRef};
use crate::preset::Preset;
use crate::token::{Candidate, TokenCatalog};

/// Minimum pairwise hue separation for multi-accent selection, in degrees.
pub const MIN_HUE_SEPARATION: f64 = 30.0;

/// True when `hue` keeps at least [`MIN_HUE_SEPARATION`] degrees of
/// circular distance from every hue in `used`. Trivially true for an empty
/// `used` list.
pub fn is_hue_far_enough(hue: f64, used: &[f64]) -> bool {
    used.iter()
        .all(|&u| hue_distance(hue, u) >= MIN_HUE_SEPARATION)
}

/// In-place Fisher-Yates shuffle driven by a caller-supplied unit-interval
/// generator.
///
/// Draws outside [0, 1) and NaN clamp into range, so a misbehaving
/// generator degrades the shuffle instead of panicking or indexing out of
/// bounds.
pub fn shuffle<T>(items: &mut [T], mut rng: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let draw = rng();
        let draw = if draw.is_nan() { 0.0 } else { draw.clamp(0.0, 1.0) };
        let j = ((draw * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// Picks up to `needed` catalog tokens for use alongside `existing_hues`.
///
/// The candidate pool is chosen by relaxing constraints in a fixed order:
///
/// 1. preset-admitted tokens meeting the preset's contrast floor against
///    `background_hex` *and* hue-distant from every existing hue — used
///    when it can fill `needed` on its own;
/// 2. otherwise the admitted-and-contrast-compliant pool, if non-empty;
/// 3. otherwise every matchable token.
///
/// So hue diversity is given up before accessibility, and accessibility
/// before returning nothing. The chosen pool is shuffled with `rng`, then
/// picked in two passes: hue-respecting picks first (each accepted hue
/// joins the used set), then, only if the quota is still short, remaining
/// tokens regardless of hue. Results are unique by lowercase hex, preserve
/// token provenance, and may number fewer than `needed` when the catalog
/// runs out.
pub fn select_distant(
    existing_hues: &[f64],
    needed: usize,
    catalog: &TokenCatalog,
    preset: Preset,
    background_hex: &str,
    rng: impl FnMut() -> f64,
) -> Vec<MatchResult> {
    if needed == 0 {
        return Vec::new();
    }
    let matchable = catalog.matchable();
    if matchable.is_empty() {
        return Vec::new();
    }

    let background = Srgb::from_hex(background_hex).ok();
    let floor = preset.min_contrast();

    let accessible: Vec<&Candidate<'_>> = matchable
        .iter()
        .filter(|c| preset.admits(c.lch))
        .filter(|c| background.is_some_and(|bg| contrast_ratio(c.srgb, bg) >= floor))
        .collect();
    let distant: Vec<&Candidate<'_>> = accessible
        .iter()
        .copied()
        .filter(|c| is_hue_far_enough(c.lch.h, existing_hues))
        .collect();

    let mut pool: Vec<&Candidate<'_>> = if distant.len() >= needed {
        distant
    } else if !accessible.is_empty() {
        accessible
    } else {
        matchable.iter().collect()
    };

    shuffle(&mut pool, rng);

    let mut used_hues: Vec<f64> = existing_hues.to_vec();
    let mut picked: Vec<String> = Vec::new();
    let mut results: Vec<MatchResult> = Vec::new();

    // Pass 1: hue-respecting picks only.
    for c in &pool {
        if results.len() == needed {
            break;
        }
        let key = c.token.hex.to_ascii_lowercase();
        if picked.contains(&key) || !is_hue_far_enough(c.lch.h, &used_hues) {
            continue;
        }
        used_hues.push(c.lch.h);
        picked.push(key);
        results.push(to_match_result(c));
    }

    // Pass 2: fill any remaining quota regardless of hue distance.
    for c in &pool {
        if results.len() == needed {
            break;
        }
        let key = c.token.hex.to_ascii_lowercase();
        if picked.contains(&key) {
            continue;
        }
        picked.push(key);
        results.push(to_match_result(c));
    }

    results
}

fn to_match_result(c: &Candidate<'_>) -> MatchResult {
    MatchResult {
        hex: c.token.hex.clone(),
        token: Some(TokenRef {
            hue: c.hue.to_string(),
            step: c.scale,
        }),
    }
}
