//! Token catalogs: the externally defined palettes every match resolves into.
//!
//! A catalog is a flat list of tokens. Chromatic tokens carry a hue family
//! name and a tonal scale step and are the only things matching operations
//! may return; semantic tokens are aliases (their `hex` is typically a
//! symbolic reference like `"{blue.600}"`) and never participate.
//!
//! Catalogs are read-only carriers. Loading a replacement catalog is the
//! caller's concern; nothing in this crate caches across calls.

use crate::color::{hue_distance, oklab_to_oklch, srgb_to_oklab, OkLab, OkLch, Srgb};
use crate::error::PaletteError;
use crate::preset::Preset;
use serde::{Deserialize, Serialize};

/// Classification of a catalog token.
///
/// The hue family and scale step live inside the `Chromatic` variant, so a
/// chromatic token without them is unrepresentable rather than a validation
/// case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Classification {
    /// A visible scale color, addressed as `hue` + `scale` (e.g. red 500).
    Chromatic { hue: String, scale: u16 },
    /// An alias entry pointing at another token. Excluded from matching.
    Semantic,
}

/// One entry of a token catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Stable identifier, e.g. `"red-500"`.
    pub id: String,
    /// Literal `"#rrggbb"`, or a symbolic reference for alias tokens.
    pub hex: String,
    /// Human-readable display name. May be empty.
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(flatten)]
    pub classification: Classification,
}

impl Token {
    /// Parses the hex field as a literal color.
    ///
    /// Strictly `#RRGGBB`: symbolic references, bare six-digit forms, and
    /// any other content yield `None`.
    pub fn literal_srgb(&self) -> Option<Srgb> {
        if !self.hex.starts_with('#') {
            return None;
        }
        Srgb::from_hex(&self.hex).ok()
    }

    /// Hue family and scale step, for chromatic tokens only.
    pub fn chromatic_parts(&self) -> Option<(&str, u16)> {
        match &self.classification {
            Classification::Chromatic { hue, scale } => Some((hue, *scale)),
            Classification::Semantic => None,
        }
    }
}

/// A matchable token with its color conversions precomputed.
///
/// Built per operation by [`TokenCatalog::matchable`]; catalogs are small
/// (low hundreds of tokens), so converting on each call beats carrying a
/// cache that could go stale when a catalog is swapped.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub token: &'a Token,
    pub hue: &'a str,
    pub scale: u16,
    pub srgb: Srgb,
    pub lab: OkLab,
    pub lch: OkLch,
}

/// A read-only token catalog.
///
/// Serializes transparently as a JSON array of tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
}

impl TokenCatalog {
    /// Creates a catalog from a list of tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parses a catalog from a JSON array of token objects.
    pub fn from_json_str(json: &str) -> Result<Self, PaletteError> {
        serde_json::from_str(json).map_err(|e| PaletteError::InvalidCatalog(e.to_string()))
    }

    /// Serializes the catalog back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, PaletteError> {
        serde_json::to_string_pretty(self).map_err(|e| PaletteError::InvalidCatalog(e.to_string()))
    }

    /// All tokens, in catalog order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens (chromatic and semantic).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the catalog has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All matchable tokens: chromatic classification and a parseable
    /// literal hex. Preserves catalog order, which is what makes nearest
    /// matches deterministic under distance ties.
    pub fn matchable(&self) -> Vec<Candidate<'_>> {
        self.tokens
            .iter()
            .filter_map(|token| {
                let (hue, scale) = token.chromatic_parts()?;
                let srgb = token.literal_srgb()?;
                let lab = srgb_to_oklab(srgb);
                Some(Candidate {
                    token,
                    hue,
                    scale,
                    srgb,
                    lab,
                    lch: oklab_to_oklch(lab),
                })
            })
            .collect()
    }

    /// Matchable tokens admitted by `preset`.
    ///
    /// If the preset admits nothing (for example a dark preset over an
    /// all-light catalog), the full matchable pool is returned instead, so
    /// a nearest-match always has something to rank.
    pub fn eligible(&self, preset: Preset) -> Vec<Candidate<'_>> {
        let all = self.matchable();
        let admitted: Vec<Candidate<'_>> = all
            .iter()
            .filter(|c| preset.admits(c.lch))
            .cloned()
            .collect();
        if admitted.is_empty() {
            all
        } else {
            admitted
        }
    }

    /// Finds the chromatic token whose literal hex equals `hex`, ignoring
    /// case and a leading `#`. Semantic aliases never match, even when they
    /// carry a literal hex instead of a reference.
    pub fn find_by_hex(&self, hex: &str) -> Option<&Token> {
        let needle = hex.strip_prefix('#').unwrap_or(hex);
        self.tokens.iter().find(|t| {
            t.chromatic_parts().is_some()
                && t.literal_srgb().is_some()
                && t.hex
                    .strip_prefix('#')
                    .unwrap_or(&t.hex)
                    .eq_ignore_ascii_case(needle)
        })
    }

    /// The tonal scale of one hue family, sorted ascending by step.
    ///
    /// Duplicate steps keep the first occurrence. Unknown families yield an
    /// empty scale.
    pub fn tonal_scale(&self, hue: &str) -> Vec<(u16, Srgb)> {
        let mut scale: Vec<(u16, Srgb)> = self
            .matchable()
            .into_iter()
            .filter(|c| c.hue.eq_ignore_ascii_case(hue))
            .map(|c| (c.scale, c.srgb))
            .collect();
        scale.sort_by_key(|&(step, _)| step);
        scale.dedup_by_key(|&mut (step, _)| step);
        scale
    }

    /// Distinct hue family names, in first-appearance order.
    pub fn hue_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in &self.tokens {
            if let Some((hue, _)) = token.chromatic_parts() {
                if !names.contains(&hue) {
                    names.push(hue);
                }
            }
        }
        names
    }

    /// The hue family whose colors sit closest to `hue_angle` on the hue
    /// circle, judged by the circular mean of each family's token hues.
    ///
    /// Ties keep the earlier family. Returns `None` for a catalog with no
    /// matchable tokens.
    pub fn nearest_hue_name(&self, hue_angle: f64) -> Option<&str> {
        let candidates = self.matchable();
        let mut best: Option<(&str, f64)> = None;
        for name in self.hue_names() {
            let mut sin = 0.0;
            let mut cos = 0.0;
            let mut count = 0usize;
            for c in candidates.iter().filter(|c| c.hue == name) {
                let rad = c.lch.h.to_radians();
                sin += rad.sin();
                cos += rad.cos();
                count += 1;
            }
            if count == 0 {
                continue;
            }
            // Degenerate mean (hues cancel out) falls back to angle 0.
            let mean = if sin.abs() < 1e-12 && cos.abs() < 1e-12 {
                0.0
            } else {
                sin.atan2(cos).to_degrees().rem_euclid(360.0)
            };
            let d = hue_distance(hue_angle, mean);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((name, d));
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Scale steps of every built-in family, lightest to darkest.
pub const REFERENCE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Built-in hue families as (name, display name, hexes lightest to darkest).
const REFERENCE_FAMILIES: [(&str, &str, [&str; 11]); 8] = [
    (
        "red",
        "Red",
        [
            "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
            "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a",
        ],
    ),
    (
        "orange",
        "Orange",
        [
            "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c",
            "#c2410c", "#9a3412", "#7c2d12", "#431407",
        ],
    ),
    (
        "amber",
        "Amber",
        [
            "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
            "#b45309", "#92400e", "#78350f", "#451a03",
        ],
    ),
    (
        "green",
        "Green",
        [
            "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a",
            "#15803d", "#166534", "#14532d", "#052e16",
        ],
    ),
    (
        "teal",
        "Teal",
        [
            "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488",
            "#0f766e", "#115e59", "#134e4a", "#042f2e",
        ],
    ),
    (
        "blue",
        "Blue",
        [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
            "#1d4ed8", "#1e40af", "#1e3a8a", "#172554",
        ],
    ),
    (
        "violet",
        "Violet",
        [
            "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed",
            "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065",
        ],
    ),
    (
        "pink",
        "Pink",
        [
            "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777",
            "#be185d", "#9d174d", "#831843", "#500724",
        ],
    ),
];

/// Built-in semantic aliases as (id, symbolic reference, display name).
const REFERENCE_ALIASES: [(&str, &str, &str); 5] = [
    ("accent-default", "{blue.600}", "Accent"),
    ("success", "{green.600}", "Success"),
    ("warning", "{amber.500}", "Warning"),
    ("danger", "{red.600}", "Danger"),
    ("info", "{teal.500}", "Info"),
];

impl TokenCatalog {
    /// The built-in reference catalog: eight hue families with an 11-step
    /// tonal scale each, plus semantic aliases.
    ///
    /// Every scale runs lightest (step 50) to darkest (step 950) with
    /// strictly decreasing lightness, so boundary location can treat scales
    /// as ordered.
    pub fn reference() -> Self {
        let mut tokens = Vec::with_capacity(
            REFERENCE_FAMILIES.len() * REFERENCE_STEPS.len() + REFERENCE_ALIASES.len(),
        );
        for (hue, display, hexes) in REFERENCE_FAMILIES {
            for (step, hex) in REFERENCE_STEPS.into_iter().zip(hexes) {
                tokens.push(Token {
                    id: format!("{hue}-{step}"),
                    hex: hex.to_string(),
                    display_name: format!("{display} {step}"),
                    classification: Classification::Chromatic {
                        hue: hue.to_string(),
                        scale: step,
                    },
                });
            }
        }
        for (id, reference, display) in REFERENCE_ALIASES {
            tokens.push(Token {
                id: id.to_string(),
                hex: reference.to_string(),
                display_name: display.to_string(),
                classification: Classification::Semantic,
            });
        }
        Self { tokens }
    }
}
