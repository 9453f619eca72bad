#![deny(unsafe_code)]
//! CLI binary for the accent-engine color resolution system.
//!
//! Subcommands:
//! - `snap <color>` — rank the nearest catalog tokens for a color
//! - `select <count>` — pick hue-distant accent tokens
//! - `key-bg <primary>` — derive a key background
//! - `adjust <color> <background>` — solve lightness for a contrast target
//! - `border <color>` — derive a soft border color
//! - `boundaries [hue]` — contrast boundaries of tonal scales
//! - `list` — summarize the catalog and presets
//! - `catalog` — print the effective catalog as JSON

mod error;

use accent_engine_core::boundary::boundaries_for_hue;
use accent_engine_core::color::srgb_to_oklch;
use accent_engine_core::contrast::contrast_ratio_hex;
use accent_engine_core::matcher::find_nearest;
use accent_engine_core::selector::select_distant;
use accent_engine_core::solver::adjust_lightness_for_contrast;
use accent_engine_core::surface::{
    resolve_key_background, soft_border_color, DEFAULT_KEY_TEXT_CONTRAST,
};
use accent_engine_core::{Preset, Srgb, TokenCatalog, Xorshift64};
use clap::{Parser, Subcommand};
use error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "accent-engine", about = "Token-palette color resolution CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Token catalog JSON file (defaults to the built-in reference catalog).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the nearest catalog tokens for a color.
    Snap {
        /// Input color as hex (e.g. "#ee4545").
        color: String,

        /// Constraint preset (default, pastel, vibrant, dark, high-contrast).
        #[arg(short, long, default_value = "default")]
        preset: String,

        /// Number of ranked matches to print.
        #[arg(short, long, default_value_t = 1)]
        limit: usize,
    },
    /// Pick hue-distant accent tokens.
    Select {
        /// How many accents to pick.
        count: usize,

        /// Hex colors already in use; picks keep 30 degrees of hue away.
        #[arg(short, long)]
        existing: Vec<String>,

        /// Constraint preset (default, pastel, vibrant, dark, high-contrast).
        #[arg(short, long, default_value = "default")]
        preset: String,

        /// Background the picks must stay readable against.
        #[arg(short, long, default_value = "#ffffff")]
        background: String,

        /// PRNG seed for reproducible picks.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Derive the key background for a primary accent.
    KeyBg {
        /// Primary accent color as hex.
        primary: String,

        /// Page background behind the key.
        #[arg(short, long, default_value = "#ffffff")]
        background: String,

        /// Text color shown on the key.
        #[arg(short, long, default_value = "#1e293b")]
        text: String,

        /// Constraint preset (default, pastel, vibrant, dark, high-contrast).
        #[arg(short, long, default_value = "default")]
        preset: String,

        /// Hue family to re-snap into when the primary is off-catalog.
        #[arg(long)]
        hue_hint: Option<String>,

        /// Minimum contrast the result keeps against the text color.
        #[arg(long, default_value_t = DEFAULT_KEY_TEXT_CONTRAST)]
        min_contrast: f64,

        /// Skip catalog re-snapping and return the computed color.
        #[arg(long)]
        raw: bool,
    },
    /// Adjust a color's lightness until it meets a contrast target.
    Adjust {
        /// Color to adjust, as hex.
        color: String,

        /// Background to contrast against, as hex.
        background: String,

        /// Contrast target as a WCAG ratio.
        #[arg(short, long, default_value_t = 4.5)]
        target: f64,
    },
    /// Derive a soft border color for a swatch.
    Border {
        /// Swatch color as hex.
        color: String,
    },
    /// Show contrast boundaries of tonal scales.
    Boundaries {
        /// Hue family name; omit for all families.
        hue: Option<String>,

        /// Light reference background.
        #[arg(long, default_value = "#ffffff")]
        light_bg: String,

        /// Dark reference background.
        #[arg(long, default_value = "#0f172a")]
        dark_bg: String,
    },
    /// Summarize the catalog and available presets.
    List,
    /// Print the effective catalog as JSON.
    Catalog,
}

fn load_catalog(path: Option<&Path>) -> Result<TokenCatalog, CliError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(TokenCatalog::from_json_str(&json)?)
        }
        None => Ok(TokenCatalog::reference()),
    }
}

fn parse_preset(name: &str) -> Result<Preset, CliError> {
    name.parse::<Preset>()
        .map_err(|e| CliError::Input(e.to_string()))
}

fn parse_hex(what: &str, hex: &str) -> Result<Srgb, CliError> {
    Srgb::from_hex(hex).map_err(|e| CliError::Input(format!("{what}: {e}")))
}

fn fmt_step(step: Option<u16>) -> String {
    match step {
        Some(step) => format!("at {step}"),
        None => "none".to_string(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Snap {
            color,
            preset,
            limit,
        } => {
            parse_hex("color", &color)?;
            let preset = parse_preset(&preset)?;
            if catalog.matchable().is_empty() {
                return Err(CliError::Input("catalog has no matchable tokens".into()));
            }
            let ranked = find_nearest(&color, &catalog, preset, limit.max(1));
            if cli.json {
                let entries: Vec<serde_json::Value> = ranked
                    .iter()
                    .filter_map(|r| {
                        let (hue, step) = r.token.chromatic_parts()?;
                        Some(serde_json::json!({
                            "id": r.token.id,
                            "hex": r.token.hex,
                            "hue": hue,
                            "step": step,
                            "delta_e": r.delta_e,
                        }))
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (i, r) in ranked.iter().enumerate() {
                    println!(
                        "{:>2}. {}  {}  dE {:.4}",
                        i + 1,
                        r.token.id,
                        r.token.hex,
                        r.delta_e
                    );
                }
            }
        }
        Command::Select {
            count,
            existing,
            preset,
            background,
            seed,
        } => {
            let preset = parse_preset(&preset)?;
            parse_hex("background", &background)?;
            let mut hues = Vec::with_capacity(existing.len());
            for hex in &existing {
                let srgb = parse_hex("existing color", hex)?;
                hues.push(srgb_to_oklch(srgb).h);
            }
            let mut rng = Xorshift64::new(seed);
            let picks = select_distant(&hues, count, &catalog, preset, &background, || {
                rng.next_f64()
            });
            if picks.len() < count {
                eprintln!(
                    "note: only {} of {count} requested accents available",
                    picks.len()
                );
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&picks)?);
            } else {
                for pick in &picks {
                    match &pick.token {
                        Some(t) => println!("{}  ({} {})", pick.hex, t.hue, t.step),
                        None => println!("{}", pick.hex),
                    }
                }
            }
        }
        Command::KeyBg {
            primary,
            background,
            text,
            preset,
            hue_hint,
            min_contrast,
            raw,
        } => {
            parse_hex("primary", &primary)?;
            parse_hex("background", &background)?;
            parse_hex("text", &text)?;
            let preset = parse_preset(&preset)?;
            let result = resolve_key_background(
                &primary,
                &background,
                &text,
                preset,
                if raw { None } else { Some(&catalog) },
                hue_hint.as_deref(),
                min_contrast,
            )
            .ok_or_else(|| CliError::Input("could not resolve key background".into()))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match &result.token {
                    Some(t) => println!("{}  ({} {})", result.hex, t.hue, t.step),
                    None => println!("{}  (computed, no token)", result.hex),
                }
            }
        }
        Command::Adjust {
            color,
            background,
            target,
        } => {
            parse_hex("color", &color)?;
            parse_hex("background", &background)?;
            let adjusted = adjust_lightness_for_contrast(&color, &background, target)
                .ok_or_else(|| CliError::Input("could not adjust color".into()))?;
            let achieved = contrast_ratio_hex(&adjusted, &background)
                .ok_or_else(|| CliError::Input("could not evaluate contrast".into()))?;
            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "background": background,
                    "target": target,
                    "hex": adjusted,
                    "contrast": achieved,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{adjusted}  (contrast {achieved:.2} vs {background})");
            }
        }
        Command::Border { color } => {
            parse_hex("color", &color)?;
            let border = soft_border_color(&color)
                .ok_or_else(|| CliError::Input("could not derive border color".into()))?;
            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "hex": border,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{border}");
            }
        }
        Command::Boundaries {
            hue,
            light_bg,
            dark_bg,
        } => {
            parse_hex("light background", &light_bg)?;
            parse_hex("dark background", &dark_bg)?;
            let names: Vec<String> = match hue {
                Some(hue) => vec![hue],
                None => catalog.hue_names().into_iter().map(String::from).collect(),
            };
            if names.is_empty() {
                return Err(CliError::Input("catalog has no hue families".into()));
            }
            let mut reports = Vec::with_capacity(names.len());
            for name in &names {
                let bounds = boundaries_for_hue(&catalog, name, &light_bg, &dark_bg)
                    .ok_or_else(|| CliError::Input(format!("unknown hue family '{name}'")))?;
                reports.push((name, bounds));
            }
            if cli.json {
                let entries: Vec<serde_json::Value> = reports
                    .iter()
                    .map(|(name, bounds)| {
                        serde_json::json!({
                            "hue": name,
                            "boundaries": bounds,
                            "scale": catalog.tonal_scale(name),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (name, bounds) in &reports {
                    println!(
                        "{name}: light bg 3:1 {} / 4.5:1 {}; dark bg 4.5:1 {} / 3:1 {}",
                        fmt_step(bounds.light_aa_large),
                        fmt_step(bounds.light_aa),
                        fmt_step(bounds.dark_aa),
                        fmt_step(bounds.dark_aa_large),
                    );
                }
            }
        }
        Command::List => {
            let families: Vec<(String, usize)> = catalog
                .hue_names()
                .into_iter()
                .map(|name| (name.to_string(), catalog.tonal_scale(name).len()))
                .collect();
            let semantic = catalog
                .tokens()
                .iter()
                .filter(|t| t.chromatic_parts().is_none())
                .count();
            let presets: Vec<&str> = Preset::all().iter().map(|p| p.name()).collect();
            if cli.json {
                let info = serde_json::json!({
                    "families": families
                        .iter()
                        .map(|(name, steps)| serde_json::json!({
                            "name": name,
                            "steps": steps,
                        }))
                        .collect::<Vec<_>>(),
                    "semantic_tokens": semantic,
                    "presets": presets,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Hue families:");
                for (name, steps) in &families {
                    println!("  {name} ({steps} steps)");
                }
                println!("Semantic tokens: {semantic}");
                println!("Presets:");
                println!("  {}", presets.join(", "));
            }
        }
        Command::Catalog => {
            println!("{}", catalog.to_json_string()?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
