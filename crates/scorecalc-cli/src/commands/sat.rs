//! The `scorecalc sat` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecalc_core::model::{SatVariant, ScoreInput, Test};

use crate::config::load_config_from;
use crate::render::{clamp_input, estimate_text};

pub fn execute(
    config_path: Option<PathBuf>,
    variant: Option<String>,
    digital: [Option<i32>; 4],
    legacy: [Option<i32>; 4],
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let has_digital = digital.iter().any(Option::is_some);
    let has_legacy = legacy.iter().any(Option::is_some);
    anyhow::ensure!(
        !(has_digital && has_legacy),
        "--rw1/--rw2/--math1/--math2 (digital) cannot be combined with \
         --reading/--writing/--math-no-calc/--math-calc (legacy)"
    );

    let variant: SatVariant = match variant {
        Some(v) => v.parse()?,
        None if has_legacy => SatVariant::Legacy,
        None if has_digital => SatVariant::Digital,
        None => config.default_sat_variant,
    };

    let (raw, foreign) = match variant {
        SatVariant::Digital => (digital, has_legacy),
        SatVariant::Legacy => (legacy, has_digital),
    };
    anyhow::ensure!(
        !foreign,
        "section flags do not belong to the {variant} SAT"
    );

    let mut values = [0; 4];
    for ((slot, given), default) in values.iter_mut().zip(raw).zip(variant.default_raw()) {
        *slot = given.unwrap_or(default);
    }

    let input = clamp_input(ScoreInput::from_parts(Test::Sat, &variant.to_string(), values)?);
    let estimate = input.compute();
    tracing::debug!(%input, headline = estimate.headline(), "computed SAT estimate");

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&estimate)?),
        "text" => print!("{}", estimate_text(variant.title(), &input, &estimate)),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
