//! The `scorecalc act` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecalc_core::model::{ActVariant, ScoreInput, Test};

use crate::config::load_config_from;
use crate::render::{clamp_input, estimate_text};

pub fn execute(
    config_path: Option<PathBuf>,
    variant: Option<String>,
    raw: [Option<i32>; 4],
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let variant: ActVariant = match variant {
        Some(v) => v.parse()?,
        None => config.default_act_variant,
    };

    let defaults = variant.default_raw();
    let mut values = [0; 4];
    for ((slot, given), default) in values.iter_mut().zip(raw).zip(defaults) {
        *slot = given.unwrap_or(default);
    }

    let input = clamp_input(ScoreInput::from_parts(Test::Act, &variant.to_string(), values)?);
    let estimate = input.compute();
    tracing::debug!(%input, headline = estimate.headline(), "computed ACT estimate");

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&estimate)?),
        "text" => print!("{}", estimate_text(variant.title(), &input, &estimate)),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
