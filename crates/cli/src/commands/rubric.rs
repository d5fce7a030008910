use anyhow::{Context, Result};
use clap::ValueEnum;
use rubric_core::rubric::RubricConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RubricFormat {
    Yaml,
    Json,
}

/// Print the built-in rubric so it can be saved and edited.
pub fn rubric_command(format: RubricFormat) -> Result<()> {
    let config = RubricConfig::default();
    let rendered = match format {
        RubricFormat::Yaml => config.to_yaml(),
        RubricFormat::Json => config.to_json(),
    }
    .context("Failed to render rubric config")?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
