//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let page = &ctx.config.page;
    ctx.output.info("[page]");
    ctx.output.kv("title", &page.title);
    ctx.output.kv("canonical_path", &page.canonical_path);
    ctx.output.kv("log_level", &page.log_level);
    ctx.output.kv("log_format", &page.log_format);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let config = match &ctx.config_path {
        Some(path) => CliConfig::load(path)?,
        None => {
            ctx.output
                .warn("No config file found, checking built-in defaults");
            ctx.config.clone()
        }
    };

    let (errors, warnings) = check(&config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Errors and warnings for a loaded configuration.
fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let page = &config.page;

    if let Err(e) = page.validate() {
        errors.push(e.to_string());
    }

    if page.canonical_path != arezou_pdp::PRODUCT_PATH && page.canonical_path != "/" {
        warnings.push(format!(
            "page.canonical_path '{}' is not a route the page serves",
            page.canonical_path
        ));
    }

    (errors, warnings)
}
