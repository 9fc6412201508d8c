//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use staylet_market::search::{SortMode, MAX_PER_PAGE};
use staylet_market::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
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

    ctx.output.info("");
    ctx.output.info("[market]");
    ctx.output.kv("currency", ctx.config.market.currency.code());

    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv("default_sort", ctx.config.search.default_sort.as_str());
    ctx.output.kv("per_page", &ctx.config.search.per_page.to_string());

    ctx.output.info("");
    ctx.output.info("[reviews]");
    ctx.output.kv("show_expired", &ctx.config.reviews.show_expired.to_string());

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = config_file(ctx)?;
    let path = config_path.to_string_lossy();

    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let overwrite = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
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

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let per_page = ctx.config.search.per_page;
    if per_page == 0 {
        errors.push("search.per_page must be at least 1".to_string());
    } else if per_page > MAX_PER_PAGE {
        warnings.push(format!(
            "search.per_page {} is above {} and will be clamped",
            per_page, MAX_PER_PAGE
        ));
    }

    if let Some(path) = ctx.config_path.as_deref() {
        ctx.output.debug(&format!("Checking {}", path.display()));
        if let Some(raw_sort) = raw_default_sort(path) {
            if SortMode::from_code(&raw_sort).is_none() {
                warnings.push(format!(
                    "search.default_sort '{}' is unknown, popular is used instead",
                    raw_sort
                ));
            }
        }
    }

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

/// The sort code as written in the file, before the fallback is applied.
fn raw_default_sort(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content).ok()?
    } else {
        let table: toml::Value = toml::from_str(&content).ok()?;
        serde_json::to_value(table).ok()?
    };
    value
        .get("search")?
        .get("default_sort")?
        .as_str()
        .map(str::to_string)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["market", "currency"] => Ok(config.market.currency.code().to_string()),
        ["search", "default_sort"] => Ok(config.search.default_sort.as_str().to_string()),
        ["search", "per_page"] => Ok(config.search.per_page.to_string()),
        ["reviews", "show_expired"] => Ok(config.reviews.show_expired.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["market", "currency"] => {
            config.market.currency = match Currency::from_code(value) {
                Some(currency) => currency,
                None => bail!("Unknown currency: {}", value),
            }
        }
        ["search", "default_sort"] => {
            config.search.default_sort = match SortMode::from_code(value) {
                Some(sort) => sort,
                None => bail!("Unknown sort mode: {}", value),
            }
        }
        ["search", "per_page"] => config.search.per_page = value.parse()?,
        ["reviews", "show_expired"] => config.reviews.show_expired = value.parse()?,
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn config_file(ctx: &Context) -> Result<&Path> {
    match ctx.config_path.as_deref() {
        Some(path) => Ok(path),
        None => bail!("No config file found. Run `staylet config init` to create one."),
    }
}
