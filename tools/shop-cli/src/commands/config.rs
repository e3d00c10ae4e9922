//! `shop config show` and `shop config init`.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use shop_feed::ShopConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let source = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    ctx.output.kv("source", &source);

    let config = &ctx.config;
    let sections = [
        (
            "feed",
            vec![
                ("page_size", config.feed.page_size.to_string()),
                ("scroll_threshold_px", config.feed.scroll_threshold_px.to_string()),
            ],
        ),
        (
            "adverts",
            vec![
                ("enabled", config.adverts.enabled.to_string()),
                ("chunk_size", config.adverts.chunk_size.to_string()),
            ],
        ),
        (
            "auth",
            vec![(
                "google_client_id",
                config.auth.google_client_id.clone().unwrap_or_else(|| "(not set)".into()),
            )],
        ),
    ];

    for (section, entries) in sections {
        println!();
        println!("  [{section}]");
        for (key, value) in entries {
            ctx.output.kv(key, &value);
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path("shop.toml");

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !overwrite {
            ctx.output.info("Left existing config untouched.");
            return Ok(());
        }
    }

    let content = ShopConfig::default().to_string_for("shop.toml")?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
