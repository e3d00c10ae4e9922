//! `shop` - page through the lure feed from a terminal.
//!
//! `shop browse` runs the same feed session the storefront does against the
//! seeded catalogue; `shop config` shows or writes `shop.toml`.

mod commands;
mod context;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs};
use context::Context;
use output::Output;

#[derive(Parser)]
#[command(name = "shop", author, version, about = "Browse the lure shop feed")]
#[command(propagate_version = true)]
struct Cli {
    /// Show feed debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read configuration from this file instead of searching for shop.toml
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Page through the product feed
    Browse(BrowseArgs),
    /// Show or create the configuration file
    Config(ConfigArgs),
}

// Providers hand out non-Send futures, so stay on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = Output::new(cli.verbose, cli.json);
    let ctx = match Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{e:#}"));
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Browse(args) => commands::browse::run(args, &ctx).await,
        Command::Config(args) => commands::config::run(args, &ctx).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ctx.output.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise only warnings unless `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "shop=debug" } else { "shop=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
