//! CLI command implementations.

pub mod browse;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Brand facet (rapala, heddon, cottoncordel, rebel, mepps or none).
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Color facet (red, blue, green, yellow, brown, black, white or none).
    #[arg(short = 'C', long)]
    pub color: Option<String>,

    /// Sort as key:direction, e.g. price:desc.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Number of pages to load.
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// Override the configured page size.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Do not fetch or interleave adverts.
    #[arg(long)]
    pub no_adverts: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Write a default shop.toml in the current directory.
    Init {
        /// Overwrite without asking.
        #[arg(short, long)]
        force: bool,
    },
}
