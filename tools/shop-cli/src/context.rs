//! Per-invocation state shared by the commands.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_feed::ShopConfig;

use crate::output::Output;

/// File names looked for in each directory, in order.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

pub struct Context {
    pub config: ShopConfig,
    /// File the configuration was read from; `None` means built-in defaults.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// An explicit `--config` must load; otherwise the nearest config file
    /// walking up from the working directory is used, if any.
    pub fn load(explicit: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match explicit {
            Some(path) => (ShopConfig::load(path)?, Some(PathBuf::from(path))),
            None => match discover(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            output.debug(&format!("config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Unreadable or malformed candidates are skipped.
fn discover(start: &Path) -> Option<(ShopConfig, PathBuf)> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES.iter().find_map(|name| {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                return None;
            }
            let config = ShopConfig::load(candidate.to_str()?).ok()?;
            Some((config, candidate))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let ctx = Context {
            config: ShopConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/srv/shop"),
        };
        assert_eq!(ctx.resolve_path("shop.toml"), PathBuf::from("/srv/shop/shop.toml"));
        assert_eq!(ctx.resolve_path("/etc/shop.toml"), PathBuf::from("/etc/shop.toml"));
    }
}
