use anyhow::{Context, Result};
use coursesite::config::Config;
use std::path::Path;

pub mod check;
pub mod fragments;
pub mod serve;

/// Load configuration from an explicit file, or from the default search path.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::load().context("Failed to load configuration"),
    }
}
