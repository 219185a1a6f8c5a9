//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize the global tracing subscriber
///
/// The filter comes from `service.log_level`; an invalid directive falls back to `info`.
/// Calling this twice is harmless: the second installation is ignored.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = &config.service.log_level;
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match config.service.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    if installed.is_ok() {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        let mut config = Config::default();
        config.service.log_format = "json".to_string();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&Config::default()).is_ok());
    }
}
