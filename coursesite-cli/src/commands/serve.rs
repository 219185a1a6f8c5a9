use anyhow::Result;
use coursesite::prelude::*;
use std::path::PathBuf;

pub async fn execute(config_path: Option<PathBuf>, port: Option<u16>) -> Result<()> {
    let mut config = super::load_config(config_path.as_deref())?;
    if let Some(port) = port {
        config.service.port = port;
    }

    init_tracing(&config)?;

    // A site with broken templates never starts listening
    let views = must(Views::load(&config));

    if let Err(err) = Server::new(config).serve(router(views)).await {
        error!(error = %err, "Server stopped");
        return Err(err.into());
    }

    Ok(())
}
