//! Site server command.

use std::path::PathBuf;

use anyhow::Result;
use trevarn_server::{SiteServer, SiteServerConfig};

use crate::config::ConfigFile;

/// Command-line overrides for the `[server]` table.
#[derive(Debug, Default)]
pub struct ServeOptions {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub dir: Option<PathBuf>,
    pub cache: bool,
    pub open: bool,
}

/// Run the serve command.
pub async fn run(file_config: ConfigFile, options: ServeOptions) -> Result<()> {
    let catalog = file_config.catalog()?;
    let root = file_config.site_dir(options.dir);

    if !root.is_dir() {
        anyhow::bail!("Site directory not found: {}", root.display());
    }

    let config = SiteServerConfig {
        root,
        port: options.port.unwrap_or(file_config.server.port),
        host: options.host.unwrap_or(file_config.server.host),
        cache: options.cache || file_config.server.cache,
        open: options.open,
    };

    tracing::info!(
        "Starting Trevarn brand site on port {}{}",
        config.port,
        if config.cache { " (scan cache on)" } else { "" }
    );

    SiteServer::new(config, catalog).start().await?;

    Ok(())
}
