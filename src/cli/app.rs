//! Shared CLI plumbing: exit codes and configuration loading

use crate::application::ports::ConfigStore;
use crate::application::ServerConfig;
use crate::domain::config::AppConfig;
use crate::domain::error::{ConfigError, EndpointError};

use super::args::OpenerOptions;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Defaults overlaid with whatever the config file sets
pub async fn load_merged_config<S: ConfigStore + ?Sized>(
    store: &S,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;
    Ok(AppConfig::defaults().merge(file_config))
}

/// Why options could not be built from the config
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Turn a merged config into validated opener options
pub fn opener_options(config: &AppConfig) -> Result<OpenerOptions, OptionsError> {
    Ok(OpenerOptions {
        server: ServerConfig {
            endpoint: config.endpoint_config()?,
            shutdown: config.shutdown_policy(),
        },
        clipboard: config.clipboard_backend()?,
    })
}
