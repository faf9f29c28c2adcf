//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::app::load_merged_config;
use super::args::{ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = load_merged_config(store).await?;

    for key in VALID_CONFIG_KEYS {
        let value = match *key {
            "network" => config.network.clone(),
            "address" => config.address.clone(),
            "timeout" => config.timeout.map(|ms| format!("{}ms", ms)),
            "shutdown_grace" => config.shutdown_grace.map(|ms| format!("{}ms", ms)),
            "clipboard" => config.clipboard.clone(),
            _ => None,
        };
        presenter.key_value(key, value.as_deref().unwrap_or("(not set)"));
    }

    Ok(())
}
