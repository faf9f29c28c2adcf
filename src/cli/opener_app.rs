//! Opener app runner

use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::{Clipboard, ConnectionAcceptor, Diagnostics};
use crate::application::{RelayServer, ServerConfig};
use crate::domain::error::ServeError;
use crate::domain::session::BuildInfo;
use crate::infrastructure::{create_clipboard, prepare_endpoint, BoundEndpoint, XdgConfigStore};

use super::app::{load_merged_config, opener_options, EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;
use super::signals::TerminationSignals;

/// Validate, bind and serve until `shutdown` resolves.
///
/// Fails before anything is bound if the endpoint is invalid, and with
/// `ServeError::Bind` if the listener cannot be created. The endpoint is
/// released before this returns.
pub async fn start_relay<F>(
    config: ServerConfig,
    build: &BuildInfo,
    clipboard: Arc<dyn Clipboard>,
    diagnostics: Arc<dyn Diagnostics>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()>,
{
    let endpoint = prepare_endpoint(&config.endpoint)?;

    diagnostics.info(&build.to_string());
    diagnostics.info(&format!("starting a server at {}", endpoint));

    let bound = BoundEndpoint::bind(&endpoint)
        .await
        .map_err(|source| ServeError::Bind {
            address: endpoint.to_string(),
            source,
        })?;

    diagnostics.info(&format!(
        "listening on {} {} | read timeout: {}ms | shutdown: {}",
        config.endpoint.network,
        bound.local_address(),
        config.endpoint.read_timeout.as_millis(),
        config.shutdown
    ));

    RelayServer::new(config, clipboard, diagnostics)
        .serve(bound, shutdown)
        .await;

    Ok(())
}

/// Run the relay with the given config file until SIGINT/SIGTERM
pub async fn run_opener(config_path: Option<PathBuf>, build: BuildInfo) -> ExitCode {
    let presenter = Presenter::new();

    let store = XdgConfigStore::from_option(config_path);
    let config = match load_merged_config(&store).await {
        Ok(c) => c,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = match opener_options(&config) {
        Ok(o) => o,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut signals = match TerminationSignals::new() {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let clipboard = match create_clipboard(options.clipboard) {
        Ok(c) => c,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let diagnostics: Arc<dyn Diagnostics> = Arc::new(presenter);
    let shutdown = async move {
        let signal = signals.recv().await;
        presenter.info(&format!("got signal {}", signal));
    };

    match start_relay(options.server, &build, clipboard, diagnostics, shutdown).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
