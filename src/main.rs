//! copier CLI entry point

use std::process::ExitCode;

use clap::Parser;

use copier::cli::{
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    run_opener, Presenter, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
use copier::domain::BuildInfo;
use copier::infrastructure::XdgConfigStore;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also land here
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE_ERROR)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };
    let presenter = Presenter::new();

    match cli.command {
        Commands::Opener { config } => run_opener(config, BuildInfo::current()).await,
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}
