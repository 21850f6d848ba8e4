use clap::Parser;
use tracing::{error, info, Level};

use w8_dashboard::{
    cli::{self, Cli, Commands},
    configuration::{AppState, State},
    error::Error,
    handler::refresh_task,
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level({
            #[cfg(debug_assertions)]
            {
                Level::DEBUG
            }

            #[cfg(not(debug_assertions))]
            {
                Level::INFO
            }
        })
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Cli::parse();

    match args.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Snapshot { remote } => cli::run_snapshot(remote).await,
        Commands::Payout { remote, force } => {
            cli::run_payout(remote, force).await
        },
    }
}

async fn serve() -> Result<(), Error> {
    let config = match cli::init_config() {
        Ok(config) => config,
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let state = State::new(config)?;
    let app_state = AppState::new(state);

    let connection = app_state
        .adapter
        .connect(app_state.config.use_local_endpoint)
        .await;
    info!(
        "Serving on {}:{}, canister connection {}",
        &app_state.config.server_host, app_state.config.port, connection
    );

    let (_, _) = tokio::try_join!(
        server::server_task(&app_state),
        refresh_task::refresh_task(app_state.clone()),
    )?;

    Ok(())
}
