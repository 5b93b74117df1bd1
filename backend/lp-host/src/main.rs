//! lp-host - login provisioning host
//!
//! # Examples
//!
//! ```bash
//! # Seed a default group, then log in
//! lp-host group add --name Members --default
//! LP_AUTHORITY_BASE_URL=https://auth.example.com lp-host login --username carol --password x
//! ```

use lp_config::Config;
use lp_db::ConnectionManager;
use lp_host::{
    Cli, Commands, GroupCommands, HostError, HostErrorResult, commands, logger,
};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> HostErrorResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir).map_err(|e| HostError::io(dir, e))?;
    }

    logger::initialize(
        config.logging.level,
        log_file_path,
        config.logging.colored,
    )?;

    info!("Starting lp-host v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = ConnectionManager::new(config.database_path()?)
        .with_max_connections(config.database.max_connections)
        .with_busy_timeout(Duration::from_secs(config.database.busy_timeout_secs))
        .connect()
        .await?;

    let code = match cli.command {
        Commands::Login { username, password } => {
            let orchestrator = commands::build_orchestrator(&config.authority, pool.clone())?;
            let result = commands::login(&orchestrator, &username, &password).await;
            println!("{}", commands::render(&result, cli.pretty)?);

            if result.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Group { action } => match action {
            GroupCommands::Add { name, default } => {
                let group = commands::add_group(&pool, &name, default).await?;
                println!("{}", commands::render(&group, cli.pretty)?);
                ExitCode::SUCCESS
            }
            GroupCommands::List => {
                let groups = commands::list_groups(&pool).await?;
                println!("{}", commands::render(&groups, cli.pretty)?);
                ExitCode::SUCCESS
            }
        },
    };

    pool.close().await;

    Ok(code)
}
