use clap::Parser;
use cli::{
    commands::Commands,
    env::{EnvManager, Settings},
    error::CliError,
    executor::CommandExecutor,
    output,
    pipeline::translate_query,
    shutdown::{ExitCode, ShutdownCoordinator},
};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sqlfs",
    version = "0.1.0",
    about = "Run SQL-like queries against the filesystem"
)]
struct Cli {
    #[arg(long, global = true, help = "Load KEY=VALUE settings from this file")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(cli.env_file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // RUST_LOG wins over SQLFS_LOG
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cancel_token = CancellationToken::new();
    let shutdown = ShutdownCoordinator::new(cancel_token.clone());
    shutdown.register_handlers();

    let exit_code = match run(cli.command, &settings, cancel_token).await {
        Ok(()) => ExitCode::Success,
        Err(CliError::ShutdownRequested) => {
            warn!("Stopped by shutdown request");
            ExitCode::ShutdownRequested
        }
        Err(e) => {
            error!("{}", e.report());
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn load_settings(env_file: Option<&std::path::Path>) -> Result<Settings, CliError> {
    let mut env = EnvManager::new();
    if let Some(path) = env_file {
        env.load_from_file(path)?;
    }
    Settings::from_env(&env)
}

async fn run(
    command: Commands,
    settings: &Settings,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    match command {
        Commands::Run { input, dry_run } => {
            let source = input.read().await?;
            let translations = translate_query(&source)?;
            let commands: Vec<String> = translations.into_iter().map(|t| t.command).collect();

            let executor =
                CommandExecutor::new(&settings.shell, dry_run || settings.dry_run, cancel);
            let completed = executor.run_all(&commands).await?;
            info!("{} statement(s) done", completed);
        }
        Commands::Translate { input, json } => {
            let source = input.read().await?;
            let translations = translate_query(&source)?;
            output::print_translations(&translations, json)?;
        }
        Commands::Ast { input } => {
            let source = input.read().await?;
            let statements = sqlfs_syntax::parse(&source)?;
            output::print_statements(&statements)?;
        }
    }

    Ok(())
}
