//! codecache - code id cache for test-chain contract deployments
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use codecache::audit::AuditLog;
use codecache::cache::ContentCache;
use codecache::cli::{Cli, Commands, LogFormat};
use codecache::config::ConfigManager;
use codecache::error::{CodeCacheError, CodeCacheResult};
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CodeCacheResult<()> {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("codecache=warn"),
        1 => EnvFilter::new("codecache=info"),
        _ => EnvFilter::new("codecache=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.without_time().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    // Init command doesn't need config loading
    if let Commands::Init(args) = cli.command {
        return codecache::cli::commands::init(args).await;
    }

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let cwd = std::env::current_dir()
        .map_err(|e| CodeCacheError::io("getting current directory", e))?;

    let local_config_path = if cli.no_local {
        debug!("Local config discovery disabled (--no-local)");
        None
    } else {
        let found = ConfigManager::find_local_config(&cwd);
        if let Some(ref path) = found {
            debug!("Found local config: {}", path.display());
        }
        found
    };

    let config = config_manager
        .load_merged(local_config_path.as_deref())
        .await?;

    let root = cli
        .root
        .clone()
        .or_else(|| {
            local_config_path
                .as_deref()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf())
        })
        .unwrap_or(cwd);
    debug!("Project root: {}", root.display());

    let cache = ContentCache::new(config.paths.resolve(&root))
        .with_event_log(AuditLog::new(&config));

    if cli.command.uses_store() {
        cache.initialize()?;
    }

    match cli.command {
        Commands::Init(_) => unreachable!("Init handled above"),
        Commands::Epoch => codecache::cli::commands::epoch(&cache),
        Commands::Fingerprint(args) => codecache::cli::commands::fingerprint(args, &cache),
        Commands::Reconcile => codecache::cli::commands::reconcile(&cache),
        Commands::Lookup(args) => codecache::cli::commands::lookup(args, &cache),
        Commands::Record(args) => codecache::cli::commands::record(args, &cache),
        Commands::Show(args) => codecache::cli::commands::show(args, &cache),
        Commands::Config(args) => {
            codecache::cli::commands::config(args, &config, &config_manager)
        }
    }
}
