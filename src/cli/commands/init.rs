//! Init command - create project-local .codecache.toml

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_NAME;
use crate::error::{CodeCacheError, CodeCacheResult};
use crate::ui::{self, Status, UiContext};
use std::path::Path;
use tokio::fs;

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# codecache project configuration
# Settings here override your global config (~/.config/codecache/config.toml)
# Relative paths resolve against the directory holding this file.

[paths]
# storage_root = "contracts"              # contract binaries
# cache_file = "configs/contracts.json"   # code id cache store
# epoch_file = "configs/logs.json"        # written by the chain harness

[general]
# audit_log = false
# audit_log_path = "/tmp/codecache-events.log"
"#;

/// Execute the init command
pub async fn execute(args: InitArgs) -> CodeCacheResult<()> {
    let ctx = UiContext::detect();

    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| CodeCacheError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(LOCAL_CONFIG_NAME);

    if config_path.exists() && !args.force {
        return Err(CodeCacheError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    ensure_dir(&target_dir).await?;

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| CodeCacheError::io(format!("writing {}", config_path.display()), e))?;

    ui::status(
        &ctx,
        Status::Done,
        "Created project config",
        Some(&config_path.display().to_string()),
    );

    Ok(())
}

async fn ensure_dir(dir: &Path) -> CodeCacheResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| CodeCacheError::io(format!("creating directory {}", dir.display()), e))?;
    }
    Ok(())
}
