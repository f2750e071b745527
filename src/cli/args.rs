//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// codecache - skip redundant contract deployments on test chains
///
/// Caches the code id returned for each (chain id, contract binary) pair and
/// drops the cache whenever the test chain restarts.
#[derive(Parser, Debug)]
#[command(name = "codecache")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, global = true, default_value = "text", env = "CODECACHE_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CODECACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .codecache.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,

    /// Project root that relative cache paths resolve against
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a project-local .codecache.toml config
    Init(InitArgs),

    /// Print the current chain epoch
    Epoch,

    /// Print the content key for a contract file
    Fingerprint(ContractArgs),

    /// Reset the cache if the chain has restarted
    Reconcile,

    /// Print the cached code id for a contract file
    Lookup(ContractArgs),

    /// Record the code id a deployment returned
    Record(RecordArgs),

    /// Show the cache store
    Show(ShowArgs),

    /// Show configuration
    Config(ConfigArgs),
}

impl Commands {
    /// Whether the command reads or writes the cache store
    pub fn uses_store(&self) -> bool {
        matches!(
            self,
            Self::Reconcile | Self::Lookup(_) | Self::Record(_) | Self::Show(_)
        )
    }
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing .codecache.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// A contract file on a given chain
#[derive(Parser, Debug)]
pub struct ContractArgs {
    /// Contract file, relative to the storage root
    pub file: PathBuf,

    /// Chain id the contract is deployed to
    #[arg(long)]
    pub chain_id: String,
}

/// Arguments for the record command
#[derive(Parser, Debug)]
pub struct RecordArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Code id returned by the deployment
    #[arg(long)]
    pub code_id: u64,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one entry per line)
    Plain,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}
