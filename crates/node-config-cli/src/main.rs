//! Compute node configuration tool — entry point.
//!
//! Administers the node's repository directory: lays out a fresh one,
//! validates `config.toml` for a deployment mode, prints the canonical
//! config, and resolves named RPC endpoints.
//!
//! # Usage
//!
//! ```text
//! node-config [--repo <DIR>] [--standalone] <COMMAND>
//!
//! Commands:
//!   init      Create the default tree and stamp multi-address / node name / port
//!   validate  Check config.toml against the required fields of the mode
//!   show      Print the decoded config as canonical TOML
//!   rpc       Print a named RPC endpoint (empty line when unknown)
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable        | Default              | Description                  |
//! |-----------------|----------------------|------------------------------|
//! | `CP_PATH`       | `$HOME/.swan/computing` | Repository directory      |
//! | `CP_STANDALONE` | `false`              | Validate in standalone mode  |
//!
//! A missing required field is reported by name and the process exits with
//! a non-zero status; the agent must never run half-configured.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use node_config::infrastructure::storage::config::encode_config;
use node_config::{init_repo, ConfigStore, ConfigUpdate, DeploymentMode, DEFAULT_RPC};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Compute node configuration tool.
#[derive(Debug, Parser)]
#[command(
    name = "node-config",
    about = "Bootstrap, validate and update the compute node configuration",
    version
)]
struct Cli {
    /// Repository directory holding `config.toml` and `store_data/`.
    #[arg(long, global = true, env = "CP_PATH")]
    repo: Option<PathBuf>,

    /// Validate against the reduced standalone field set.
    #[arg(long, global = true, env = "CP_STANDALONE")]
    standalone: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the default repository tree, then update node identity.
    Init {
        /// libp2p multi-address to announce; blank keeps the current one.
        #[arg(long, default_value = "")]
        multi_address: String,

        /// Node name; blank uses the local host name.
        #[arg(long, default_value = "")]
        node_name: String,

        /// Web server port; 0 keeps the current one.
        #[arg(long, default_value_t = 0)]
        port: u16,
    },

    /// Check `config.toml` against the required fields of the mode.
    Validate,

    /// Print the decoded configuration as canonical TOML.
    Show,

    /// Print a named RPC endpoint.
    Rpc {
        #[arg(default_value = DEFAULT_RPC)]
        name: String,
    },
}

impl Cli {
    /// Repository directory: `--repo`, else `$HOME/.swan/computing`, else `.`.
    fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".swan").join("computing"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    fn mode(&self) -> DeploymentMode {
        DeploymentMode::from_standalone(self.standalone)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Executes the parsed command, writing user-facing output to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let repo = cli.repo_path();

    match &cli.command {
        Command::Init {
            multi_address,
            node_name,
            port,
        } => {
            let update = ConfigUpdate {
                multi_address: multi_address.clone(),
                node_name: node_name.clone(),
                port: *port,
            };
            let written = init_repo(&repo, &update)
                .with_context(|| format!("failed to initialise repository {}", repo.display()))?;
            info!(
                "repository {} ready (node {})",
                repo.display(),
                written.api.node_name
            );
        }
        Command::Validate => {
            load_store(cli)?;
            writeln!(out, "config is valid for {} mode", cli.mode())?;
        }
        Command::Show => {
            let store = load_store(cli)?;
            write!(out, "{}", encode_config(store.config())?)?;
        }
        Command::Rpc { name } => {
            let store = load_store(cli)?;
            writeln!(out, "{}", store.rpc_endpoint(name))?;
        }
    }
    Ok(())
}

fn load_store(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let repo = cli.repo_path();
    ConfigStore::load(&repo, cli.mode()).map_err(|e| {
        if let Some(path) = e.missing_field() {
            error!("required field {path} not given");
        }
        anyhow::Error::new(e).context(format!("failed to load config from {}", repo.display()))
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // `RUST_LOG` overrides the default `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
