//! Urna admin CLI — operate on a ledger snapshot from the command line.
//!
//! The web layer that normally fronts the ledger is an external
//! collaborator; this binary covers the administrative operations (and a
//! cast-and-seal flow for demos) directly against the snapshot file.

use clap::Parser;
use std::path::PathBuf;

use urna_node::{init_logging, LedgerService, LogFormat, NodeConfig};
use urna_types::ElectionId;
use urna_work::Difficulty;

#[derive(Parser)]
#[command(name = "urna", about = "Urna vote ledger admin tool")]
struct Cli {
    /// Data directory holding the ledger snapshot.
    #[arg(long, env = "URNA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Mining difficulty: leading hex zeros required of sealed blocks.
    #[arg(long, env = "URNA_DIFFICULTY")]
    difficulty: Option<u32>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "URNA_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "URNA_LOG_FORMAT")]
    log_format: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "URNA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Cast a vote and seal it into a new block.
    Vote {
        /// Election the vote belongs to.
        #[arg(long)]
        election: i64,
        /// The chosen option, recorded verbatim.
        #[arg(long)]
        option: String,
    },
    /// Seal the pending batch into a new block.
    Seal,
    /// Count sealed votes per option for an election.
    Tally {
        #[arg(long)]
        election: i64,
    },
    /// Check hash and link consistency of the whole chain.
    Validate,
    /// Print the full chain, pending batch, and validity verdict as JSON.
    Export,
    /// Remove every vote for an election and rebuild the chain.
    Prune {
        #[arg(long)]
        election: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LogFormat::from_config(&cli.log_format), &cli.log_level);

    let file_config: Option<NodeConfig> = if let Some(ref config_path) = cli.config {
        match NodeConfig::from_toml_file(&config_path.display().to_string()) {
            Ok(cfg) => {
                tracing::info!("loaded config from {}", config_path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("failed to load config file: {e}, using CLI defaults");
                None
            }
        }
    } else {
        None
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = Difficulty::new(difficulty);
    }

    let service = LedgerService::open(&config);

    match cli.command {
        Command::Vote { election, option } => {
            let election = ElectionId::new(election);
            service.add_vote(election, &option);
            service.seal_pending_votes();
            tracing::info!(%election, "vote recorded and sealed");
        }
        Command::Seal => {
            service.seal_pending_votes();
        }
        Command::Tally { election } => {
            let counts = service.vote_count(ElectionId::new(election));
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
        Command::Validate => {
            let is_valid = service.is_chain_valid();
            println!("{}", serde_json::json!({ "is_valid": is_valid }));
            if !is_valid {
                anyhow::bail!("ledger snapshot failed validation");
            }
        }
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&service.export())?);
        }
        Command::Prune { election } => {
            let election = ElectionId::new(election);
            service.remove_votes_for_election(election);
            tracing::info!(%election, "election pruned");
        }
    }

    Ok(())
}
