//! # Extrinsic CLI
//!
//! Builds signing payloads and signed extrinsics from a JSON signing input.
//!
//! ```text
//! extrinsic-cli payload --input transfer.json
//! EXTRINSIC_SEED=0x... extrinsic-cli sign --input transfer.json
//! ```
//!
//! Hex output goes to stdout; logs go to stderr and follow `RUST_LOG`.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use extrinsic_builder::{
    Ed25519Signer, ExtrinsicApi, ExtrinsicService, SigningInput, TransactionDescriptor,
};

/// Substrate extrinsic builder
#[derive(Parser, Debug)]
#[command(name = "extrinsic-cli")]
#[command(about = "Build signing payloads and signed extrinsics for Substrate-style chains")]
struct Args {
    /// Chain configuration JSON (call index, address tag, signature scheme)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bytes a signer must sign
    Payload {
        /// Signing input JSON
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Sign with an Ed25519 seed and print the wire-ready extrinsic
    Sign {
        /// Signing input JSON
        #[arg(short, long)]
        input: PathBuf,

        /// 32-byte Ed25519 seed, hex
        #[arg(long, env = "EXTRINSIC_SEED", hide_env_values = true)]
        seed: String,
    },
}

fn read_descriptor(path: &Path) -> Result<TransactionDescriptor> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read signing input {}", path.display()))?;
    let input = SigningInput::from_json(&json).context("Failed to parse signing input")?;
    input.to_descriptor().context("Invalid signing input")
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = config::load_config(args.config.as_deref())?;
    let service = ExtrinsicService::from_config(config).context("Invalid chain config")?;

    match args.command {
        Command::Payload { input } => {
            let descriptor = read_descriptor(&input)?;
            let payload = service.signing_payload(&descriptor)?;
            info!(len = payload.len(), "Signing payload ready");
            println!("0x{}", hex::encode(payload));
        }
        Command::Sign { input, seed } => {
            let descriptor = read_descriptor(&input)?;
            let signer = Ed25519Signer::from_seed_hex(&seed)
                .context("Invalid seed")?
                .with_config(service.config());
            let extrinsic = service.sign(&descriptor, &signer)?;
            info!(len = extrinsic.encoded.len(), "Signed extrinsic ready");
            println!("{}", extrinsic.to_hex());
        }
    }

    Ok(())
}
