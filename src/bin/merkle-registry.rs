//! Merkle Registry CLI.
//!
//! Builds a tree from a file of hex-encoded leaves (one per line, `#` starts a
//! comment) and prints its root, a proof, or a verification result.
//!
//! Usage:
//!   cargo run --features cli --bin merkle-registry -- root leaves.txt
//!   cargo run --features cli --bin merkle-registry -- prove leaves.txt 3
//!   cargo run --features cli --bin merkle-registry -- verify leaves.txt 3 0x00..2a
//!
//! Exit status: 0 on success (and when `verify` prints `true`), 2 when
//! `verify` prints `false`, 1 on any error, including an out-of-range index.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use merkle_registry::{
    parse_hex32, to_hex, EventRecorder, HashAlgorithm, MerkleTree, Node, TreeConfig, TreeError,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "merkle-registry", version, about = "Append-only Merkle tree tool")]
struct Cli {
    /// JSON config file selecting the hash algorithm
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured hash algorithm (keccak256, sha3-256, sha256)
    #[arg(long, global = true)]
    hash: Option<HashAlgorithm>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the root of the tree built from LEAVES
    Root { leaves: PathBuf },
    /// Print the inclusion proof for INDEX as a JSON array of hex siblings
    Prove { leaves: PathBuf, index: u64 },
    /// Check that VALUE is the leaf at INDEX
    Verify {
        leaves: PathBuf,
        index: u64,
        value: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] merkle_registry::ConfigError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Line {line}: invalid leaf: {source}")]
    BadLeaf { line: usize, source: hex::FromHexError },
    #[error("Invalid value: {0}")]
    BadValue(hex::FromHexError),
    #[error("Cannot encode proof: {0}")]
    Json(#[from] serde_json::Error),
}

fn load_config(cli: &Cli) -> Result<TreeConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => TreeConfig::from_file(path)?,
        None => TreeConfig::default(),
    };
    if let Some(hash) = cli.hash {
        config = config.with_hash(hash);
    }
    Ok(config)
}

fn load_leaves(path: &Path) -> Result<Vec<Node>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    raw.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| parse_hex32(text).map_err(|source| CliError::BadLeaf { line, source }))
        .collect()
}

fn build_tree(config: &TreeConfig, path: &Path) -> Result<MerkleTree<HashAlgorithm>, CliError> {
    let leaves = load_leaves(path)?;
    let mut tree = MerkleTree::from_config(config);
    let recorder = EventRecorder::new();
    tree.subscribe(recorder.clone());
    for leaf in leaves {
        tree.add_leaf(leaf);
    }
    debug!(events = recorder.len(), "tree built");
    info!(
        hash = %config.hash,
        leaves = tree.leaf_count(),
        root = %to_hex(&tree.merkle_root()),
        "loaded tree"
    );
    Ok(tree)
}

fn run(cli: Cli) -> Result<bool, CliError> {
    let config = load_config(&cli)?;
    match &cli.command {
        Command::Root { leaves } => {
            let tree = build_tree(&config, leaves)?;
            println!("{}", to_hex(&tree.merkle_root()));
            Ok(true)
        }
        Command::Prove { leaves, index } => {
            let tree = build_tree(&config, leaves)?;
            let proof = tree.build_proof(*index)?;
            let siblings: Vec<String> = proof.siblings().iter().map(to_hex).collect();
            println!("{}", serde_json::to_string_pretty(&siblings)?);
            Ok(true)
        }
        Command::Verify {
            leaves,
            index,
            value,
        } => {
            let tree = build_tree(&config, leaves)?;
            let value = parse_hex32(value).map_err(CliError::BadValue)?;
            let valid = tree.verify_leaf(&value, *index)?;
            println!("{valid}");
            Ok(valid)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
