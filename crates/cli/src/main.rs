use std::path::PathBuf;

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crowdsale_cli::{
    commands::{finalize::finalize, save::save, status::status},
    config::{
        DEFAULT_CONFIG_PATH, ManageConfig, load_config, load_edits, resolve_rpc_url,
        signer_from_env,
    },
};
use crowdsale_core::FinalizeOutcome;

#[derive(Debug, Parser)]
#[command(name = "crowdsale-manage", about = "Crowdsale management CLI", version)]
struct Cli {
    /// Path to the management configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: PathBuf,

    /// RPC URL for the target chain (overrides network.rpc_url)
    #[arg(long, env = "CROWDSALE_RPC_URL", value_name = "URL")]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the crowdsale snapshot and readiness flags as JSON
    Status(StatusArgs),

    /// Finalize the crowdsale (signs with PRIVATE_KEY)
    Finalize(ConfirmArgs),

    /// Push tier edits from a TOML file (signs with PRIVATE_KEY)
    Save(SaveArgs),
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// Account to evaluate ownership for (defaults to the PRIVATE_KEY address)
    #[arg(long, value_name = "ADDRESS")]
    account: Option<Address>,
}

#[derive(Debug, Args)]
struct ConfirmArgs {
    /// Skip the interactive confirmation
    #[arg(long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct SaveArgs {
    /// Tier edits file
    #[arg(long, value_name = "FILE")]
    edits: PathBuf,

    #[command(flatten)]
    confirm: ConfirmArgs,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let rpc_url = resolve_rpc_url(cli.rpc_url, &config)?;

    match cli.command {
        Commands::Status(args) => handle_status(&config, &rpc_url, args).await,
        Commands::Finalize(args) => handle_finalize(&config, &rpc_url, args).await,
        Commands::Save(args) => handle_save(&config, &rpc_url, args).await,
    }
}

async fn handle_status(config: &ManageConfig, rpc_url: &str, args: StatusArgs) -> eyre::Result<()> {
    let account = match args.account {
        Some(account) => account,
        None => signer_from_env().map_or(Address::ZERO, |signer| signer.address()),
    };

    let output = status(config, rpc_url, account).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn handle_finalize(config: &ManageConfig, rpc_url: &str, args: ConfirmArgs) -> eyre::Result<()> {
    let signer = signer_from_env()?;

    match finalize(config, rpc_url, signer, args.yes).await? {
        FinalizeOutcome::Finalized { tx_hash } => println!("finalized in {tx_hash}"),
        FinalizeOutcome::Declined => println!("finalize cancelled"),
    }
    Ok(())
}

async fn handle_save(config: &ManageConfig, rpc_url: &str, args: SaveArgs) -> eyre::Result<()> {
    let signer = signer_from_env()?;
    let edits = load_edits(&args.edits)?;

    match save(config, rpc_url, signer, &edits, args.confirm.yes).await? {
        Some(outcome) => {
            for tx_hash in outcome.tx_hashes {
                println!("{tx_hash}");
            }
        }
        None => println!("save cancelled"),
    }
    Ok(())
}
