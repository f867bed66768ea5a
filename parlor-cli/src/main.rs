use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod call;
mod serve;

use call::CallArgs;
use serve::ServeArgs;

#[derive(Parser)]
#[command(name = "parlor", version)]
#[command(about = "Room directory and signaling relay for WebRTC peers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the signaling relay until Ctrl-C.
    Serve(ServeArgs),
    /// Enter a room as a peer and negotiate a call.
    Call(CallArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Call(args) => call::run(args).await,
    }
}
