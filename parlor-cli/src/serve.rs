use anyhow::Result;
use colored::*;
use parlor_server::RelayConfig;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, info};

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "PARLOR_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Pending messages kept per peer before the oldest is dropped.
    #[arg(
        long,
        env = "PARLOR_MAX_QUEUE",
        default_value_t = 256,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_queue_len: usize,

    /// Remove peers silent for this long. 0 keeps them until they leave.
    #[arg(long, env = "PARLOR_IDLE_TIMEOUT_SECS", default_value_t = 30)]
    idle_timeout_secs: u64,

    #[arg(
        long,
        env = "PARLOR_REAP_INTERVAL_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    reap_interval_secs: u64,
}

impl ServeArgs {
    fn into_config(self) -> RelayConfig {
        RelayConfig {
            bind_addr: self.bind,
            max_queue_len: self.max_queue_len,
            peer_idle_timeout: match self.idle_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            reap_interval: Duration::from_secs(self.reap_interval_secs),
        }
    }
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let config = args.into_config();

    println!("{}", "Starting parlor relay...".green().bold());
    println!("   Queue cap:    {}", config.max_queue_len);
    match config.peer_idle_timeout {
        Some(timeout) => println!("   Idle timeout: {:?}", timeout),
        None => println!("   Idle timeout: {}", "disabled".yellow()),
    }

    parlor_server::serve(config, shutdown_signal()).await?;

    println!("{}", "Relay stopped.".green());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
