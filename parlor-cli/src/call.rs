use anyhow::{Context, Result};
use colored::*;
use dialoguer::Password;
use parlor_client::{NegotiationState, Role, SessionConfig, start_session};
use parlor_core::{IceServerConfig, PeerId};
use std::time::Duration;

#[derive(clap::Args)]
pub struct CallArgs {
    /// Base URL of the relay.
    #[arg(long, env = "PARLOR_SERVER", default_value = "http://localhost:3000")]
    server: String,

    #[arg(long, env = "PARLOR_ROOM")]
    room: String,

    /// Prompted for when omitted.
    #[arg(long, env = "PARLOR_PASSWORD")]
    password: Option<String>,

    /// Create the room and host the call.
    #[arg(long)]
    create: bool,

    /// Defaults to a random UUID.
    #[arg(long, env = "PARLOR_PEER_ID")]
    peer_id: Option<String>,

    #[arg(long, env = "PARLOR_POLL_MS", default_value_t = 1000)]
    poll_interval_ms: u64,

    /// STUN server URLs, comma separated.
    #[arg(long = "ice-server", env = "PARLOR_ICE_SERVERS", value_delimiter = ',')]
    ice_servers: Vec<String>,
}

impl CallArgs {
    fn into_config(self, password: String) -> SessionConfig {
        let role = if self.create { Role::Host } else { Role::Guest };
        let mut config = SessionConfig::new(self.server, self.room, password, role);

        if let Some(peer_id) = self.peer_id {
            config.peer_id = PeerId::from(peer_id);
        }
        config.poll_interval = Duration::from_millis(self.poll_interval_ms.max(1));
        if !self.ice_servers.is_empty() {
            config.ice_servers = self
                .ice_servers
                .into_iter()
                .map(IceServerConfig::stun)
                .collect();
        }
        config
    }
}

pub async fn run(args: CallArgs) -> Result<()> {
    let password = match args.password.clone() {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Room password")
            .interact()
            .context("Failed to read password")?,
    };
    let config = args.into_config(password);

    println!(
        "{} room '{}' as {} ({})",
        "Entering".cyan().bold(),
        config.room,
        config.peer_id,
        config.role
    );

    let mut session = start_session(config)
        .await
        .context("Failed to enter room")?;
    let mut states = session.watch_state();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                println!("{}", "Hanging up...".yellow());
                break;
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = *states.borrow_and_update();
                print_state(state);
                if state.is_closed() {
                    break;
                }
            }
            Some(e) = session.next_error() => {
                eprintln!("{} {}", "Negotiation failed:".red().bold(), e);
            }
        }
    }

    session.leave().await?;
    println!("{}", "Left the room.".green());
    Ok(())
}

fn print_state(state: NegotiationState) {
    let label = state.to_string();
    let label = match state {
        NegotiationState::Connected => label.green().bold(),
        NegotiationState::Closed => label.red().bold(),
        _ => label.cyan(),
    };
    println!("   state: {}", label);
}
