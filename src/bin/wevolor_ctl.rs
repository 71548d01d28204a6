use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::*;
use wevolor::{configuration::get_configuration, logging::setup_tracing, Command, Wevolor};

#[derive(Parser, Debug)]
#[command(
    version,
    author = "David M. Weis <dweis7@gmail.com>",
    about = "Control Wevolor blinds over the local network"
)]
struct Args {
    /// Device address, overrides the configured host
    #[arg(long)]
    host: Option<String>,
    /// Sets path to config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sets the level of verbosity
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print device status
    Status,
    Open(Channels),
    Close(Channels),
    /// Move to favorite position
    Favorite(Channels),
    Stop(Channels),
    TiltOpen(Channels),
    TiltClose(Channels),
    TiltStop(Channels),
}

#[derive(clap::Args, Debug)]
struct Channels {
    /// 1-based channel numbers
    #[arg(required = true, value_parser = clap::value_parser!(u8).range(1..=64))]
    channels: Vec<u8>,
}

impl Action {
    fn command(&self) -> Option<(Command, &[u8])> {
        match self {
            Action::Status => None,
            Action::Open(c) => Some((Command::Open, c.channels.as_slice())),
            Action::Close(c) => Some((Command::Close, c.channels.as_slice())),
            Action::Favorite(c) => Some((Command::Favorite, c.channels.as_slice())),
            // device has no separate tilt stop
            Action::Stop(c) | Action::TiltStop(c) => Some((Command::Stop, c.channels.as_slice())),
            Action::TiltOpen(c) => Some((Command::TiltOpen, c.channels.as_slice())),
            Action::TiltClose(c) => Some((Command::TiltClose, c.channels.as_slice())),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let app_config = get_configuration(args.config)?;
    let Some(host) = args.host.or(app_config.host) else {
        bail!("No device host configured, pass --host or set APP_HOST");
    };
    let client = Wevolor::new(host);

    match args.action.command() {
        None => {
            let status = client
                .try_get_status()
                .await
                .with_context(|| format!("Failed to get status from {}", client.host()))?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Some((command, channels)) => {
            client
                .try_send_command(command, channels)
                .await
                .with_context(|| format!("Command {} failed", command))?;
            info!("Sent {} to channels {:?}", command, channels);
        }
    }
    Ok(())
}
