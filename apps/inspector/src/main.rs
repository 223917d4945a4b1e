//! Headless driver for the view-controller core: feeds JSON snapshots and
//! gestures through the controllers and prints the resulting view models.

mod config;
mod sink;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use shared::domain::PeerId;
use shared::media::RoomSnapshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use view_core::{
    apply_gesture, CommandRelay, MeController, MeViewModel, PeerController, PeerViewModel,
    UiGesture,
};

use crate::sink::{LoggingCommandSink, LoggingNudge, LoggingPreferences};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project one snapshot into view models and print them as JSON.
    Render {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Replay a JSON list of snapshot/gesture steps, printing view models
    /// after every snapshot and logging every relayed command.
    Script {
        #[arg(long)]
        steps: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum Step {
    Snapshot { snapshot: RoomSnapshot },
    Gesture { gesture: UiGesture },
}

#[derive(Debug, Serialize)]
struct RoomViewModel {
    me: MeViewModel,
    peers: Vec<PeerViewModel>,
}

struct Session {
    me: MeController,
    peers: HashMap<PeerId, PeerController>,
    attached: bool,
}

impl Session {
    fn new(nudge_delay: Duration) -> Self {
        Self {
            me: MeController::with_nudge_delay(Arc::new(LoggingNudge), nudge_delay),
            peers: HashMap::new(),
            attached: false,
        }
    }

    /// Keeps one controller per peer present in the snapshot; controllers of
    /// departed peers are dropped along with their selection state.
    fn refresh(&mut self, snapshot: &RoomSnapshot) -> RoomViewModel {
        if !self.attached {
            self.me.attach(snapshot);
            self.attached = true;
        }
        self.peers
            .retain(|peer_id, _| snapshot.peer(peer_id).is_some());
        for peer in &snapshot.peers {
            self.peers
                .entry(peer.id.clone())
                .or_insert_with(|| PeerController::new(peer.id.clone()));
        }

        let mut peers: Vec<PeerViewModel> = snapshot
            .peers
            .iter()
            .filter_map(|peer| {
                self.peers
                    .get_mut(&peer.id)
                    .map(|controller| controller.refresh(snapshot))
            })
            .collect();
        peers.sort_by(|a, b| a.peer_id.cmp(&b.peer_id));

        RoomViewModel {
            me: self.me.refresh(snapshot),
            peers,
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = config::load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let cli = Cli::parse();
    let nudge_delay = Duration::from_millis(settings.nudge_delay_ms);

    match cli.command {
        Command::Render { snapshot } => {
            let snapshot: RoomSnapshot = read_json(&snapshot)?;
            let mut session = Session::new(nudge_delay);
            let model = session.refresh(&snapshot);
            println!("{}", serde_json::to_string_pretty(&model)?);
            session.me.detach();
        }
        Command::Script { steps } => {
            let steps: Vec<Step> = read_json(&steps)?;
            let mut session = Session::new(nudge_delay);
            let relay = CommandRelay::new(Arc::new(LoggingCommandSink), Arc::new(LoggingPreferences));
            let mut current: Option<RoomSnapshot> = None;

            for (index, step) in steps.into_iter().enumerate() {
                match step {
                    Step::Snapshot { snapshot } => {
                        info!(step = index, "applying snapshot refresh");
                        let model = session.refresh(&snapshot);
                        println!("{}", serde_json::to_string_pretty(&model)?);
                        current = Some(snapshot);
                    }
                    Step::Gesture { gesture } => {
                        let Some(snapshot) = current.as_ref() else {
                            warn!(step = index, "gesture before any snapshot, skipping");
                            continue;
                        };
                        info!(step = index, ?gesture, "applying gesture");
                        apply_gesture(gesture, &mut session.peers, &relay, snapshot).await;
                    }
                }
            }
            session.me.detach();
        }
    }

    Ok(())
}
