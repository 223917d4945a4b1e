//! Stateless translation from user gestures to session-client commands.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use shared::domain::{ConsumerId, ProducerId};
use shared::error::{CommandError, CommandErrorKind};
use shared::media::Producer;
use tracing::{debug, warn};

use crate::media_state::SwitchState;

/// The external session client, treated as an opaque command sink. Command
/// failures belong to the client; the relay only logs them.
#[async_trait]
pub trait RoomCommandSink: Send + Sync {
    async fn set_consumer_preferred_layers(
        &self,
        consumer_id: ConsumerId,
        spatial_layer: u8,
        temporal_layer: u8,
    ) -> Result<()>;
    async fn set_consumer_priority(&self, consumer_id: ConsumerId, priority: u8) -> Result<()>;
    async fn request_consumer_key_frame(&self, consumer_id: ConsumerId) -> Result<()>;
    async fn change_display_name(&self, display_name: &str) -> Result<()>;
    async fn mute_mic(&self) -> Result<()>;
    async fn unmute_mic(&self) -> Result<()>;
    async fn enable_webcam(&self) -> Result<()>;
    async fn disable_webcam(&self) -> Result<()>;
    async fn change_webcam(&self) -> Result<()>;
    async fn enable_share(&self) -> Result<()>;
    async fn disable_share(&self) -> Result<()>;
    async fn pause_producer(&self, producer_id: ProducerId) -> Result<()>;
    async fn resume_producer(&self, producer_id: ProducerId) -> Result<()>;
    async fn set_max_sending_spatial_layer(&self, spatial_layer: u8) -> Result<()>;
}

fn unavailable(target: &str) -> anyhow::Error {
    CommandError::new(
        CommandErrorKind::TransportClosed,
        format!("session client unavailable for {target}"),
    )
    .into()
}

pub struct MissingRoomCommandSink;

#[async_trait]
impl RoomCommandSink for MissingRoomCommandSink {
    async fn set_consumer_preferred_layers(
        &self,
        consumer_id: ConsumerId,
        _spatial_layer: u8,
        _temporal_layer: u8,
    ) -> Result<()> {
        Err(unavailable(&format!("consumer {consumer_id}")))
    }

    async fn set_consumer_priority(&self, consumer_id: ConsumerId, _priority: u8) -> Result<()> {
        Err(unavailable(&format!("consumer {consumer_id}")))
    }

    async fn request_consumer_key_frame(&self, consumer_id: ConsumerId) -> Result<()> {
        Err(unavailable(&format!("consumer {consumer_id}")))
    }

    async fn change_display_name(&self, _display_name: &str) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn mute_mic(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn unmute_mic(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn enable_webcam(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn disable_webcam(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn change_webcam(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn enable_share(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn disable_share(&self) -> Result<()> {
        Err(unavailable("room"))
    }

    async fn pause_producer(&self, producer_id: ProducerId) -> Result<()> {
        Err(unavailable(&format!("producer {producer_id}")))
    }

    async fn resume_producer(&self, producer_id: ProducerId) -> Result<()> {
        Err(unavailable(&format!("producer {producer_id}")))
    }

    async fn set_max_sending_spatial_layer(&self, _spatial_layer: u8) -> Result<()> {
        Err(unavailable("room"))
    }
}

/// External persistence of the user's device choices. Persistence internals
/// are outside this crate; the webcam toggle only records intent here before
/// dispatching.
pub trait DevicePreferenceStore: Send + Sync {
    fn set_webcam_enabled(&self, enabled: bool);
}

pub struct NoopDevicePreferences;

impl DevicePreferenceStore for NoopDevicePreferences {
    fn set_webcam_enabled(&self, _enabled: bool) {}
}

/// Maps gestures to commands. No local state; every method is fire-and-forget
/// and degrades to a logged no-op on a missing target or a rejected command.
pub struct CommandRelay {
    sink: Arc<dyn RoomCommandSink>,
    preferences: Arc<dyn DevicePreferenceStore>,
}

impl CommandRelay {
    pub fn new(sink: Arc<dyn RoomCommandSink>, preferences: Arc<dyn DevicePreferenceStore>) -> Self {
        Self { sink, preferences }
    }

    pub async fn set_preferred_layers(
        &self,
        consumer_id: Option<ConsumerId>,
        spatial_layer: u8,
        temporal_layer: u8,
    ) {
        let Some(consumer_id) = consumer_id else {
            debug!(command = "set_preferred_layers", "no target consumer, skipping");
            return;
        };
        log_outcome(
            "set_preferred_layers",
            self.sink
                .set_consumer_preferred_layers(consumer_id, spatial_layer, temporal_layer)
                .await,
        );
    }

    pub async fn set_priority(&self, consumer_id: Option<ConsumerId>, priority: u8) {
        let Some(consumer_id) = consumer_id else {
            debug!(command = "set_priority", "no target consumer, skipping");
            return;
        };
        log_outcome(
            "set_priority",
            self.sink.set_consumer_priority(consumer_id, priority).await,
        );
    }

    pub async fn request_key_frame(&self, consumer_id: Option<ConsumerId>) {
        let Some(consumer_id) = consumer_id else {
            debug!(command = "request_key_frame", "no target consumer, skipping");
            return;
        };
        log_outcome(
            "request_key_frame",
            self.sink.request_consumer_key_frame(consumer_id).await,
        );
    }

    pub async fn change_display_name(&self, display_name: &str) {
        log_outcome(
            "change_display_name",
            self.sink.change_display_name(display_name).await,
        );
    }

    pub async fn toggle_mic(&self, state: SwitchState) {
        match state {
            SwitchState::On => log_outcome("mute_mic", self.sink.mute_mic().await),
            SwitchState::Off => log_outcome("unmute_mic", self.sink.unmute_mic().await),
            SwitchState::Unsupported => {
                debug!(command = "toggle_mic", "mic unsupported, skipping");
            }
        }
    }

    /// Records the device preference first so the choice survives even when
    /// the command itself is rejected.
    pub async fn toggle_webcam(&self, state: SwitchState) {
        match state {
            SwitchState::On => {
                self.preferences.set_webcam_enabled(false);
                log_outcome("disable_webcam", self.sink.disable_webcam().await);
            }
            SwitchState::Off => {
                self.preferences.set_webcam_enabled(true);
                log_outcome("enable_webcam", self.sink.enable_webcam().await);
            }
            SwitchState::Unsupported => {
                debug!(command = "toggle_webcam", "webcam unsupported, skipping");
            }
        }
    }

    pub async fn change_webcam(&self, state: SwitchState) {
        match state {
            SwitchState::On => log_outcome("change_webcam", self.sink.change_webcam().await),
            _ => debug!(command = "change_webcam", "webcam change unsupported, skipping"),
        }
    }

    pub async fn toggle_share(&self, state: SwitchState) {
        match state {
            SwitchState::On => log_outcome("disable_share", self.sink.disable_share().await),
            _ => log_outcome("enable_share", self.sink.enable_share().await),
        }
    }

    /// Symmetric per-producer toggle; camera and share producers pause and
    /// resume independently.
    pub async fn toggle_producer_paused(&self, producer: Option<&Producer>) {
        let Some(producer) = producer else {
            debug!(command = "toggle_producer_paused", "no target producer, skipping");
            return;
        };
        if producer.paused {
            log_outcome(
                "resume_producer",
                self.sink.resume_producer(producer.id.clone()).await,
            );
        } else {
            log_outcome(
                "pause_producer",
                self.sink.pause_producer(producer.id.clone()).await,
            );
        }
    }

    pub async fn set_max_sending_spatial_layer(&self, spatial_layer: u8) {
        log_outcome(
            "set_max_sending_spatial_layer",
            self.sink.set_max_sending_spatial_layer(spatial_layer).await,
        );
    }
}

fn log_outcome(command: &'static str, result: Result<()>) {
    if let Err(err) = result {
        warn!(command, error = %err, "session client rejected command");
    }
}
