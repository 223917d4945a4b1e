//! Logging implementations of the external collaborator seams, used as the
//! demo command sink.

use anyhow::Result;
use async_trait::async_trait;
use shared::domain::{ConsumerId, ProducerId};
use tracing::info;
use view_core::{DevicePreferenceStore, NudgeSink, RoomCommandSink};

pub struct LoggingCommandSink;

#[async_trait]
impl RoomCommandSink for LoggingCommandSink {
    async fn set_consumer_preferred_layers(
        &self,
        consumer_id: ConsumerId,
        spatial_layer: u8,
        temporal_layer: u8,
    ) -> Result<()> {
        info!(%consumer_id, spatial_layer, temporal_layer, "set_consumer_preferred_layers");
        Ok(())
    }

    async fn set_consumer_priority(&self, consumer_id: ConsumerId, priority: u8) -> Result<()> {
        info!(%consumer_id, priority, "set_consumer_priority");
        Ok(())
    }

    async fn request_consumer_key_frame(&self, consumer_id: ConsumerId) -> Result<()> {
        info!(%consumer_id, "request_consumer_key_frame");
        Ok(())
    }

    async fn change_display_name(&self, display_name: &str) -> Result<()> {
        info!(display_name, "change_display_name");
        Ok(())
    }

    async fn mute_mic(&self) -> Result<()> {
        info!("mute_mic");
        Ok(())
    }

    async fn unmute_mic(&self) -> Result<()> {
        info!("unmute_mic");
        Ok(())
    }

    async fn enable_webcam(&self) -> Result<()> {
        info!("enable_webcam");
        Ok(())
    }

    async fn disable_webcam(&self) -> Result<()> {
        info!("disable_webcam");
        Ok(())
    }

    async fn change_webcam(&self) -> Result<()> {
        info!("change_webcam");
        Ok(())
    }

    async fn enable_share(&self) -> Result<()> {
        info!("enable_share");
        Ok(())
    }

    async fn disable_share(&self) -> Result<()> {
        info!("disable_share");
        Ok(())
    }

    async fn pause_producer(&self, producer_id: ProducerId) -> Result<()> {
        info!(%producer_id, "pause_producer");
        Ok(())
    }

    async fn resume_producer(&self, producer_id: ProducerId) -> Result<()> {
        info!(%producer_id, "resume_producer");
        Ok(())
    }

    async fn set_max_sending_spatial_layer(&self, spatial_layer: u8) -> Result<()> {
        info!(spatial_layer, "set_max_sending_spatial_layer");
        Ok(())
    }
}

pub struct LoggingPreferences;

impl DevicePreferenceStore for LoggingPreferences {
    fn set_webcam_enabled(&self, enabled: bool) {
        info!(enabled, "persisting webcam device preference");
    }
}

pub struct LoggingNudge;

impl NudgeSink for LoggingNudge {
    fn show(&self) {
        info!("display-name nudge shown");
    }

    fn hide(&self) {
        info!("display-name nudge hidden");
    }
}
