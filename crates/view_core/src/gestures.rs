//! User-input events and their dispatch into selectors and the command relay.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::domain::{ConsumerId, PeerId, ProducerId};
use shared::media::RoomSnapshot;
use tracing::debug;

use crate::media_state::{change_webcam_state, mic_state, share_state, webcam_state};
use crate::peer_view::PeerController;
use crate::relay::CommandRelay;

/// Pointer clicks and key bindings, normalized to one enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum UiGesture {
    /// Global "c" binding: advance the peer's active video source.
    CycleActiveSource { peer_id: PeerId },
    SelectVideoSource { peer_id: PeerId, index: usize },
    ToggleSidebar { peer_id: PeerId },
    SetPreferredLayers {
        consumer_id: Option<ConsumerId>,
        spatial_layer: u8,
        temporal_layer: u8,
    },
    SetPriority {
        consumer_id: Option<ConsumerId>,
        priority: u8,
    },
    RequestKeyFrame { consumer_id: Option<ConsumerId> },
    ToggleMic,
    ToggleWebcam,
    ChangeWebcam,
    ToggleShare,
    ToggleProducerPaused { producer_id: ProducerId },
    ChangeDisplayName { display_name: String },
    SetMaxSendingSpatialLayer { spatial_layer: u8 },
}

/// Routes a gesture either into local selector state or out through the
/// relay, always against the latest snapshot. Unknown peer or producer
/// targets degrade to logged no-ops.
pub async fn apply_gesture(
    gesture: UiGesture,
    peers: &mut HashMap<PeerId, PeerController>,
    relay: &CommandRelay,
    snapshot: &RoomSnapshot,
) {
    match gesture {
        UiGesture::CycleActiveSource { peer_id } => {
            match peers.get_mut(&peer_id) {
                Some(controller) => controller.cycle_source(),
                None => debug!(%peer_id, "cycle for unknown peer, skipping"),
            }
        }
        UiGesture::SelectVideoSource { peer_id, index } => {
            match peers.get_mut(&peer_id) {
                Some(controller) => controller.select_source(index),
                None => debug!(%peer_id, "select for unknown peer, skipping"),
            }
        }
        UiGesture::ToggleSidebar { peer_id } => {
            match peers.get_mut(&peer_id) {
                Some(controller) => controller.toggle_sidebar(),
                None => debug!(%peer_id, "sidebar toggle for unknown peer, skipping"),
            }
        }
        UiGesture::SetPreferredLayers {
            consumer_id,
            spatial_layer,
            temporal_layer,
        } => {
            relay
                .set_preferred_layers(consumer_id, spatial_layer, temporal_layer)
                .await;
        }
        UiGesture::SetPriority { consumer_id, priority } => {
            relay.set_priority(consumer_id, priority).await;
        }
        UiGesture::RequestKeyFrame { consumer_id } => {
            relay.request_key_frame(consumer_id).await;
        }
        UiGesture::ToggleMic => {
            relay
                .toggle_mic(mic_state(&snapshot.me, snapshot.audio_producer()))
                .await;
        }
        UiGesture::ToggleWebcam => {
            relay
                .toggle_webcam(webcam_state(&snapshot.me, snapshot.video_producer()))
                .await;
        }
        UiGesture::ChangeWebcam => {
            relay
                .change_webcam(change_webcam_state(&snapshot.me, snapshot.video_producer()))
                .await;
        }
        UiGesture::ToggleShare => {
            relay
                .toggle_share(share_state(&snapshot.video_producers()))
                .await;
        }
        UiGesture::ToggleProducerPaused { producer_id } => {
            relay
                .toggle_producer_paused(snapshot.producers.get(&producer_id))
                .await;
        }
        UiGesture::ChangeDisplayName { display_name } => {
            relay.change_display_name(&display_name).await;
        }
        UiGesture::SetMaxSendingSpatialLayer { spatial_layer } => {
            relay.set_max_sending_spatial_layer(spatial_layer).await;
        }
    }
}
