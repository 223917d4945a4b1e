//! Read-only media records supplied by the external state store on every
//! refresh. The view controllers never mutate these; changes only arrive
//! through the next snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ConnectionState, ConsumerId, MediaKind, PeerId, ProducerId, StreamType};

/// Inbound media stream received from a remote participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    pub id: ConsumerId,
    pub kind: MediaKind,
    pub stream_type: StreamType,
    pub track_id: String,
    pub codec: String,
    /// Opaque negotiated RTP parameters, forwarded untouched to renderers.
    #[serde(default)]
    pub rtp_parameters: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
    pub locally_paused: bool,
    pub remotely_paused: bool,
    pub spatial_layers: u8,
    pub temporal_layers: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_spatial_layer: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_temporal_layer: Option<u8>,
    pub preferred_spatial_layer: u8,
    pub preferred_temporal_layer: u8,
    pub priority: u8,
}

/// Outbound media stream published by the local participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub id: ProducerId,
    pub kind: MediaKind,
    pub stream_type: StreamType,
    pub track_id: String,
    pub codec: String,
    #[serde(default)]
    pub rtp_parameters: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
    pub paused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Peer {
    pub id: PeerId,
    pub display_name: String,
    /// Consumer ids in source order; resolved against `RoomSnapshot::consumers`.
    pub consumers: Vec<ConsumerId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Me {
    pub id: PeerId,
    pub display_name: String,
    pub display_name_set: bool,
    pub can_send_mic: bool,
    pub can_send_webcam: bool,
    pub can_change_webcam: bool,
    pub audio_muted: bool,
    pub webcam_in_progress: bool,
    pub share_in_progress: bool,
}

/// One immutable view of the store, handed to the controllers on every
/// state-change notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub state: ConnectionState,
    pub face_detection: bool,
    pub me: Me,
    pub peers: Vec<Peer>,
    pub consumers: HashMap<ConsumerId, Consumer>,
    pub producers: HashMap<ProducerId, Producer>,
}

impl RoomSnapshot {
    pub fn connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn peer(&self, peer_id: &PeerId) -> Option<&Peer> {
        self.peers.iter().find(|peer| &peer.id == peer_id)
    }

    /// Resolves a peer's consumer id list in source order. Stale ids are
    /// skipped; a transient gap in the store is not an error.
    pub fn peer_consumers(&self, peer_id: &PeerId) -> Vec<&Consumer> {
        let Some(peer) = self.peer(peer_id) else {
            return Vec::new();
        };
        peer.consumers
            .iter()
            .filter_map(|consumer_id| self.consumers.get(consumer_id))
            .collect()
    }

    fn producers_sorted(&self) -> Vec<&Producer> {
        let mut producers: Vec<&Producer> = self.producers.values().collect();
        producers.sort_by(|a, b| a.id.cmp(&b.id));
        producers
    }

    pub fn audio_producer(&self) -> Option<&Producer> {
        self.producers_sorted()
            .into_iter()
            .find(|producer| producer.kind == MediaKind::Audio)
    }

    /// The webcam producer. Share producers are a separate control surface
    /// and never stand in for the webcam.
    pub fn video_producer(&self) -> Option<&Producer> {
        self.producers_sorted()
            .into_iter()
            .find(|producer| {
                producer.kind == MediaKind::Video && producer.stream_type != StreamType::Share
            })
    }

    pub fn video_producers(&self) -> Vec<&Producer> {
        self.producers_sorted()
            .into_iter()
            .filter(|producer| producer.kind == MediaKind::Video)
            .collect()
    }
}
