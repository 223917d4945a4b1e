//! Per-peer controller: projects one peer's consumers into a render-ready
//! view model and owns that peer's active-source selection.

use serde::Serialize;
use serde_json::Value;
use shared::domain::{ConsumerId, PeerId};
use shared::media::{Consumer, RoomSnapshot};

use crate::consumers::ConsumerSet;
use crate::media_state::{audio_enabled, multi_layer, video_enabled, video_visible};
use crate::selector::ActiveSourceSelector;

#[derive(Debug, Clone, Serialize)]
pub struct AudioTile {
    pub consumer_id: ConsumerId,
    pub track_id: String,
    pub codec: String,
    pub rtp_parameters: Value,
    pub score: Option<Value>,
    /// Global local mute, not the consumer's own pause flags.
    pub muted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceTile {
    pub consumer_id: ConsumerId,
    pub track_id: String,
    pub codec: String,
    pub rtp_parameters: Value,
    pub score: Option<Value>,
    pub spatial_layers: u8,
    pub temporal_layers: u8,
    pub current_spatial_layer: Option<u8>,
    pub current_temporal_layer: Option<u8>,
    pub preferred_spatial_layer: u8,
    pub preferred_temporal_layer: u8,
    pub priority: u8,
    pub enabled: bool,
    pub visible: bool,
    pub multi_layer: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeerViewModel {
    pub peer_id: PeerId,
    pub display_name: String,
    pub mic_off_indicator: bool,
    pub webcam_off_indicator: bool,
    pub audio: Option<AudioTile>,
    pub tiles: Vec<SourceTile>,
    /// The active source rendered full-size; hidden while the sidebar is
    /// expanded.
    pub main: Option<SourceTile>,
    pub sidebar_open: bool,
    pub face_detection: bool,
}

/// One instance per rendered peer; owns the peer's `active_index` and
/// sidebar state exclusively.
#[derive(Debug)]
pub struct PeerController {
    peer_id: PeerId,
    selector: ActiveSourceSelector,
    sidebar_open: bool,
}

impl PeerController {
    pub fn new(peer_id: PeerId) -> Self {
        Self {
            peer_id,
            selector: ActiveSourceSelector::new(),
            sidebar_open: false,
        }
    }

    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    pub fn active_index(&self) -> usize {
        self.selector.active_index()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Global hotkey: advance to the next video source.
    pub fn cycle_source(&mut self) {
        self.selector.cycle();
    }

    /// Tile click: pick a source directly and collapse the sidebar.
    pub fn select_source(&mut self, index: usize) {
        self.selector.select(index);
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Recomputes the view model from a fresh snapshot. Validity correction
    /// runs before any derivation, so the model never reflects an invalid
    /// active index. A peer missing from the snapshot yields an empty model.
    pub fn refresh(&mut self, snapshot: &RoomSnapshot) -> PeerViewModel {
        let consumers = snapshot.peer_consumers(&self.peer_id);
        let set = ConsumerSet::partition(&consumers);

        self.selector.validate(&set.videos);
        let active = self.selector.active_consumer(&set.videos);
        let active_id = active.map(|consumer| consumer.id.clone());

        let audio = set.audio.map(|consumer| AudioTile {
            consumer_id: consumer.id.clone(),
            track_id: consumer.track_id.clone(),
            codec: consumer.codec.clone(),
            rtp_parameters: consumer.rtp_parameters.clone(),
            score: consumer.score.clone(),
            muted: snapshot.me.audio_muted,
        });

        let tiles = set
            .videos
            .iter()
            .map(|consumer| source_tile(consumer, active_id.as_ref() == Some(&consumer.id)))
            .collect();

        PeerViewModel {
            peer_id: self.peer_id.clone(),
            display_name: snapshot
                .peer(&self.peer_id)
                .map(|peer| peer.display_name.clone())
                .unwrap_or_default(),
            mic_off_indicator: !audio_enabled(set.audio),
            webcam_off_indicator: active.is_none(),
            audio,
            tiles,
            main: active.map(|consumer| source_tile(consumer, true)),
            sidebar_open: self.sidebar_open,
            face_detection: snapshot.face_detection,
        }
    }
}

fn source_tile(consumer: &Consumer, active: bool) -> SourceTile {
    SourceTile {
        consumer_id: consumer.id.clone(),
        track_id: consumer.track_id.clone(),
        codec: consumer.codec.clone(),
        rtp_parameters: consumer.rtp_parameters.clone(),
        score: consumer.score.clone(),
        spatial_layers: consumer.spatial_layers,
        temporal_layers: consumer.temporal_layers,
        current_spatial_layer: consumer.current_spatial_layer,
        current_temporal_layer: consumer.current_temporal_layer,
        preferred_spatial_layer: consumer.preferred_spatial_layer,
        preferred_temporal_layer: consumer.preferred_temporal_layer,
        priority: consumer.priority,
        enabled: video_enabled(Some(consumer)),
        visible: video_visible(Some(consumer)),
        multi_layer: multi_layer(consumer),
        active,
    }
}
