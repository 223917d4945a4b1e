//! Local-participant controller: control states, outgoing video tiles, and
//! the display-name nudge lifecycle.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use shared::domain::{PeerId, ProducerId};
use shared::media::RoomSnapshot;

use crate::media_state::{
    change_webcam_state, mic_state, share_state, webcam_state, SwitchState,
};
use crate::prompt::{DisplayNamePrompt, NudgeSink, PromptPhase};

#[derive(Debug, Clone, Serialize)]
pub struct MeTile {
    pub producer_id: ProducerId,
    pub track_id: String,
    pub codec: String,
    pub rtp_parameters: Value,
    pub score: Option<Value>,
    pub paused: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeViewModel {
    pub peer_id: PeerId,
    pub display_name: String,
    pub display_name_set: bool,
    /// Controls render only while the session is connected.
    pub connected: bool,
    pub mic: SwitchState,
    pub webcam: SwitchState,
    pub change_webcam: SwitchState,
    pub share: SwitchState,
    /// A webcam or share transition is in flight; toggles are inert.
    pub controls_disabled: bool,
    pub tiles: Vec<MeTile>,
    pub face_detection: bool,
}

/// Controller for the local participant's own view. Owns the one cancellable
/// resource of the whole core: the nudge timer.
pub struct MeController {
    prompt: DisplayNamePrompt,
}

impl MeController {
    pub fn new(nudge: Arc<dyn NudgeSink>) -> Self {
        Self {
            prompt: DisplayNamePrompt::new(nudge),
        }
    }

    pub fn with_nudge_delay(nudge: Arc<dyn NudgeSink>, delay: Duration) -> Self {
        Self {
            prompt: DisplayNamePrompt::with_delay(nudge, delay),
        }
    }

    pub fn prompt_phase(&self) -> PromptPhase {
        self.prompt.phase()
    }

    /// Mount: arms the nudge when the display name is still unset. Must run
    /// inside a tokio runtime.
    pub fn attach(&mut self, snapshot: &RoomSnapshot) {
        self.prompt.attach(snapshot.me.display_name_set);
    }

    /// Teardown: cancels the pending nudge timer on every exit path.
    pub fn detach(&mut self) {
        self.prompt.detach();
    }

    pub fn refresh(&mut self, snapshot: &RoomSnapshot) -> MeViewModel {
        self.prompt.update(snapshot.me.display_name_set);

        let me = &snapshot.me;
        let audio_producer = snapshot.audio_producer();
        let video_producer = snapshot.video_producer();
        let video_producers = snapshot.video_producers();

        let tiles = video_producers
            .iter()
            .map(|producer| MeTile {
                producer_id: producer.id.clone(),
                track_id: producer.track_id.clone(),
                codec: producer.codec.clone(),
                rtp_parameters: producer.rtp_parameters.clone(),
                score: producer.score.clone(),
                paused: producer.paused,
                visible: !producer.paused,
            })
            .collect();

        MeViewModel {
            peer_id: me.id.clone(),
            display_name: me.display_name.clone(),
            display_name_set: me.display_name_set,
            connected: snapshot.connected(),
            mic: mic_state(me, audio_producer),
            webcam: webcam_state(me, video_producer),
            change_webcam: change_webcam_state(me, video_producer),
            share: share_state(&video_producers),
            controls_disabled: me.webcam_in_progress || me.share_in_progress,
            tiles,
            face_detection: snapshot.face_detection,
        }
    }
}
