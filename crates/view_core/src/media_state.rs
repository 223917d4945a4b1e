//! Pure derivations from consumer/producer pause flags to render state.
//!
//! These are recomputed on every snapshot; the underlying flags can flip out
//! of band (a server-driven remote pause), so nothing here is cached.

use serde::{Deserialize, Serialize};
use shared::domain::StreamType;
use shared::media::{Consumer, Me, Producer};

/// Three-valued state of a local media control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchState {
    Unsupported,
    On,
    Off,
}

pub fn audio_enabled(consumer: Option<&Consumer>) -> bool {
    consumer
        .map(|c| !c.locally_paused && !c.remotely_paused)
        .unwrap_or(false)
}

/// A locally paused video consumer still counts as enabled: the tile stays,
/// only the picture is blanked (see [`video_visible`]).
pub fn video_enabled(consumer: Option<&Consumer>) -> bool {
    consumer.map(|c| !c.remotely_paused).unwrap_or(false)
}

pub fn video_visible(consumer: Option<&Consumer>) -> bool {
    video_enabled(consumer) && consumer.map(|c| !c.locally_paused).unwrap_or(false)
}

pub fn multi_layer(consumer: &Consumer) -> bool {
    consumer.stream_type != StreamType::Simple
}

/// Capability gates take precedence over producer state: no capability or no
/// producer means the control is unsupported, not merely off.
pub fn mic_state(me: &Me, audio_producer: Option<&Producer>) -> SwitchState {
    if !me.can_send_mic {
        return SwitchState::Unsupported;
    }
    match audio_producer {
        None => SwitchState::Unsupported,
        Some(producer) if !producer.paused => SwitchState::On,
        Some(_) => SwitchState::Off,
    }
}

pub fn webcam_state(me: &Me, video_producer: Option<&Producer>) -> SwitchState {
    if !me.can_send_webcam {
        return SwitchState::Unsupported;
    }
    match video_producer {
        None => SwitchState::Unsupported,
        Some(producer) if !producer.paused => SwitchState::On,
        Some(_) => SwitchState::Off,
    }
}

pub fn change_webcam_state(me: &Me, video_producer: Option<&Producer>) -> SwitchState {
    match video_producer {
        Some(producer) if producer.stream_type != StreamType::Share && me.can_change_webcam => {
            SwitchState::On
        }
        _ => SwitchState::Unsupported,
    }
}

pub fn share_state(video_producers: &[&Producer]) -> SwitchState {
    let sharing = video_producers
        .iter()
        .any(|producer| producer.stream_type == StreamType::Share);
    if sharing {
        SwitchState::On
    } else {
        SwitchState::Off
    }
}
