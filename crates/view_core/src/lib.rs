//! View-controller core for per-participant media tiles in a multi-party
//! realtime session.
//!
//! The controllers here read immutable [`shared::media::RoomSnapshot`]s from
//! an external store, project them into render-ready view models, and relay
//! user gestures as fire-and-forget commands against an external session
//! client. Rendering itself, transport, and signaling live elsewhere.

pub mod consumers;
pub mod gestures;
pub mod media_state;
pub mod me_view;
pub mod peer_view;
pub mod prompt;
pub mod relay;
pub mod selector;

pub use consumers::ConsumerSet;
pub use gestures::{apply_gesture, UiGesture};
pub use media_state::SwitchState;
pub use me_view::{MeController, MeViewModel};
pub use peer_view::{PeerController, PeerViewModel};
pub use prompt::{DisplayNamePrompt, NudgeSink, PromptPhase};
pub use relay::{
    CommandRelay, DevicePreferenceStore, MissingRoomCommandSink, NoopDevicePreferences,
    RoomCommandSink,
};
pub use selector::ActiveSourceSelector;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
