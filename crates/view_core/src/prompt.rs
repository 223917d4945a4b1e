//! One-shot deferred nudge reminding the user to set a display name.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Delay before the nudge fires when the display name is still unset.
pub const DISPLAY_NAME_NUDGE_DELAY: Duration = Duration::from_millis(4000);

/// Minimal show/hide contract of the nudge widget.
pub trait NudgeSink: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPhase {
    Idle,
    Armed,
    Fired,
    /// Fired, then hidden after the name was set.
    Dismissed,
    Cancelled,
}

/// Per-controller prompt lifecycle. The timer task is guarded by a liveness
/// flag and aborted on detach, so a torn-down controller never shows the
/// nudge. Must be attached from within a tokio runtime.
pub struct DisplayNamePrompt {
    phase: Arc<Mutex<PromptPhase>>,
    alive: Arc<AtomicBool>,
    sink: Arc<dyn NudgeSink>,
    delay: Duration,
    timer: Option<JoinHandle<()>>,
}

impl DisplayNamePrompt {
    pub fn new(sink: Arc<dyn NudgeSink>) -> Self {
        Self::with_delay(sink, DISPLAY_NAME_NUDGE_DELAY)
    }

    pub fn with_delay(sink: Arc<dyn NudgeSink>, delay: Duration) -> Self {
        Self {
            phase: Arc::new(Mutex::new(PromptPhase::Idle)),
            alive: Arc::new(AtomicBool::new(true)),
            sink,
            delay,
            timer: None,
        }
    }

    pub fn phase(&self) -> PromptPhase {
        self.phase
            .lock()
            .map(|phase| *phase)
            .unwrap_or(PromptPhase::Cancelled)
    }

    /// Arms the prompt on mount. A name that is already set means there is
    /// nothing to nudge about and the prompt stays idle forever.
    pub fn attach(&mut self, display_name_set: bool) {
        {
            let Ok(mut phase) = self.phase.lock() else {
                return;
            };
            if *phase != PromptPhase::Idle {
                debug!(phase = ?*phase, "display-name prompt attached twice, ignoring");
                return;
            }
            if display_name_set {
                return;
            }
            *phase = PromptPhase::Armed;
        }

        let phase = Arc::clone(&self.phase);
        let alive = Arc::clone(&self.alive);
        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !alive.load(Ordering::SeqCst) {
                return;
            }
            let Ok(mut phase) = phase.lock() else {
                return;
            };
            if *phase == PromptPhase::Armed {
                *phase = PromptPhase::Fired;
                sink.show();
            }
        }));
    }

    /// Reacts to the display-name-set condition on every refresh. Setting
    /// the name cancels an armed prompt, or hides a fired one exactly once.
    pub fn update(&mut self, display_name_set: bool) {
        if !display_name_set || !self.alive.load(Ordering::SeqCst) {
            return;
        }
        let transition = {
            let Ok(mut phase) = self.phase.lock() else {
                return;
            };
            match *phase {
                PromptPhase::Armed => {
                    *phase = PromptPhase::Cancelled;
                    Some(PromptPhase::Cancelled)
                }
                PromptPhase::Fired => {
                    *phase = PromptPhase::Dismissed;
                    Some(PromptPhase::Dismissed)
                }
                _ => None,
            }
        };
        match transition {
            Some(PromptPhase::Cancelled) => self.clear_timer(),
            Some(PromptPhase::Dismissed) => self.sink.hide(),
            _ => {}
        }
    }

    /// Tears the prompt down; no transition happens after this.
    pub fn detach(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
        self.clear_timer();
        if let Ok(mut phase) = self.phase.lock() {
            if matches!(*phase, PromptPhase::Idle | PromptPhase::Armed) {
                *phase = PromptPhase::Cancelled;
            }
        }
    }

    fn clear_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for DisplayNamePrompt {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
        self.clear_timer();
    }
}
