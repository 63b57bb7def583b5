use thiserror::Error;

/// The platform refused to start playback without a user gesture.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ambient playback blocked: {0}")]
pub struct PlaybackBlocked(pub String);

/// Looping background track.
///
/// Platforms that only learn about a refusal later (a rejected promise)
/// return `Ok` here and report through `Session::audio_blocked`.
pub trait AmbientAudio {
    fn play(&mut self) -> Result<(), PlaybackBlocked>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioState {
    #[default]
    Idle,
    Playing,
    /// Blocked on load; the next user gesture retries once.
    AwaitingGesture,
    /// The single retry also failed; no further attempts.
    GaveUp,
}

/// Start-on-load with a single retry on the first user input. Independent of
/// the view state.
#[derive(Debug, Default)]
pub struct AmbientAudioController {
    state: AudioState,
    retried: bool,
}

impl AmbientAudioController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn start(&mut self, audio: &mut dyn AmbientAudio) {
        if self.state != AudioState::Idle {
            return;
        }
        match audio.play() {
            Ok(()) => self.state = AudioState::Playing,
            Err(e) => self.on_blocked(e),
        }
    }

    /// Playback was refused, either synchronously or after the fact.
    pub fn on_blocked(&mut self, reason: PlaybackBlocked) {
        if self.state == AudioState::GaveUp {
            return;
        }
        if self.retried {
            log::warn!("[audio] retry failed: {}", reason);
            self.state = AudioState::GaveUp;
        } else {
            log::info!("[audio] {}; waiting for first input", reason);
            self.state = AudioState::AwaitingGesture;
        }
    }

    /// Called on pointer clicks and key presses. Only the first one after a
    /// blocked start does anything.
    pub fn on_user_gesture(&mut self, audio: &mut dyn AmbientAudio) {
        if self.state != AudioState::AwaitingGesture {
            return;
        }
        self.retried = true;
        match audio.play() {
            Ok(()) => self.state = AudioState::Playing,
            Err(e) => self.on_blocked(e),
        }
    }
}
