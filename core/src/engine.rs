use crate::event::ToneEvents;

/// Highest frequency passed to a playback engine, in Hz.
pub const MAX_FREQ_HZ: f64 = 20_000.0;
/// Highest volume passed to a playback engine.
pub const MAX_VOLUME: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Live properties of the synthesis source inside a playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProperty {
    Freq,
    Volume,
}

/// An audio pipeline with a single synthesis source.
pub trait PlaybackEngine {
    fn set_state(&mut self, state: PlaybackState) -> anyhow::Result<()>;

    /// Properties may be set in either state. Setting them while stopped must not start
    /// playback.
    fn set_property(
        &mut self,
        property: SourceProperty,
        value: f64,
    ) -> anyhow::Result<()>;
}

// `f64::clamp` passes NaN through
fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Plays the tone described by the events raised by an input surface.
pub struct ToneEngine<P: PlaybackEngine> {
    playback: P,
    state: PlaybackState,
}

impl<P: PlaybackEngine> ToneEngine<P> {
    pub fn new(playback: P) -> Self {
        Self {
            playback,
            state: PlaybackState::Stopped,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn playback(&self) -> &P {
        &self.playback
    }

    fn set_state(&mut self, state: PlaybackState) {
        match self.playback.set_state(state) {
            Ok(()) => {
                if state != self.state {
                    log::info!("playback {:?} -> {:?}", self.state, state);
                }
                self.state = state;
            }
            Err(e) => log::error!("failed to set playback to {:?}: {}", state, e),
        }
    }

    fn set_property(&mut self, property: SourceProperty, value: f64) {
        if let Err(e) = self.playback.set_property(property, value) {
            log::error!("failed to set {:?} to {}: {}", property, value, e);
        }
    }

    /// Stop playback whatever state the engine believes it is in.
    pub fn shutdown(&mut self) {
        self.set_state(PlaybackState::Stopped);
    }
}

impl<P: PlaybackEngine> ToneEvents for ToneEngine<P> {
    fn start_tone(&mut self) {
        self.set_state(PlaybackState::Playing);
    }

    fn tone_value(&mut self, freq_hz: f64, volume: f64) {
        let freq_hz = clamp_or_min(freq_hz, 0.0, MAX_FREQ_HZ);
        let volume = clamp_or_min(volume, 0.0, MAX_VOLUME);
        log::debug!("tone value: {:.1}Hz, volume {:.3}", freq_hz, volume);
        self.set_property(SourceProperty::Freq, freq_hz);
        self.set_property(SourceProperty::Volume, volume);
    }

    fn end_tone(&mut self) {
        self.set_state(PlaybackState::Stopped);
    }
}
