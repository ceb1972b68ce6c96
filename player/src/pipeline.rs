use crate::{Config, Player, SharedSourceParams, SourceParams};
use std::sync::{Arc, RwLock};
use tonepad_core::{PlaybackEngine, PlaybackState, SourceProperty};

/// A playback engine made of a sine source and the default output device. The output stream
/// only exists while playing, so the device is released when stopped.
pub struct TonePipeline {
    player: Player,
    config: Config,
    params: SharedSourceParams,
    stream: Option<cpal::Stream>,
}

impl TonePipeline {
    pub fn new(player: Player, config: Config) -> Self {
        Self {
            player,
            config,
            params: Arc::new(RwLock::new(SourceParams::default())),
            stream: None,
        }
    }

    pub fn params(&self) -> SourceParams {
        *self.params.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_playing(&self) -> bool {
        self.stream.is_some()
    }
}

impl PlaybackEngine for TonePipeline {
    fn set_state(&mut self, state: PlaybackState) -> anyhow::Result<()> {
        match state {
            PlaybackState::Playing => {
                if self.stream.is_none() {
                    let stream = self
                        .player
                        .play_sine(Arc::clone(&self.params), self.config)?;
                    self.stream = Some(stream);
                }
            }
            PlaybackState::Stopped => {
                if let Some(stream) = self.stream.take() {
                    log::debug!("dropping output stream");
                    drop(stream);
                }
            }
        }
        Ok(())
    }

    fn set_property(
        &mut self,
        property: SourceProperty,
        value: f64,
    ) -> anyhow::Result<()> {
        let mut params = self
            .params
            .write()
            .map_err(|_| anyhow::anyhow!("audio thread panicked"))?;
        match property {
            SourceProperty::Freq => params.freq_hz = value as f32,
            SourceProperty::Volume => params.volume = value as f32,
        }
        Ok(())
    }
}
