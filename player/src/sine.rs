use std::{
    f32::consts::PI,
    sync::{Arc, RwLock},
};

/// Parameters of the sine source which can be changed while it plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceParams {
    pub freq_hz: f32,
    pub volume: f32,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            freq_hz: 440.0,
            volume: 0.8,
        }
    }
}

pub type SharedSourceParams = Arc<RwLock<SourceParams>>;

/// A sine wave oscillator which reads its frequency and volume from parameters shared with the
/// control thread.
pub struct SineSource {
    params: SharedSourceParams,
    sample_rate_hz: f32,
    // position within the current cycle, in 0..1
    state: f32,
}

impl SineSource {
    pub fn new(params: SharedSourceParams, sample_rate_hz: f32) -> Self {
        Self {
            params,
            sample_rate_hz,
            state: 0.0,
        }
    }

    fn next_sample(&mut self, params: SourceParams) -> f32 {
        let sample = (self.state * PI * 2.0).sin() * params.volume;
        let state_delta = params.freq_hz / self.sample_rate_hz;
        let try_state = (self.state + state_delta).rem_euclid(1.0);
        if !try_state.is_nan() {
            self.state = try_state;
        }
        sample
    }

    /// Fill an interleaved buffer, writing the same sample to every channel of each frame. The
    /// parameters are read once per buffer.
    pub fn fill(&mut self, data: &mut [f32], channels: usize) {
        let params = match self.params.read() {
            Ok(params) => *params,
            Err(poisoned) => *poisoned.into_inner(),
        };
        for frame in data.chunks_mut(channels.max(1)) {
            let sample = self.next_sample(params);
            for element in frame {
                *element = sample;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn source(freq_hz: f32, volume: f32, sample_rate_hz: f32) -> SineSource {
        SineSource::new(
            Arc::new(RwLock::new(SourceParams { freq_hz, volume })),
            sample_rate_hz,
        )
    }

    #[test]
    fn starts_at_zero_phase() {
        let mut sine = source(440.0, 1.0, 48_000.0);
        let mut data = [1.0; 2];
        sine.fill(&mut data, 2);
        assert_eq!(data, [0.0, 0.0]);
    }

    #[test]
    fn quarter_cycle_peaks_at_volume() {
        // 4 samples per cycle
        let mut sine = source(1.0, 0.5, 4.0);
        let mut data = [0.0; 4];
        sine.fill(&mut data, 1);
        assert!((data[1] - 0.5).abs() < 1e-6);
        assert!(data[2].abs() < 1e-6);
        assert!((data[3] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn all_channels_of_a_frame_match() {
        let mut sine = source(1000.0, 0.3, 44_100.0);
        let mut data = [0.0; 64];
        sine.fill(&mut data, 2);
        for frame in data.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn output_bounded_by_volume() {
        let mut sine = source(1234.5, 0.25, 44_100.0);
        let mut data = [0.0; 1024];
        sine.fill(&mut data, 1);
        assert!(data.iter().all(|s| s.abs() <= 0.25 + 1e-6));
    }

    #[test]
    fn param_changes_apply_to_the_next_buffer() {
        let params = Arc::new(RwLock::new(SourceParams {
            freq_hz: 1.0,
            volume: 0.0,
        }));
        let mut sine = SineSource::new(Arc::clone(&params), 4.0);
        let mut data = [0.0; 4];
        sine.fill(&mut data, 1);
        assert!(data.iter().all(|&s| s == 0.0));
        params.write().unwrap().volume = 1.0;
        sine.fill(&mut data, 1);
        // the phase carried on from the previous buffer
        assert!(data[0].abs() < 1e-6);
        assert!((data[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_frequency_holds_phase() {
        let mut sine = source(0.0, 1.0, 48_000.0);
        let mut data = [1.0; 8];
        sine.fill(&mut data, 1);
        assert!(data.iter().all(|&s| s == 0.0));
    }
}
