use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, Device, OutputCallbackInfo, StreamConfig, SupportedBufferSize,
};

mod pipeline;
mod sine;

pub use pipeline::TonePipeline;
pub use sine::{SharedSourceParams, SineSource, SourceParams};

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// default: 0.01
    pub target_latency_s: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_latency_s: 0.01,
        }
    }
}

pub struct Player {
    device: Device,
}

impl Player {
    pub fn new() -> anyhow::Result<Self> {
        let host = cpal::default_host();
        log::info!("cpal host: {}", host.id().name());
        let device = host
            .default_output_device()
            .ok_or(anyhow::anyhow!("no output device"))?;
        if let Ok(name) = device.name() {
            log::info!("cpal device: {}", name);
        } else {
            log::info!("cpal device: (no name)");
        }
        Ok(Self { device })
    }

    fn choose_config(&self, config: Config) -> anyhow::Result<StreamConfig> {
        let default_config = self.device.default_output_config()?;
        let sample_rate = default_config.sample_rate();
        let channels = default_config.channels() as u32;
        let ideal_buffer_size = buffer_size_for_latency(
            sample_rate.0,
            channels,
            config.target_latency_s,
        );
        let buffer_size = match default_config.buffer_size() {
            SupportedBufferSize::Range { min, max } => {
                let frame_count = if ideal_buffer_size < *min {
                    *min
                } else if ideal_buffer_size > *max {
                    *max
                } else {
                    ideal_buffer_size
                };
                BufferSize::Fixed(frame_count)
            }
            SupportedBufferSize::Unknown => BufferSize::Default,
        };
        Ok(StreamConfig {
            channels: channels as u16,
            sample_rate,
            buffer_size,
        })
    }

    /// Start a stream playing the given source on the output device. The stream plays until it
    /// is dropped.
    pub fn play_sine(
        &self,
        params: SharedSourceParams,
        config: Config,
    ) -> anyhow::Result<cpal::Stream> {
        let config = self.choose_config(config)?;
        log::info!("sample rate: {}", config.sample_rate.0);
        log::info!("num channels: {}", config.channels);
        log::info!("buffer size: {:?}", config.buffer_size);
        let mut source = SineSource::new(params, config.sample_rate.0 as f32);
        let stream = self.device.build_output_stream(
            &config,
            {
                let channels = config.channels as usize;
                move |data: &mut [f32], _: &OutputCallbackInfo| {
                    source.fill(data, channels);
                }
            },
            |err| log::error!("stream error: {}", err),
            None,
        )?;
        stream.play()?;
        Ok(stream)
    }
}

fn buffer_size_for_latency(
    sample_rate_hz: u32,
    channels: u32,
    target_latency_s: f32,
) -> u32 {
    let ideal_buffer_size =
        (sample_rate_hz as f32 * target_latency_s) as u32 * channels;
    // Round down to a multiple of 4. It's not clear why this is necessary but alsa complains
    // if the buffer size is not evenly divisible by 4.
    ideal_buffer_size & (!3)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_latency_buffer_size() {
        assert_eq!(buffer_size_for_latency(48_000, 2, 0.01), 960);
    }

    #[test]
    fn buffer_size_is_multiple_of_4() {
        assert_eq!(buffer_size_for_latency(44_100, 1, 0.01), 440);
        assert_eq!(buffer_size_for_latency(44_100, 3, 0.01), 1320);
        assert_eq!(buffer_size_for_latency(22_050, 1, 0.01), 220);
        assert_eq!(buffer_size_for_latency(10, 1, 0.3), 0);
    }
}
