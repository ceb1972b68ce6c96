use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tonepad_core::{AxisRange, DEFAULT_DIVISIONS, RangePreset, ToneMapping};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Range {
    /// 100Hz to 10kHz, 1% to 100% volume
    Narrow,
    /// 1Hz to 20kHz, 0.1% to 100% volume
    Wide,
}

impl From<Range> for RangePreset {
    fn from(range: Range) -> Self {
        match range {
            Range::Narrow => RangePreset::Narrow,
            Range::Wide => RangePreset::Wide,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tonepad")]
#[command(
    about = "Play a tone by holding a mouse button over a frequency/volume grid"
)]
pub struct Cli {
    #[arg(short, long, default_value = "Tone Generator")]
    pub title: String,
    #[arg(long, default_value_t = 640)]
    pub width: u32,
    #[arg(long, default_value_t = 480)]
    pub height: u32,
    #[arg(short, long, value_enum, default_value_t = Range::Narrow)]
    pub range: Range,
    /// Overrides the lower frequency bound of the range, in Hz
    #[arg(long)]
    pub freq_min: Option<f64>,
    /// Overrides the upper frequency bound of the range, in Hz
    #[arg(long)]
    pub freq_max: Option<f64>,
    /// Overrides the lower volume bound of the range, between 0 and 1
    #[arg(long)]
    pub volume_min: Option<f64>,
    /// Overrides the upper volume bound of the range, between 0 and 1
    #[arg(long)]
    pub volume_max: Option<f64>,
    /// Number of grid lines along each axis
    #[arg(long, default_value_t = DEFAULT_DIVISIONS)]
    pub divisions: u32,
    /// TrueType font for the grid labels. A system font is used if omitted.
    #[arg(long)]
    pub font: Option<PathBuf>,
    #[arg(long, default_value_t = 0.01)]
    pub target_latency_s: f32,
    /// Log tone events instead of playing them
    #[arg(long)]
    pub no_audio: bool,
}

fn axis(
    preset: AxisRange,
    min: Option<f64>,
    max: Option<f64>,
) -> anyhow::Result<AxisRange> {
    AxisRange::new(min.unwrap_or(preset.min()), max.unwrap_or(preset.max()))
}

impl Cli {
    pub fn mapping(&self) -> anyhow::Result<ToneMapping> {
        let preset = RangePreset::from(self.range);
        let freq_hz = axis(preset.freq_hz(), self.freq_min, self.freq_max)
            .map_err(|e| e.context("invalid frequency range"))?;
        let volume = axis(preset.volume(), self.volume_min, self.volume_max)
            .map_err(|e| e.context("invalid volume range"))?;
        Ok(ToneMapping { freq_hz, volume })
    }
}
