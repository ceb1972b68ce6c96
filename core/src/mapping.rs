use crate::axis::{AxisRange, RangePreset};

/// Size of the drawing surface in device pixels. Both dimensions are at least 1 so that mapping
/// a coordinate never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    width_px: u32,
    height_px: u32,
}

impl SurfaceSize {
    pub const fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px: if width_px == 0 { 1 } else { width_px },
            height_px: if height_px == 0 { 1 } else { height_px },
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    pub freq_hz: f64,
    pub volume: f64,
}

/// Convert a pointer position to a frequency and a volume.
///
/// Higher values of `x` give higher frequencies. Lower values of `y` give higher volumes since
/// `y = 0` is the top of the surface. Both axes are logarithmic and the result always lies within
/// the given ranges, even when the position is outside the surface.
pub fn map(
    x: f64,
    y: f64,
    size: SurfaceSize,
    freq_range: AxisRange,
    volume_range: AxisRange,
) -> ToneParams {
    let width = size.width_px as f64;
    let height = size.height_px as f64;
    let freq_hz = freq_range.value_at(x / width);
    let y_inverted = (height - 1.0) - y;
    let volume = volume_range.value_at(y_inverted / height);
    ToneParams { freq_hz, volume }
}

/// The pair of ranges used to convert between surface positions and tone parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapping {
    pub freq_hz: AxisRange,
    pub volume: AxisRange,
}

impl Default for ToneMapping {
    fn default() -> Self {
        RangePreset::default().into()
    }
}

impl From<RangePreset> for ToneMapping {
    fn from(preset: RangePreset) -> Self {
        Self {
            freq_hz: preset.freq_hz(),
            volume: preset.volume(),
        }
    }
}

impl ToneMapping {
    pub fn map(&self, x: f64, y: f64, size: SurfaceSize) -> ToneParams {
        map(x, y, size, self.freq_hz, self.volume)
    }

    /// The surface position which `map` sends to `params`, for params within range.
    pub fn position_of(
        &self,
        params: ToneParams,
        size: SurfaceSize,
    ) -> (f64, f64) {
        let width = size.width_px as f64;
        let height = size.height_px as f64;
        let x = self.freq_hz.fraction_of(params.freq_hz) * width;
        let y_inverted = self.volume.fraction_of(params.volume) * height;
        (x, (height - 1.0) - y_inverted)
    }
}
