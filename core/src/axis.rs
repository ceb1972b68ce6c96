use anyhow::bail;

/// The bounds of a logarithmic scale. Both bounds are finite and `0 < min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Audible frequencies spanned by the surface by default, in Hz.
    pub const FREQ_HZ: Self = Self {
        min: 100.0,
        max: 10_000.0,
    };

    /// Volumes spanned by the surface by default, as a linear gain.
    pub const VOLUME: Self = Self { min: 0.01, max: 1.0 };

    pub const WIDE_FREQ_HZ: Self = Self {
        min: 1.0,
        max: 20_000.0,
    };

    /// A log scale can't reach 0 so the quietest wide volume is -60dB.
    pub const WIDE_VOLUME: Self = Self {
        min: 0.001,
        max: 1.0,
    };

    pub fn new(min: f64, max: f64) -> anyhow::Result<Self> {
        if !(min.is_finite() && max.is_finite()) {
            bail!("axis bounds must be finite (got {min}..{max})");
        }
        if min <= 0.0 {
            bail!("axis lower bound must be positive for a log scale (got {min})");
        }
        if min >= max {
            bail!("axis lower bound must be below the upper bound (got {min}..{max})");
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// The value at the fraction `t` of the way along the scale, where 0 is `min` and 1 is `max`.
    /// Fractions outside 0..=1 are clamped to the bounds rather than extrapolated.
    pub fn value_at(&self, t: f64) -> f64 {
        let scale_offset = self.min.log10();
        let scale_width = self.max.log10() - scale_offset;
        let exponent = t * scale_width + scale_offset;
        self.clamp(10_f64.powf(exponent))
    }

    /// Inverse of `value_at`. Values outside the range give fractions outside 0..=1.
    pub fn fraction_of(&self, value: f64) -> f64 {
        let scale_offset = self.min.log10();
        let scale_width = self.max.log10() - scale_offset;
        (value.log10() - scale_offset) / scale_width
    }
}

/// The two range variants the surface knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePreset {
    /// 100Hz to 10kHz, 1% to 100% volume
    #[default]
    Narrow,
    /// 1Hz to 20kHz, 0.1% to 100% volume
    Wide,
}

impl RangePreset {
    pub fn freq_hz(self) -> AxisRange {
        match self {
            Self::Narrow => AxisRange::FREQ_HZ,
            Self::Wide => AxisRange::WIDE_FREQ_HZ,
        }
    }

    pub fn volume(self) -> AxisRange {
        match self {
            Self::Narrow => AxisRange::VOLUME,
            Self::Wide => AxisRange::WIDE_VOLUME,
        }
    }
}
