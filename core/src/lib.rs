//! Everything about the tone generator that doesn't touch a window or an audio device: the
//! logarithmic mapping from surface positions to tone parameters, the labelled reference grid,
//! the state machine turning pointer gestures into tone events, and the adapter which applies
//! those events to a playback engine.

mod axis;
mod engine;
mod event;
mod grid;
mod input;
mod mapping;

pub use axis::{AxisRange, RangePreset};
pub use engine::{
    PlaybackEngine, PlaybackState, SourceProperty, ToneEngine, MAX_FREQ_HZ,
    MAX_VOLUME,
};
pub use event::{LogToneEvents, ToneEvent, ToneEvents};
pub use grid::{FreqLine, Grid, VolumeLine, DEFAULT_DIVISIONS};
pub use input::{
    ButtonMask, InputState, PointerButton, PointerEvent, ToneInput,
};
pub use mapping::{map, SurfaceSize, ToneMapping, ToneParams};
