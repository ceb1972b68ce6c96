/// Receiver of the events raised by the input surface.
///
/// The surface calls `tone_value` before `start_tone` when a tone begins, so an implementation
/// can start playing at the right parameters straight away.
pub trait ToneEvents {
    fn start_tone(&mut self);
    fn tone_value(&mut self, freq_hz: f64, volume: f64);
    fn end_tone(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneEvent {
    Start,
    Value { freq_hz: f64, volume: f64 },
    End,
}

/// Records events in the order they were raised.
impl ToneEvents for Vec<ToneEvent> {
    fn start_tone(&mut self) {
        self.push(ToneEvent::Start);
    }

    fn tone_value(&mut self, freq_hz: f64, volume: f64) {
        self.push(ToneEvent::Value { freq_hz, volume });
    }

    fn end_tone(&mut self) {
        self.push(ToneEvent::End);
    }
}

/// Logs each event instead of acting on it.
pub struct LogToneEvents;

impl ToneEvents for LogToneEvents {
    fn start_tone(&mut self) {
        log::info!("start tone");
    }

    fn tone_value(&mut self, freq_hz: f64, volume: f64) {
        log::info!("tone value: {:.1}Hz, volume {:.3}", freq_hz, volume);
    }

    fn end_tone(&mut self) {
        log::info!("end tone");
    }
}
