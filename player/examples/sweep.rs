use std::{thread, time::Duration};
use tonepad_core::{AxisRange, ToneEngine, ToneEvents};
use tonepad_player::{Player, TonePipeline};

// Sweep through the default frequency range for two seconds.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let pipeline = TonePipeline::new(Player::new()?, Default::default());
    let mut engine = ToneEngine::new(pipeline);
    let freq_range = AxisRange::FREQ_HZ;
    engine.tone_value(freq_range.min(), 0.2);
    engine.start_tone();
    let steps = 200;
    for i in 0..=steps {
        engine.tone_value(freq_range.value_at(i as f64 / steps as f64), 0.2);
        thread::sleep(Duration::from_millis(10));
    }
    engine.end_tone();
    Ok(())
}
