use clap::Parser;
use tonepad_core::{LogToneEvents, ToneEngine, ToneEvents};
use tonepad_player::{Config, Player, TonePipeline};
use tonepad_widgets::{Status, ToneSurface};

mod cli;

use cli::Cli;

fn run<E: ToneEvents>(
    surface: &mut ToneSurface,
    events: &mut E,
    mut on_quit: impl FnMut(&mut E),
) -> anyhow::Result<()> {
    loop {
        if surface.tick(events)? == Status::Quit {
            on_quit(events);
            return Ok(());
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mapping = cli.mapping()?;
    log::info!(
        "frequency range: {}Hz to {}Hz",
        mapping.freq_hz.min(),
        mapping.freq_hz.max()
    );
    log::info!(
        "volume range: {} to {}",
        mapping.volume.min(),
        mapping.volume.max()
    );
    // SDL is initialised once here and lives until the event loop returns.
    let sdl_context = sdl2::init().map_err(|e| anyhow::anyhow!(e))?;
    let mut builder = ToneSurface::builder()
        .title(cli.title.as_str())
        .width_px(cli.width)
        .height_px(cli.height)
        .mapping(mapping)
        .divisions(cli.divisions);
    if let Some(font) = cli.font.as_ref() {
        builder = builder.font_path(font);
    }
    let mut surface = builder.build(&sdl_context)?;
    if cli.no_audio {
        run(&mut surface, &mut LogToneEvents, |events| events.end_tone())
    } else {
        let config = Config {
            target_latency_s: cli.target_latency_s,
        };
        let pipeline = TonePipeline::new(Player::new()?, config);
        let mut engine = ToneEngine::new(pipeline);
        run(&mut surface, &mut engine, ToneEngine::shutdown)
    }
}
