use anyhow::anyhow;
use sdl2::{
    EventPump, Sdl,
    event::{Event, WindowEvent},
    render::{Canvas, TextureCreator},
    video::{Window as SdlWindow, WindowContext},
};
use std::{
    path::Path,
    thread,
    time::{Duration, Instant},
};
use tonepad_core::SurfaceSize;
use tonepad_window_utils::font::{Font, load_font_or_system_};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);
const FONT_PT_SIZE: u16 = 12;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Quit,
}

pub struct Window {
    pub canvas: Canvas<SdlWindow>,
    pub event_pump: EventPump,
    pub font: Option<Font<'static, 'static>>,
    pub texture_creator: TextureCreator<WindowContext>,
    pub prev_tick_complete: Instant,
}

impl Window {
    pub fn new(
        sdl_context: &Sdl,
        title: &str,
        width_px: u32,
        height_px: u32,
        font_path: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(title, width_px, height_px)
            .position_centered()
            .resizable()
            .build()?;
        let canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        Ok(Self {
            canvas,
            event_pump,
            font: load_font_or_system_(font_path, FONT_PT_SIZE),
            texture_creator,
            prev_tick_complete: Instant::now(),
        })
    }

    pub fn wait_until_next_frame(&self) {
        if let Some(period_to_sleep) = (self.prev_tick_complete
            + FRAME_DURATION)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
    }

    /// Current size of the drawing surface.
    pub fn size(&self) -> anyhow::Result<SurfaceSize> {
        let (width_px, height_px) =
            self.canvas.output_size().map_err(|e| anyhow!("{e}"))?;
        Ok(SurfaceSize::new(width_px, height_px))
    }

    pub fn handle_event_common(event: &Event) -> Status {
        match event {
            Event::Quit { .. }
            | Event::Window {
                win_event: WindowEvent::Close,
                ..
            } => Status::Quit,
            _ => Status::Continue,
        }
    }
}
