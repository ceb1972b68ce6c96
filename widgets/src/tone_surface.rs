use crate::{
    pointer::pointer_event,
    window::{Status, Window},
};
use anyhow::anyhow;
pub use rgb_int::Rgb24;
use sdl2::{
    Sdl,
    pixels::Color,
    rect::{Point, Rect},
};
use std::{path::PathBuf, time::Instant};
use tonepad_core::{
    DEFAULT_DIVISIONS, Grid, SurfaceSize, ToneEvents, ToneInput, ToneMapping,
};
use tonepad_window_utils::text::{Anchor, render_text};

fn color(rgb24: Rgb24) -> Color {
    Color::RGB(rgb24.r, rgb24.g, rgb24.b)
}

pub struct ToneSurfaceBuilder {
    title: Option<String>,
    width_px: Option<u32>,
    height_px: Option<u32>,
    mapping: Option<ToneMapping>,
    divisions: Option<u32>,
    font_path: Option<PathBuf>,
    foreground: Option<Rgb24>,
    background: Option<Rgb24>,
    highlight: Option<Rgb24>,
}

impl Default for ToneSurfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneSurfaceBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            width_px: None,
            height_px: None,
            mapping: None,
            divisions: None,
            font_path: None,
            foreground: None,
            background: None,
            highlight: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width_px(mut self, width_px: u32) -> Self {
        self.width_px = Some(width_px);
        self
    }

    pub fn height_px(mut self, height_px: u32) -> Self {
        self.height_px = Some(height_px);
        self
    }

    pub fn mapping(mut self, mapping: ToneMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn divisions(mut self, divisions: u32) -> Self {
        self.divisions = Some(divisions);
        self
    }

    pub fn font_path(mut self, font_path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(font_path.into());
        self
    }

    pub fn foreground(mut self, foreground: Rgb24) -> Self {
        self.foreground = Some(foreground);
        self
    }

    pub fn background(mut self, background: Rgb24) -> Self {
        self.background = Some(background);
        self
    }

    pub fn highlight(mut self, highlight: Rgb24) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Open the window. The SDL context must outlive the surface.
    pub fn build(self, sdl_context: &Sdl) -> anyhow::Result<ToneSurface> {
        let title =
            self.title.unwrap_or_else(|| "Tone Generator".to_string());
        let window = Window::new(
            sdl_context,
            title.as_str(),
            self.width_px.unwrap_or(640),
            self.height_px.unwrap_or(480),
            self.font_path.as_deref(),
        )?;
        let mapping = self.mapping.unwrap_or_default();
        let divisions = self.divisions.unwrap_or(DEFAULT_DIVISIONS);
        let size = window.size()?;
        Ok(ToneSurface {
            window,
            input: ToneInput::new(mapping),
            divisions,
            grid: Grid::new(&mapping, size, divisions),
            grid_size: size,
            foreground: color(
                self.foreground.unwrap_or_else(|| Rgb24::new_grey(0)),
            ),
            background: color(
                self.background.unwrap_or_else(|| Rgb24::new_grey(255)),
            ),
            highlight: color(
                self.highlight.unwrap_or_else(|| Rgb24::new(255, 0, 0)),
            ),
        })
    }
}

/// A window whose drawing surface turns pointer gestures into tone events, drawn over a grid
/// labelled with the frequencies and volumes under the pointer.
pub struct ToneSurface {
    window: Window,
    input: ToneInput,
    divisions: u32,
    grid: Grid,
    grid_size: SurfaceSize,
    foreground: Color,
    background: Color,
    highlight: Color,
}

impl ToneSurface {
    pub fn builder() -> ToneSurfaceBuilder {
        ToneSurfaceBuilder::new()
    }

    pub fn input(&self) -> &ToneInput {
        &self.input
    }

    fn handle_events<E: ToneEvents + ?Sized>(
        &mut self,
        events: &mut E,
    ) -> anyhow::Result<Status> {
        let sdl_events =
            self.window.event_pump.poll_iter().collect::<Vec<_>>();
        for event in sdl_events {
            if Window::handle_event_common(&event) == Status::Quit {
                // The receiver is stopped by whoever runs the event loop.
                self.input.reset();
                return Ok(Status::Quit);
            }
            if let Some(pointer_event) = pointer_event(&event) {
                let size = self.window.size()?;
                self.input.handle(pointer_event, size, events);
            }
        }
        Ok(Status::Continue)
    }

    fn update_grid(&mut self, size: SurfaceSize) {
        if size != self.grid_size {
            log::debug!(
                "surface resized to {}x{}",
                size.width_px(),
                size.height_px()
            );
            self.grid = Grid::new(self.input.mapping(), size, self.divisions);
            self.grid_size = size;
        }
    }

    fn render_grid(&mut self, size: SurfaceSize) -> anyhow::Result<()> {
        let width = size.width_px() as i32;
        let height = size.height_px() as i32;
        let canvas = &mut self.window.canvas;
        canvas.set_draw_color(self.foreground);
        canvas
            .draw_rect(Rect::new(0, 0, size.width_px(), size.height_px()))
            .map_err(|e| anyhow!("{e}"))?;
        // dotted lines
        let mut points = Vec::new();
        for line in &self.grid.volume_lines {
            points.extend(
                (0..width).step_by(2).map(|x| Point::new(x, line.y_px)),
            );
        }
        for line in &self.grid.freq_lines {
            points.extend(
                (0..height).step_by(2).map(|y| Point::new(line.x_px, y)),
            );
        }
        canvas
            .draw_points(points.as_slice())
            .map_err(|e| anyhow!("{e}"))?;
        if let Some(font) = self.window.font.as_ref() {
            for line in &self.grid.volume_lines {
                render_text(
                    canvas,
                    &self.window.texture_creator,
                    font,
                    line.label().as_str(),
                    self.foreground,
                    (2, line.y_px + 2),
                    Anchor::TopLeft,
                )?;
            }
            for line in &self.grid.freq_lines {
                render_text(
                    canvas,
                    &self.window.texture_creator,
                    font,
                    line.label().as_str(),
                    self.foreground,
                    (line.x_px - 2, height - 2),
                    Anchor::BottomRight,
                )?;
            }
        }
        Ok(())
    }

    fn render_current_tone(
        &mut self,
        size: SurfaceSize,
    ) -> anyhow::Result<()> {
        let Some(params) = self.input.current_params() else {
            return Ok(());
        };
        let (x, y) = self.input.mapping().position_of(params, size);
        let (x, y) = (x as i32, y as i32);
        let canvas = &mut self.window.canvas;
        canvas.set_draw_color(self.highlight);
        let line_width = 2;
        let rect_horizontal = Rect::new(
            0,
            y - line_width as i32 / 2,
            size.width_px(),
            line_width,
        );
        let rect_vertical = Rect::new(
            x - line_width as i32 / 2,
            0,
            line_width,
            size.height_px(),
        );
        canvas
            .fill_rect(rect_horizontal)
            .map_err(|e| anyhow!("{e}"))?;
        canvas.fill_rect(rect_vertical).map_err(|e| anyhow!("{e}"))?;
        if let Some(font) = self.window.font.as_ref() {
            let text = format!(
                "{} Hz  {}%",
                params.freq_hz.round(),
                (params.volume * 100.0).round()
            );
            render_text(
                canvas,
                &self.window.texture_creator,
                font,
                text.as_str(),
                self.highlight,
                (size.width_px() as i32 / 2, size.height_px() as i32 / 2),
                Anchor::Centre,
            )?;
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let size = self.window.size()?;
        self.update_grid(size);
        self.window.canvas.set_draw_color(self.background);
        self.window.canvas.clear();
        self.render_grid(size)?;
        self.render_current_tone(size)?;
        self.window.canvas.present();
        Ok(())
    }

    /// Waits until the next frame, then handles pointer events, sending the resulting tone events
    /// to `events`, and redraws the surface. Returns `Status::Quit` once the window is closed,
    /// leaving it to the caller to stop whatever `events` was driving.
    pub fn tick<E: ToneEvents + ?Sized>(
        &mut self,
        events: &mut E,
    ) -> anyhow::Result<Status> {
        self.window.wait_until_next_frame();
        let status = self.handle_events(events)?;
        if status == Status::Continue {
            self.render()?;
        }
        self.window.prev_tick_complete = Instant::now();
        Ok(status)
    }
}
