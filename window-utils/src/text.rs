use anyhow::anyhow;
use sdl2::{
    pixels::Color,
    rect::Rect,
    render::{Canvas, TextureCreator},
    ttf::Font,
    video::{Window, WindowContext},
};

/// The corner of the text that's placed at the given coordinate.
#[derive(Debug, Clone, Copy)]
pub enum Anchor {
    TopLeft,
    BottomRight,
    Centre,
}

pub fn render_text(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    color: Color,
    (x, y): (i32, i32),
    anchor: Anchor,
) -> anyhow::Result<()> {
    let text_surface = font
        .render(text)
        .blended(color)
        .map_err(|e| anyhow!("{e}"))?;
    let text_texture = text_surface.as_texture(texture_creator)?;
    let query = text_texture.query();
    let (width, height) = (query.width as i32, query.height as i32);
    let (left, top) = match anchor {
        Anchor::TopLeft => (x, y),
        Anchor::BottomRight => (x - width, y - height),
        Anchor::Centre => (x - width / 2, y - height / 2),
    };
    let text_rect = Rect::new(left, top, query.width, query.height);
    canvas
        .copy(&text_texture, None, Some(text_rect))
        .map_err(|e| anyhow!("{e}"))?;
    Ok(())
}
