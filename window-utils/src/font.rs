use anyhow::anyhow;
use lazy_static::lazy_static;
pub use sdl2::ttf::Font;
use sdl2::ttf::Sdl2TtfContext;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref TTF_CONTEXT: Result<Sdl2TtfContext, String> =
        sdl2::ttf::init().map_err(|e| e.to_string());
}

/// Places to look for a font when none is specified.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn load_font(
    path: impl AsRef<Path>,
    pt_size: u16,
) -> anyhow::Result<Font<'static, 'static>> {
    let ttf_context = TTF_CONTEXT.as_ref().map_err(|e| anyhow!("{e}"))?;
    ttf_context
        .load_font(path.as_ref(), pt_size)
        .map_err(|e| anyhow!("{}: {e}", path.as_ref().display()))
}

pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONT_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Load the font at `path` if given, otherwise the first system font found. Text is optional
/// decoration so failures are logged rather than returned.
pub fn load_font_or_system_(
    path: Option<&Path>,
    pt_size: u16,
) -> Option<Font<'static, 'static>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match find_system_font() {
            Some(path) => path,
            None => {
                log::warn!("No font found, text will not be drawn");
                return None;
            }
        },
    };
    match load_font(&path, pt_size) {
        Ok(font) => {
            log::info!("font: {}", path.display());
            Some(font)
        }
        Err(e) => {
            log::warn!("Failed to load font, text will not be drawn: {}", e);
            None
        }
    }
}
