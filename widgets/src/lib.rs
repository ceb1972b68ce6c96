//! The interactive part of the tone generator. This library doesn't know about audio devices. It
//! opens a window, draws the reference grid and raises tone events in response to the pointer.
//! The `tonepad` executable connects those events to a playback engine.

mod pointer;
mod tone_surface;
mod window;

pub use pointer::{button_mask, pointer_button, pointer_event};
pub use tone_surface::*;
pub use window::Status;
