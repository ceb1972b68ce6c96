use sdl2::{
    event::Event,
    mouse::{MouseButton, MouseState},
};
use tonepad_core::{ButtonMask, PointerButton, PointerEvent};

pub fn pointer_button(mouse_button: MouseButton) -> PointerButton {
    match mouse_button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

pub fn button_mask(mouse_state: &MouseState) -> ButtonMask {
    mouse_state
        .pressed_mouse_buttons()
        .map(pointer_button)
        .collect()
}

/// SDL reports the button state along with every motion event so there's no need to query the
/// pointer again.
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    match *event {
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => Some(PointerEvent::Press {
            button: pointer_button(mouse_btn),
            x: x as f64,
            y: y as f64,
        }),
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => Some(PointerEvent::Release {
            button: pointer_button(mouse_btn),
            x: x as f64,
            y: y as f64,
        }),
        Event::MouseMotion {
            mousestate, x, y, ..
        } => Some(PointerEvent::Motion {
            x: x as f64,
            y: y as f64,
            buttons: button_mask(&mousestate),
        }),
        _ => None,
    }
}
