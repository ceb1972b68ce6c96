use crate::{
    event::ToneEvents,
    mapping::{SurfaceSize, ToneMapping, ToneParams},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other,
}

impl PointerButton {
    /// Buttons which produce a tone while held.
    pub fn is_tone_button(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary)
    }

    fn bit(self) -> u8 {
        match self {
            Self::Primary => 1 << 0,
            Self::Middle => 1 << 1,
            Self::Secondary => 1 << 2,
            Self::Other => 1 << 3,
        }
    }
}

/// The set of pointer buttons held down at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: Self = Self(0);

    pub fn with(self, button: PointerButton) -> Self {
        Self(self.0 | button.bit())
    }

    pub fn without(self, button: PointerButton) -> Self {
        Self(self.0 & !button.bit())
    }

    pub fn contains(self, button: PointerButton) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn any_tone_button(self) -> bool {
        self.contains(PointerButton::Primary)
            || self.contains(PointerButton::Secondary)
    }
}

impl FromIterator<PointerButton> for ButtonMask {
    fn from_iter<I: IntoIterator<Item = PointerButton>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Pointer events in the device space of the surface, with `y = 0` at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press {
        button: PointerButton,
        x: f64,
        y: f64,
    },
    Release {
        button: PointerButton,
        x: f64,
        y: f64,
    },
    Motion {
        x: f64,
        y: f64,
        buttons: ButtonMask,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    /// At least one tone button is held
    Active { held: ButtonMask },
}

/// Turns pointer gestures on the surface into tone events.
pub struct ToneInput {
    mapping: ToneMapping,
    state: InputState,
    last_params: Option<ToneParams>,
}

impl ToneInput {
    pub fn new(mapping: ToneMapping) -> Self {
        Self {
            mapping,
            state: InputState::Idle,
            last_params: None,
        }
    }

    pub fn mapping(&self) -> &ToneMapping {
        &self.mapping
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, InputState::Active { .. })
    }

    /// The parameters most recently sent while a tone was active.
    pub fn current_params(&self) -> Option<ToneParams> {
        if self.is_active() {
            self.last_params
        } else {
            None
        }
    }

    fn emit_value<E: ToneEvents + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        size: SurfaceSize,
        events: &mut E,
    ) {
        let params = self.mapping.map(x, y, size);
        self.last_params = Some(params);
        events.tone_value(params.freq_hz, params.volume);
    }

    pub fn handle<E: ToneEvents + ?Sized>(
        &mut self,
        event: PointerEvent,
        size: SurfaceSize,
        events: &mut E,
    ) {
        match (self.state, event) {
            (InputState::Idle, PointerEvent::Press { button, x, y })
                if button.is_tone_button() =>
            {
                self.emit_value(x, y, size, events);
                events.start_tone();
                self.state = InputState::Active {
                    held: ButtonMask::NONE.with(button),
                };
            }
            (
                InputState::Active { held },
                PointerEvent::Press { button, x, y },
            ) if button.is_tone_button() => {
                self.emit_value(x, y, size, events);
                self.state = InputState::Active {
                    held: held.with(button),
                };
            }
            (
                InputState::Active { held },
                PointerEvent::Release { button, .. },
            ) if held.contains(button) => {
                let held = held.without(button);
                if held.any_tone_button() {
                    self.state = InputState::Active { held };
                } else {
                    events.end_tone();
                    self.state = InputState::Idle;
                }
            }
            (
                InputState::Active { .. },
                PointerEvent::Motion { x, y, buttons },
            ) if buttons.any_tone_button() => {
                self.emit_value(x, y, size, events);
            }
            _ => (),
        }
    }

    /// Return to idle without raising any events. Use this when the receiver has been stopped by
    /// other means, such as the window closing.
    pub fn reset(&mut self) {
        self.state = InputState::Idle;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::ToneEvent;

    const SIZE: SurfaceSize = SurfaceSize::new(200, 100);

    fn press(button: PointerButton, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Press { button, x, y }
    }

    fn release(button: PointerButton) -> PointerEvent {
        PointerEvent::Release {
            button,
            x: 0.0,
            y: 0.0,
        }
    }

    fn motion(x: f64, y: f64, buttons: &[PointerButton]) -> PointerEvent {
        PointerEvent::Motion {
            x,
            y,
            buttons: buttons.iter().copied().collect(),
        }
    }

    fn run(input: &mut ToneInput, event: PointerEvent) -> Vec<ToneEvent> {
        let mut events = Vec::new();
        input.handle(event, SIZE, &mut events);
        events
    }

    fn value_at(x: f64, y: f64) -> ToneEvent {
        let params = ToneMapping::default().map(x, y, SIZE);
        ToneEvent::Value {
            freq_hz: params.freq_hz,
            volume: params.volume,
        }
    }

    #[test]
    fn press_emits_value_then_start() {
        let mut input = ToneInput::new(ToneMapping::default());
        let events = run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        assert_eq!(events, vec![value_at(50.0, 20.0), ToneEvent::Start]);
        assert!(input.is_active());
    }

    #[test]
    fn secondary_button_also_starts_a_tone() {
        let mut input = ToneInput::new(ToneMapping::default());
        let events =
            run(&mut input, press(PointerButton::Secondary, 10.0, 10.0));
        assert_eq!(events, vec![value_at(10.0, 10.0), ToneEvent::Start]);
    }

    #[test]
    fn middle_button_is_ignored() {
        let mut input = ToneInput::new(ToneMapping::default());
        assert!(run(&mut input, press(PointerButton::Middle, 1.0, 1.0))
            .is_empty());
        assert!(run(&mut input, release(PointerButton::Middle)).is_empty());
        assert_eq!(input.state(), InputState::Idle);
    }

    #[test]
    fn drag_emits_value_only() {
        let mut input = ToneInput::new(ToneMapping::default());
        run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        let events =
            run(&mut input, motion(80.0, 30.0, &[PointerButton::Primary]));
        assert_eq!(events, vec![value_at(80.0, 30.0)]);
    }

    #[test]
    fn release_emits_end() {
        let mut input = ToneInput::new(ToneMapping::default());
        run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        let events = run(&mut input, release(PointerButton::Primary));
        assert_eq!(events, vec![ToneEvent::End]);
        assert_eq!(input.state(), InputState::Idle);
    }

    #[test]
    fn motion_without_buttons_emits_nothing() {
        let mut input = ToneInput::new(ToneMapping::default());
        assert!(run(&mut input, motion(5.0, 5.0, &[])).is_empty());
        run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        assert!(run(&mut input, motion(5.0, 5.0, &[])).is_empty());
        assert!(run(&mut input, motion(5.0, 5.0, &[PointerButton::Middle]))
            .is_empty());
    }

    #[test]
    fn motion_while_idle_emits_nothing_even_with_buttons_held() {
        let mut input = ToneInput::new(ToneMapping::default());
        assert!(run(&mut input, motion(5.0, 5.0, &[PointerButton::Primary]))
            .is_empty());
    }

    #[test]
    fn redundant_release_is_a_no_op() {
        let mut input = ToneInput::new(ToneMapping::default());
        run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        run(&mut input, release(PointerButton::Primary));
        assert!(run(&mut input, release(PointerButton::Primary)).is_empty());
        assert!(run(&mut input, release(PointerButton::Secondary)).is_empty());
    }

    #[test]
    fn two_buttons_in_one_gesture_start_and_end_once() {
        let mut input = ToneInput::new(ToneMapping::default());
        let mut events = Vec::new();
        for event in [
            press(PointerButton::Primary, 10.0, 10.0),
            press(PointerButton::Secondary, 20.0, 10.0),
            release(PointerButton::Primary),
            motion(30.0, 10.0, &[PointerButton::Secondary]),
            release(PointerButton::Secondary),
        ] {
            input.handle(event, SIZE, &mut events);
        }
        assert_eq!(
            events,
            vec![
                value_at(10.0, 10.0),
                ToneEvent::Start,
                value_at(20.0, 10.0),
                value_at(30.0, 10.0),
                ToneEvent::End,
            ]
        );
    }

    #[test]
    fn no_value_after_end() {
        let mut input = ToneInput::new(ToneMapping::default());
        run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        run(&mut input, release(PointerButton::Primary));
        // a stale motion event can still report the button as held
        assert!(run(&mut input, motion(5.0, 5.0, &[PointerButton::Primary]))
            .is_empty());
    }

    #[test]
    fn reset_goes_idle_silently() {
        let mut input = ToneInput::new(ToneMapping::default());
        run(&mut input, press(PointerButton::Primary, 50.0, 20.0));
        assert!(input.current_params().is_some());
        input.reset();
        assert_eq!(input.state(), InputState::Idle);
        assert!(input.current_params().is_none());
        assert!(run(&mut input, release(PointerButton::Primary)).is_empty());
    }

    #[test]
    fn button_mask() {
        let mask = ButtonMask::NONE
            .with(PointerButton::Middle)
            .with(PointerButton::Secondary);
        assert!(mask.contains(PointerButton::Middle));
        assert!(mask.any_tone_button());
        assert!(!mask.without(PointerButton::Secondary).any_tone_button());
    }
}
