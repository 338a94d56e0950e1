//! Translates winit pointer events into tile map clicks.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use tilemap_canvas::PointerClick;

/// A completed primary-button click at the last known cursor position.
///
/// Like a browser `click`, it fires when the button is released. Without a
/// known cursor position (the cursor never entered the window) there is
/// nothing to report.
pub(crate) fn translate_mouse_button(
    btn_state: ElementState,
    button: MouseButton,
    cursor: Option<PhysicalPosition<f64>>,
) -> Option<PointerClick> {
    if button != MouseButton::Left || btn_state != ElementState::Released {
        return None;
    }
    let pos = cursor?;
    Some(PointerClick::new(pos.x, pos.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_release_is_a_click() {
        let click = translate_mouse_button(
            ElementState::Released,
            MouseButton::Left,
            Some(PhysicalPosition::new(165.0, 210.0)),
        );
        assert_eq!(click, Some(PointerClick::new(165.0, 210.0)));
    }

    #[test]
    fn other_buttons_and_presses_are_ignored() {
        let pos = Some(PhysicalPosition::new(1.0, 1.0));
        assert_eq!(
            translate_mouse_button(ElementState::Pressed, MouseButton::Left, pos),
            None
        );
        assert_eq!(
            translate_mouse_button(ElementState::Released, MouseButton::Right, pos),
            None
        );
        assert_eq!(
            translate_mouse_button(ElementState::Released, MouseButton::Left, None),
            None
        );
    }
}
