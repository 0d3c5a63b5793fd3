//! The virtual joystick device.
//!
//! Key events fold into two bit masks (directions and buttons). A separate
//! poll pass diffs the masks against the state it last reported and emits
//! one event per changed bit. Holding a key therefore produces exactly one
//! press transition regardless of how many key-down repeats arrive, and one
//! release transition when it lets go.
//!
//! All state is owned by [`VirtualJoystick`]; both the key path and the
//! poll path take `&mut self`, so a single writer is enforced by the
//! borrow checker rather than by convention.

use log::debug;
use thiserror::Error;

use crate::events::EventSink;
use crate::scancode::{self, Button, Direction, PadInput};

/// Number of synthetic devices the registry reports. A second pad could
/// pack into the upper mask bits one day; nothing reads them today.
pub const NUM_JOYSTICKS: u32 = 1;
/// Buttons on the pad.
pub const NUM_BUTTONS: u8 = 8;
/// Axes on the pad: 0 is left/right, 1 is up/down.
pub const NUM_AXES: u8 = 2;
/// Name reported for device index 0.
pub const DEVICE_NAME: &str = "joy0";

/// Error type for the device lifecycle surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoystickError {
    /// Only device 0 exists.
    #[error("only joystick 0 is supported at present (requested {0})")]
    UnsupportedIndex(u32),
}

/// Counts reported to the host when the device is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub buttons: u8,
    pub axes: u8,
    pub hats: u8,
    pub balls: u8,
}

/// Number of devices the host registry should enumerate.
pub fn device_count() -> u32 {
    NUM_JOYSTICKS
}

/// Device name by registry index.
pub fn device_name(index: u32) -> Result<&'static str, JoystickError> {
    match index {
        0 => Ok(DEVICE_NAME),
        other => Err(JoystickError::UnsupportedIndex(other)),
    }
}

/// An 8-button, 4-way virtual pad driven by keyboard scan codes.
#[derive(Debug, Default)]
pub struct VirtualJoystick {
    /// Direction bits currently held, one per [`Direction`].
    directions: u8,
    /// Button bits currently held, one per [`Button`].
    buttons: u8,
    /// Direction bits as reported by the last poll pass.
    last_directions: u8,
    /// Button bits as reported by the last poll pass.
    last_buttons: u8,
    /// Set by [`open`](Self::open); until then key events are dropped.
    opened: bool,
    /// Registry index the device was opened as.
    index: u32,
}

impl VirtualJoystick {
    /// Create a closed device with all state clear.
    pub fn new() -> Self {
        Self::default()
    }

    // === Lifecycle ===

    /// Open the device at a registry index and report its capabilities.
    ///
    /// Only index 0 is valid. Opening clears the held and last-reported
    /// masks and enables the key-event path.
    pub fn open(&mut self, index: u32) -> Result<Capabilities, JoystickError> {
        if index != 0 {
            return Err(JoystickError::UnsupportedIndex(index));
        }

        self.directions = 0;
        self.buttons = 0;
        self.last_directions = 0;
        self.last_buttons = 0;
        self.opened = true;
        self.index = index;

        debug!("joystick {} opened", index);

        Ok(Capabilities {
            buttons: NUM_BUTTONS,
            axes: NUM_AXES,
            hats: 0,
            balls: 0,
        })
    }

    /// Close the device. Masks and the open flag are left untouched; the
    /// only thing that resets state is the next [`open`](Self::open).
    pub fn close(&mut self) {
        debug!("joystick {} closed", self.index);
    }

    /// Subsystem teardown hook. Nothing to release.
    pub fn quit(&mut self) {}

    /// Has the device been opened?
    pub fn is_open(&self) -> bool {
        self.opened
    }

    // === Key translation ===

    /// Fold one key transition into the masks.
    ///
    /// Dropped silently when the device has not been opened or when the
    /// scan code drives nothing on this pad. No events are emitted here;
    /// the poll pass reports the resulting transitions.
    pub fn handle_key(&mut self, scancode: u8, pressed: bool) {
        if !self.opened {
            return;
        }

        let input = match scancode::lookup(scancode) {
            Some(input) => input,
            None => return,
        };

        match input {
            PadInput::Direction(dir) => {
                if pressed {
                    self.directions |= dir.bit();
                } else {
                    self.directions &= !dir.bit();
                }
            }
            PadInput::Button(btn) => {
                if pressed {
                    self.buttons |= btn.bit();
                } else {
                    self.buttons &= !btn.bit();
                }
            }
        }
    }

    /// Overwrite both masks wholesale.
    ///
    /// Hook for generic input processing that already knows the pad state
    /// and wants to bypass the scan-code table. Performs no open-state
    /// check, matching the key-independent injection path it descends
    /// from. Bits above the pad's range are reserved for a future second
    /// pad and stay unread.
    pub fn set_masks(&mut self, directions: u8, buttons: u8) {
        self.directions = directions;
        self.buttons = buttons;
    }

    /// Direction bits currently held.
    pub fn directions(&self) -> u8 {
        self.directions
    }

    /// Button bits currently held.
    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    // === Polling ===

    /// Report every state transition since the previous poll.
    ///
    /// Directions are evaluated first in up, down, left, right order, then
    /// buttons 0..7 ascending. A bit that rose since the last pass emits a
    /// full-deflection axis value or a button press; a bit that fell emits
    /// an axis recenter or a button release. Each edge is consumed exactly
    /// once: a second poll with no intervening key change emits nothing.
    ///
    /// Opposite directions held together are reported independently; the
    /// key table cannot produce that on its own, but
    /// [`set_masks`](Self::set_masks) can.
    pub fn poll<S: EventSink>(&mut self, sink: &mut S) {
        for dir in Direction::ALL {
            let bit = dir.bit();
            let held = self.directions & bit != 0;
            let reported = self.last_directions & bit != 0;

            if held && !reported {
                sink.emit_axis(self.index, dir.axis(), dir.deflection());
                self.last_directions |= bit;
            } else if !held && reported {
                sink.emit_axis(self.index, dir.axis(), 0);
                self.last_directions &= !bit;
            }
        }

        for btn in Button::ALL {
            let bit = btn.bit();
            let held = self.buttons & bit != 0;
            let reported = self.last_buttons & bit != 0;

            if held && !reported {
                sink.emit_button(self.index, btn.index(), true);
                self.last_buttons |= bit;
            } else if !held && reported {
                sink.emit_button(self.index, btn.index(), false);
                self.last_buttons &= !bit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{JoystickEvent, AXIS_MAX};
    use crate::scancode::{SCANCODE_A, SCANCODE_DOWN, SCANCODE_UP};

    fn open_pad() -> VirtualJoystick {
        let mut pad = VirtualJoystick::new();
        pad.open(0).unwrap();
        pad
    }

    #[test]
    fn test_device_count() {
        assert_eq!(device_count(), 1);
    }

    #[test]
    fn test_device_name() {
        assert_eq!(device_name(0), Ok("joy0"));

        let err = device_name(1).unwrap_err();
        assert_eq!(err, JoystickError::UnsupportedIndex(1));
        assert_eq!(
            format!("{}", err),
            "only joystick 0 is supported at present (requested 1)"
        );
    }

    #[test]
    fn test_open_reports_capabilities() {
        let mut pad = VirtualJoystick::new();
        let caps = pad.open(0).unwrap();

        assert_eq!(caps.buttons, 8);
        assert_eq!(caps.axes, 2);
        assert_eq!(caps.hats, 0);
        assert_eq!(caps.balls, 0);
        assert!(pad.is_open());
    }

    #[test]
    fn test_open_rejects_other_indices() {
        let mut pad = VirtualJoystick::new();
        assert_eq!(pad.open(1), Err(JoystickError::UnsupportedIndex(1)));
        assert!(!pad.is_open());
    }

    #[test]
    fn test_keys_dropped_before_open() {
        let mut pad = VirtualJoystick::new();
        pad.handle_key(SCANCODE_UP, true);
        assert_eq!(pad.directions(), 0);
    }

    #[test]
    fn test_press_sets_and_release_clears() {
        let mut pad = open_pad();

        pad.handle_key(SCANCODE_UP, true);
        assert_eq!(pad.directions(), Direction::Up.bit());

        pad.handle_key(SCANCODE_UP, false);
        assert_eq!(pad.directions(), 0);

        pad.handle_key(SCANCODE_A, true);
        assert_eq!(pad.buttons(), Button::A.bit());

        pad.handle_key(SCANCODE_A, false);
        assert_eq!(pad.buttons(), 0);
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut pad = open_pad();

        pad.handle_key(SCANCODE_DOWN, true);
        pad.handle_key(SCANCODE_DOWN, true);
        assert_eq!(pad.directions(), Direction::Down.bit());

        let mut events: Vec<JoystickEvent> = Vec::new();
        pad.poll(&mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_poll_emits_rising_edge_once() {
        let mut pad = open_pad();
        pad.handle_key(SCANCODE_UP, true);

        let mut events: Vec<JoystickEvent> = Vec::new();
        pad.poll(&mut events);
        assert_eq!(
            events,
            vec![JoystickEvent::Axis {
                device: 0,
                axis: 1,
                value: -AXIS_MAX
            }]
        );

        events.clear();
        pad.poll(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_poll_emits_falling_edge_once() {
        let mut pad = open_pad();
        pad.handle_key(SCANCODE_UP, true);

        let mut events: Vec<JoystickEvent> = Vec::new();
        pad.poll(&mut events);
        events.clear();

        pad.handle_key(SCANCODE_UP, false);
        pad.poll(&mut events);
        assert_eq!(
            events,
            vec![JoystickEvent::Axis {
                device: 0,
                axis: 1,
                value: 0
            }]
        );
    }

    #[test]
    fn test_press_and_release_between_polls_is_invisible() {
        // Both edges land in the same tick, so the diff sees no change.
        let mut pad = open_pad();
        pad.handle_key(SCANCODE_A, true);
        pad.handle_key(SCANCODE_A, false);

        let mut events: Vec<JoystickEvent> = Vec::new();
        pad.poll(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_set_masks_bypasses_open_guard() {
        let mut pad = VirtualJoystick::new();
        pad.set_masks(Direction::Up.bit(), Button::Start.bit());

        assert_eq!(pad.directions(), Direction::Up.bit());
        assert_eq!(pad.buttons(), Button::Start.bit());
    }

    #[test]
    fn test_set_masks_with_opposite_directions() {
        let mut pad = open_pad();
        pad.set_masks(Direction::Left.bit() | Direction::Right.bit(), 0);

        let mut events: Vec<JoystickEvent> = Vec::new();
        pad.poll(&mut events);
        assert_eq!(
            events,
            vec![
                JoystickEvent::Axis {
                    device: 0,
                    axis: 0,
                    value: -AXIS_MAX
                },
                JoystickEvent::Axis {
                    device: 0,
                    axis: 0,
                    value: AXIS_MAX
                },
            ]
        );
    }

    #[test]
    fn test_close_keeps_state() {
        let mut pad = open_pad();
        pad.handle_key(SCANCODE_A, true);
        pad.close();

        assert_eq!(pad.buttons(), Button::A.bit());
        assert!(pad.is_open());

        // The key path still works after close.
        pad.handle_key(SCANCODE_A, false);
        assert_eq!(pad.buttons(), 0);

        pad.quit();
        assert!(pad.is_open());
    }

    #[test]
    fn test_reopen_clears_state() {
        let mut pad = open_pad();
        pad.handle_key(SCANCODE_A, true);
        pad.handle_key(SCANCODE_UP, true);

        pad.open(0).unwrap();
        assert_eq!(pad.directions(), 0);
        assert_eq!(pad.buttons(), 0);

        let mut events: Vec<JoystickEvent> = Vec::new();
        pad.poll(&mut events);
        assert!(events.is_empty());
    }
}
