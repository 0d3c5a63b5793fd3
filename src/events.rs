//! Joystick events and the delivery seam.
//!
//! The poll pass reports state transitions through [`EventSink`], which the
//! host's event queue implements. Axis values are digital: a held direction
//! pins its axis to full deflection, a released one recenters it to 0.

/// Full positive deflection of an emulated axis.
pub const AXIS_MAX: i16 = i16::MAX;

/// A single joystick state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoystickEvent {
    /// An axis reached full deflection or returned to center.
    Axis { device: u32, axis: u8, value: i16 },
    /// A button changed between pressed and released.
    Button {
        device: u32,
        button: u8,
        pressed: bool,
    },
}

/// Receiver for joystick state changes.
///
/// The poll pass calls this once per transition, in a fixed order:
/// directions before buttons, each in ascending bit order.
pub trait EventSink {
    fn emit_axis(&mut self, device: u32, axis: u8, value: i16);
    fn emit_button(&mut self, device: u32, button: u8, pressed: bool);
}

/// Recording sink. Hosts that drain a queue after each poll, and tests,
/// can use a plain `Vec`.
impl EventSink for Vec<JoystickEvent> {
    fn emit_axis(&mut self, device: u32, axis: u8, value: i16) {
        self.push(JoystickEvent::Axis {
            device,
            axis,
            value,
        });
    }

    fn emit_button(&mut self, device: u32, button: u8, pressed: bool) {
        self.push(JoystickEvent::Button {
            device,
            button,
            pressed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<JoystickEvent> = Vec::new();
        sink.emit_axis(0, 1, -AXIS_MAX);
        sink.emit_button(0, 3, true);
        sink.emit_button(0, 3, false);

        assert_eq!(
            sink,
            vec![
                JoystickEvent::Axis {
                    device: 0,
                    axis: 1,
                    value: -AXIS_MAX
                },
                JoystickEvent::Button {
                    device: 0,
                    button: 3,
                    pressed: true
                },
                JoystickEvent::Button {
                    device: 0,
                    button: 3,
                    pressed: false
                },
            ]
        );
    }
}
