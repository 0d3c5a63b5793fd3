//! Virtual joystick emulation driven by keyboard scan codes.
//!
//! One synthetic device ("joy0") shaped like an 8-button, 4-way pad.
//! Key events arrive as scan codes and fold into per-control bit masks;
//! a host-driven poll pass diffs those masks against the state it last
//! reported and emits exactly one event per transition through an
//! [`EventSink`].
//!
//! # Architecture
//!
//! - [`scancode`] holds the fixed scan-code-to-control table.
//! - [`device`] owns the pad state: the key translator, the edge-triggered
//!   poller, and the open/close lifecycle surface.
//! - [`events`] defines the event values and the delivery seam.
//! - [`diag`] dumps pad state through the `log` facade.
//!
//! # Thread safety
//!
//! Single-threaded by construction: every mutating path takes
//! `&mut VirtualJoystick`, so the key-dispatch and device-poll paths must
//! share one owner (or an external lock on a concurrent host).

pub mod device;
pub mod diag;
pub mod events;
pub mod scancode;

pub use device::{
    device_count, device_name, Capabilities, JoystickError, VirtualJoystick, DEVICE_NAME,
    NUM_AXES, NUM_BUTTONS, NUM_JOYSTICKS,
};
pub use events::{EventSink, JoystickEvent, AXIS_MAX};
pub use scancode::{Button, Direction, PadInput};
