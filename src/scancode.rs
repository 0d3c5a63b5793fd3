//! Scan-code layout for the virtual pad.
//!
//! Every control on the pad has a fixed bit position and a fixed scan code.
//! The mapping lives in one compile-time table; resolving a code that maps
//! to nothing is the "ignore" path, not an error.

use crate::events::AXIS_MAX;

/// D-pad directions. The discriminant is the bit position inside the
/// direction mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Fixed evaluation order for the poll pass.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Bit within the direction mask.
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Axis this direction deflects: 0 is left/right, 1 is up/down.
    pub const fn axis(self) -> u8 {
        match self {
            Direction::Up | Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Axis value while the direction is held. Up and left deflect
    /// negative, down and right positive.
    pub const fn deflection(self) -> i16 {
        match self {
            Direction::Up | Direction::Left => -AXIS_MAX,
            Direction::Down | Direction::Right => AXIS_MAX,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Pad buttons. The discriminant is both the bit position inside the
/// button mask and the button index reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    Select = 4,
    Start = 5,
    TriggerLeft = 6,
    TriggerRight = 7,
}

impl Button {
    /// Fixed evaluation order for the poll pass.
    pub const ALL: [Button; 8] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::Select,
        Button::Start,
        Button::TriggerLeft,
        Button::TriggerRight,
    ];

    /// Button index reported to the host.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bit within the button mask.
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Human-readable name for diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Button::A => "button-a",
            Button::B => "button-b",
            Button::X => "button-x",
            Button::Y => "button-y",
            Button::Select => "select",
            Button::Start => "start",
            Button::TriggerLeft => "left-trigger",
            Button::TriggerRight => "right-trigger",
        }
    }
}

/// A single pad control resolved from a scan code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadInput {
    Direction(Direction),
    Button(Button),
}

/// Lowest scan code the pad recognizes.
pub const SCANCODE_MIN: u8 = 65;
/// Highest scan code the pad recognizes.
pub const SCANCODE_MAX: u8 = 80;

pub const SCANCODE_A: u8 = 65;
pub const SCANCODE_B: u8 = 66;
pub const SCANCODE_X: u8 = 67;
pub const SCANCODE_Y: u8 = 68;
pub const SCANCODE_SELECT: u8 = 69;
pub const SCANCODE_START: u8 = 70;
pub const SCANCODE_TRIGGER_LEFT: u8 = 71;
pub const SCANCODE_UP: u8 = 72;
pub const SCANCODE_TRIGGER_RIGHT: u8 = 73;
pub const SCANCODE_DOWN: u8 = 75;
pub const SCANCODE_RIGHT: u8 = 77;
pub const SCANCODE_LEFT: u8 = 80;

/// Scan-code table, indexed by `code - SCANCODE_MIN`.
///
/// Codes 74, 76, 78 and 79 fall inside the recognized range but drive
/// nothing on this pad.
static TABLE: [Option<PadInput>; 16] = [
    Some(PadInput::Button(Button::A)),            // 65
    Some(PadInput::Button(Button::B)),            // 66
    Some(PadInput::Button(Button::X)),            // 67
    Some(PadInput::Button(Button::Y)),            // 68
    Some(PadInput::Button(Button::Select)),       // 69
    Some(PadInput::Button(Button::Start)),        // 70
    Some(PadInput::Button(Button::TriggerLeft)),  // 71
    Some(PadInput::Direction(Direction::Up)),     // 72
    Some(PadInput::Button(Button::TriggerRight)), // 73
    None,                                         // 74
    Some(PadInput::Direction(Direction::Down)),   // 75
    None,                                         // 76
    Some(PadInput::Direction(Direction::Right)),  // 77
    None,                                         // 78
    None,                                         // 79
    Some(PadInput::Direction(Direction::Left)),   // 80
];

/// Resolve a scan code to the control it drives, or `None` if the code
/// should be ignored.
pub fn lookup(scancode: u8) -> Option<PadInput> {
    if scancode < SCANCODE_MIN || scancode > SCANCODE_MAX {
        return None;
    }
    TABLE[(scancode - SCANCODE_MIN) as usize]
}
