//! Pad state diagnostics.
//!
//! Routed through the `log` facade so the core stays silent unless a
//! logger is installed.

use log::debug;

use crate::device::VirtualJoystick;
use crate::scancode::{Button, Direction};

/// Render a mask word as its hex value followed by a low-to-high bit
/// pattern. Zero renders as the hex value alone.
pub fn mask_bits(word: u32) -> String {
    let mut out = format!("{:#x}\t", word);
    if word == 0 {
        return out;
    }
    for i in 0..32 {
        out.push(if word & (1 << i) != 0 { '1' } else { '0' });
    }
    out
}

/// Log every direction and button currently held on the pad.
pub fn log_held(pad: &VirtualJoystick) {
    for dir in Direction::ALL {
        if pad.directions() & dir.bit() != 0 {
            debug!("  [{:02}] {}", dir as u8, dir.label());
        }
    }
    for btn in Button::ALL {
        if pad.buttons() & btn.bit() != 0 {
            debug!("  [{:02}] {}", btn.index(), btn.label());
        }
    }
}

/// Log both masks as bit patterns.
pub fn log_masks(pad: &VirtualJoystick) {
    debug!("directions {}", mask_bits(pad.directions() as u32));
    debug!("buttons    {}", mask_bits(pad.buttons() as u32));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_bits_zero() {
        assert_eq!(mask_bits(0), "0x0\t");
    }

    #[test]
    fn test_mask_bits_pattern() {
        // Bit 0 and bit 3 set, low-to-high order.
        let rendered = mask_bits(0b1001);
        assert_eq!(
            rendered,
            "0x9\t10010000000000000000000000000000"
        );
    }
}
