//! Cell styling
//!
//! The attribute bitmask the engine attaches to each cell, and the
//! resolved 24-bit color its palette lookups produce.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-cell attribute bits reported by the terminal engine.
    ///
    /// Only `UNDERLINE` and `REVERSE` change how this crate renders a run;
    /// the remaining bits pass through to the draw surface untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u32 {
        const UNDERLINE = 1 << 0;
        const REVERSE   = 1 << 1;
        const BOLD      = 1 << 2;
        const BLINK     = 1 << 3;
    }
}

/// A resolved 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack the engine's `0x00RRGGBB` form.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_packing_round_trip() {
        let color = Rgb::from_packed(0x00AB_CDEF);
        assert_eq!(color, Rgb::new(0xAB, 0xCD, 0xEF));
        assert_eq!(color.to_packed(), 0x00AB_CDEF);
    }

    #[test]
    fn test_attr_flags_combine() {
        let flags = AttrFlags::UNDERLINE | AttrFlags::REVERSE;
        assert!(flags.contains(AttrFlags::REVERSE));
        assert!(!flags.contains(AttrFlags::BOLD));
        assert_eq!(AttrFlags::default(), AttrFlags::empty());
    }
}
