//! Linear RGB color and display conversion.
//!
//! Channels are unbounded while shading accumulates; they are only clamped
//! when converted for display.

use lux_math::{DVec3, Interval};

/// Color type alias (linear RGB, nominally 0-1)
pub type Color = DVec3;

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

/// Convert one linear channel to an 8-bit display value.
///
/// The channel is clamped to [0, 1] first (NaN becomes 0). Exactly 1.0 maps
/// to 255, everything else to `floor(value * 256)`.
#[inline]
pub fn to_display(channel: f64) -> u8 {
    let value = Interval::UNIT.clamp(channel);
    if value == 1.0 {
        return 255;
    }
    (value * 256.0).floor() as u8
}

/// Convert a color to 8-bit RGBA with an opaque alpha.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    [
        to_display(color.x),
        to_display(color.y),
        to_display(color.z),
        255,
    ]
}
