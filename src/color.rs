//! Display color carried by bodies, springs and pendulums.
//!
//! The physics never reads it; it is stored so the host renderer can draw
//! each object with the parameters the user picked.

/// Opaque RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// From a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Packed `0xRRGGBBAA`, handy for passing across the wasm boundary.
    pub const fn to_rgba_u32(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Color::from_hex(0x3366cc);
        assert_eq!(c, Color::rgb(0x33, 0x66, 0xcc));
        assert_eq!(c.to_rgba_u32(), 0x3366ccff);
    }
}
