//! Visual and tile-space types

use crate::error::{MosaicError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Packed `0x00RRGGBB`, the layout of a `TileCanvas` pixel
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MosaicError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_hex)
            .map_err(|_| MosaicError::InvalidColor(s.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A square box in tile-space: `[x, x + size) × [y, y + size)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRect {
    pub x: f64,
    pub y: f64,
    pub size: u32,
}

impl TileRect {
    pub const fn new(x: f64, y: f64, size: u32) -> Self {
        Self { x, y, size }
    }

    /// Half-open containment test; the far edges are excluded
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let size = self.size as f64;
        px >= self.x && px < self.x + size && py >= self.y && py < self.y + size
    }

    /// Tile coordinate of the far (bottom) edge
    pub fn bottom(&self) -> f64 {
        self.y + self.size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_round_trip() {
        let c = Color::from_hex(0xF44336);
        assert_eq!(c, Color::new(0xF4, 0x43, 0x36));
        assert_eq!(c.to_u32(), 0xF44336);
        assert_eq!(c.to_string(), "#F44336");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#2196F3").unwrap(), Color::from_hex(0x2196F3));
        assert_eq!(Color::parse("ffebee").unwrap(), Color::from_hex(0xFFEBEE));
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#GG0000").is_err());
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_rect_half_open() {
        let r = TileRect::new(10.0, 20.0, 5);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(14.99, 24.99));
        assert!(!r.contains(15.0, 22.0));
        assert!(!r.contains(12.0, 25.0));
        assert!(!r.contains(9.99, 22.0));
        assert_eq!(r.bottom(), 25.0);
    }
}
