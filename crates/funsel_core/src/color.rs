//! Color types and utilities

use std::fmt;

use thiserror::Error;

/// Errors raised when parsing colors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a `#rrggbb` or `#rrggbbaa` hex string
    #[error("invalid hex color `{0}`: expected #rrggbb or #rrggbbaa")]
    InvalidHex(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            let [r, g, b, a] = hex.to_be_bytes();
            Self::from_rgba8(r, g, b, a)
        } else {
            let [_, r, g, b] = hex.to_be_bytes();
            Self::from_rgba8(r, g, b, 255)
        }
    }

    /// Parse `#rrggbb`, `#rrggbbaa`, or the same without the leading `#`
    pub fn from_hex_str(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ColorError::InvalidHex(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => {
                let [r, g, b, a] = value.to_be_bytes();
                Ok(Self::from_rgba8(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

#[inline]
fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_palette() {
        for hex in ["#0d1117", "#ffffff", "#39d353", "#0e4429"] {
            let color = Color::from_hex_str(hex).unwrap();
            assert_eq!(color.to_hex_string(), hex);
        }
    }

    #[test]
    fn test_parse_matches_from_hex() {
        assert_eq!(Color::from_hex_str("#39d353").unwrap(), Color::from_hex(0x39d353));
        assert_eq!(Color::from_hex_str("39d353").unwrap(), Color::from_hex(0x39d353));
        assert_eq!(Color::from_hex_str("#ff000080").unwrap().to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "#+12345", "red", "##39d353", "###39d353"] {
            assert!(
                matches!(Color::from_hex_str(bad), Err(ColorError::InvalidHex(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let color: Color = "#0e4429".parse().unwrap();
        assert_eq!(color.to_string(), "#0e4429");
        assert_eq!(Color::new(1.0, 1.0, 1.0, 0.0).to_string(), "#ffffff00");
    }
}
