//! Colour value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EaselError, Result};

/// An RGBA colour value.
///
/// The drawing stores palette indices per cell; `Colour` is what those
/// indices resolve to. Colours generated by the engine are always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string: `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s);

        match hex.len() {
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(EaselError::bounds(format!("Invalid hex colour: {}", s))),
        }
    }

    /// Generate `n` evenly-spaced opaque hues.
    ///
    /// Used to seed default palettes with visually distinct colours.
    /// `n == 0` yields an empty list.
    pub fn spectrum(n: usize) -> Vec<Colour> {
        use palette::{Hsv, IntoColor, Srgb};

        (0..n)
            .map(|i| {
                let hue = 360.0 * i as f32 / n as f32;
                let rgb: Srgb<f32> = Hsv::new(hue, 0.85, 0.9).into_color();
                Colour::rgb(
                    (rgb.red * 255.0).round() as u8,
                    (rgb.green * 255.0).round() as u8,
                    (rgb.blue * 255.0).round() as u8,
                )
            })
            .collect()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16)
        .map_err(|_| EaselError::bounds(format!("Invalid hex byte: {}", s)))
}
