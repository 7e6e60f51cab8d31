//! Color primitives
//!
//! Provides the 8-bit RGB sample type consumed and produced by the
//! quantizer, along with the presentation conversions used by callers:
//! - RGB -> hexadecimal string (`#rrggbb`) and back
//! - RGB -> HSL (Hue, Saturation, Lightness)
//! - YIQ luma and a dark/light classification

use crate::error::{Error, Result};
use std::fmt;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color representation
///
/// - `h`: Hue in degrees, range [0.0, 360.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `l`: Lightness in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color with all channels equal to `value`
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels as an `[r, g, b]` array
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase `#rrggbb` string
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a hexadecimal color string.
    ///
    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb` (case-insensitive).
    /// The short form expands each digit, so `#f80` is `#ff8800`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other length or for
    /// non-hexadecimal digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let parse = |part: &str| u8::from_str_radix(part, 16);
        let channels = match digits.len() {
            6 => (parse(&digits[0..2]), parse(&digits[2..4]), parse(&digits[4..6])),
            3 => (
                parse(&digits[0..1]).map(|v| v * 17),
                parse(&digits[1..2]).map(|v| v * 17),
                parse(&digits[2..3]).map(|v| v * 17),
            ),
            _ => return Err(Error::InvalidColor(s.to_string())),
        };

        match channels {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }

    /// Convert to HSL
    ///
    /// Achromatic colors (r == g == b) have hue and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let h = (sector * 60.0) % 360.0;
        Hsl::new(h, s, l)
    }

    /// YIQ luma in [0, 255]
    ///
    /// Formula: (299*R + 587*G + 114*B) / 1000
    #[inline]
    pub fn luma(self) -> u8 {
        ((299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000) as u8
    }

    /// Whether the color reads as dark (luma below 128)
    #[inline]
    pub fn is_dark(self) -> bool {
        self.luma() < 128
    }

    /// Squared Euclidean distance in RGB space
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
