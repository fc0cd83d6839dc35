//! Terminal color support.
//!
//! The core stores colors as resolved RGB triples; indexed SGR codes are
//! mapped through the fixed 256-entry palette when an attribute is applied.

use serde::{Deserialize, Serialize};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Resolve a 256-color palette index to RGB.
///
/// Indices 0-15 are the standard ANSI colors (xterm defaults), 16-231 the
/// 6x6x6 color cube, and 232-255 the grayscale ramp.
pub fn palette(index: u8) -> Rgb {
    match index {
        // Standard colors (0-7)
        0 => Rgb::new(0, 0, 0),       // Black
        1 => Rgb::new(205, 0, 0),     // Red
        2 => Rgb::new(0, 205, 0),     // Green
        3 => Rgb::new(205, 205, 0),   // Yellow
        4 => Rgb::new(0, 0, 238),     // Blue
        5 => Rgb::new(205, 0, 205),   // Magenta
        6 => Rgb::new(0, 205, 205),   // Cyan
        7 => Rgb::new(229, 229, 229), // White
        // Bright colors (8-15)
        8 => Rgb::new(127, 127, 127),  // Bright Black
        9 => Rgb::new(255, 0, 0),      // Bright Red
        10 => Rgb::new(0, 255, 0),     // Bright Green
        11 => Rgb::new(255, 255, 0),   // Bright Yellow
        12 => Rgb::new(92, 92, 255),   // Bright Blue
        13 => Rgb::new(255, 0, 255),   // Bright Magenta
        14 => Rgb::new(0, 255, 255),   // Bright Cyan
        15 => Rgb::new(255, 255, 255), // Bright White
        // 216 color cube (16-231)
        16..=231 => {
            let n = index - 16;
            let r = n / 36;
            let g = (n % 36) / 6;
            let b = n % 6;
            let to_rgb = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            Rgb::new(to_rgb(r), to_rgb(g), to_rgb(b))
        }
        // Grayscale ramp (232-255)
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgb::new(gray, gray, gray)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_standard() {
        assert_eq!(palette(0), Rgb::new(0, 0, 0));
        assert_eq!(palette(7), Rgb::new(229, 229, 229));
        assert_eq!(palette(8), Rgb::new(127, 127, 127));
        assert_eq!(palette(15), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_palette_cube() {
        // Cube corners
        assert_eq!(palette(16), Rgb::new(0, 0, 0));
        assert_eq!(palette(231), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_palette_grayscale() {
        assert_eq!(palette(232), Rgb::new(8, 8, 8));
        assert_eq!(palette(255), Rgb::new(238, 238, 238));
    }
}
