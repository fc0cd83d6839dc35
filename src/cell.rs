//! Terminal cell representation.
//!
//! A cell is a single character position in the terminal grid: a character
//! plus the styling that was active when it was written.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Text attributes applied to a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub bold: bool,
    pub underline: bool,
    pub inverse: bool,
    /// The line continues on the next row via soft wrap. Only meaningful
    /// on the last cell of a row.
    pub wrap: bool,
}

impl Style {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell. `'\0'` denotes empty/erased.
    pub c: char,
    /// Foreground color; `None` is the terminal default.
    pub fg: Option<Rgb>,
    /// Background color; `None` is the terminal default.
    pub bg: Option<Rgb>,
    /// Text attributes
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            c: '\0',
            fg: None,
            bg: None,
            style: Style::default(),
        }
    }
}

impl Cell {
    /// Create a new cell with the given character and default styling
    pub fn new(c: char) -> Self {
        Cell {
            c,
            ..Default::default()
        }
    }

    /// Check if this cell is empty (erased or never written)
    pub fn is_empty(&self) -> bool {
        self.c == '\0'
    }

    /// Reset the cell to the default state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.fg, None);
        assert_eq!(cell.bg, None);
        assert_eq!(cell.style, Style::default());
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new('A');
        assert_eq!(cell.c, 'A');
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_cell_reset() {
        let mut cell = Cell::new('X');
        cell.fg = Some(Rgb::new(255, 0, 0));
        cell.style.bold = true;

        cell.reset();
        assert!(cell.is_empty());
        assert_eq!(cell.fg, None);
        assert!(!cell.style.bold);
    }
}
