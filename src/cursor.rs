//! Cursor state.
//!
//! The cursor tracks:
//! - Current position (column, row)
//! - The pen: a cell template cloned into every printed cell
//! - The deferred-wrap flag set after a print in the last column

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Cursor state including position, pen, and the deferred-wrap flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position (0-indexed)
    pub x: usize,
    /// Row position (0-indexed)
    pub y: usize,
    /// Style template copied into every printed cell. Its `c` stays
    /// `'\0'`; print overwrites it per character.
    pub pen: Cell,
    /// Set when a print just landed in the rightmost column; the next
    /// print wraps to a new line first (DECAWM deferred wrap). Distinct
    /// from `x == cols`, which is never a valid position.
    pub pending_wrap: bool,
}

impl Cursor {
    /// Create a new cursor at the home position
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default() {
        let cursor = Cursor::new();
        assert_eq!(cursor.x, 0);
        assert_eq!(cursor.y, 0);
        assert!(!cursor.pending_wrap);
        assert!(cursor.pen.is_empty());
    }
}
