//! Terminal mode flags.

use serde::{Deserialize, Serialize};

/// Mode flags recognized by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modes {
    /// DECOM: Origin mode
    /// When enabled, cursor positioning is relative to the scrolling
    /// region and clamped to it.
    pub origin: bool,

    /// DECAWM: Auto-wrap mode
    /// When enabled, a print with the deferred-wrap flag set advances to
    /// the next line first.
    pub autowrap: bool,

    /// DECSCNM: Reverse video
    /// Stored for the renderer; has no effect on core state transitions.
    pub reverse_colors: bool,
}

impl Default for Modes {
    fn default() -> Self {
        Modes {
            origin: false,
            autowrap: true,
            reverse_colors: false,
        }
    }
}

impl Modes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_default() {
        let modes = Modes::new();
        assert!(modes.autowrap);
        assert!(!modes.origin);
        assert!(!modes.reverse_colors);
    }
}
