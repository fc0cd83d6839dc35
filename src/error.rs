//! Error types for terminal operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermError {
    #[error("invalid SGR attribute: 8-color index {0} out of range")]
    InvalidAttribute(u8),
}
