//! Anko Terminal Core
//!
//! This crate provides the platform-independent terminal emulation engine:
//! - Screen grid of styled cells with scrollback
//! - Cursor state with deferred-wrap handling
//! - Scrolling region, tab stops, and mode flags
//! - The operation surface invoked by the control-sequence parser
//!
//! This crate has NO GUI dependencies and can be used headlessly. It is
//! designed to be deterministic: given the same sequence of operations,
//! it will always produce the same screen state.

pub mod cell;
pub mod color;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod line;
pub mod modes;
pub mod scrollback;
pub mod tabs;
pub mod terminal;

pub use cell::{Cell, Style};
pub use color::Rgb;
pub use cursor::Cursor;
pub use error::TermError;
pub use grid::Grid;
pub use line::Line;
pub use modes::Modes;
pub use scrollback::Scrollback;
pub use tabs::TabStops;
pub use terminal::{Attribute, EraseDisplay, EraseLine, ScrollRegion, TabClear, Terminal};

/// Default terminal width in columns
pub const DEFAULT_COLS: usize = 80;
/// Default terminal height in rows
pub const DEFAULT_ROWS: usize = 24;
/// Default tab stop interval
pub const TAB_INTERVAL: usize = 8;
/// Default scrollback capacity in lines
pub const DEFAULT_SCROLLBACK_LINES: usize = 10_000;
