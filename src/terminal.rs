//! Terminal state machine.
//!
//! The Terminal struct is the main entry point of the emulation core. It
//! owns the screen grid, cursor, scrolling region, tab stops, and mode
//! flags, and exposes the operations a control-sequence parser invokes
//! when it decodes CSI/ESC/SGR sequences.
//!
//! Coordinates on the external surface (`set_cursor_pos`,
//! `set_scrolling_region`) are 1-indexed with 0 normalized to 1; internal
//! state is 0-indexed. Out-of-range inputs are clamped, never reported.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::color::{self, Rgb};
use crate::cursor::Cursor;
use crate::error::TermError;
use crate::grid::Grid;
use crate::modes::Modes;
use crate::tabs::TabStops;
use crate::TAB_INTERVAL;

/// Vertical row band within which index and insert/delete-line scroll.
/// Bounds are 0-indexed and inclusive, with `top <= bottom < rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRegion {
    pub top: usize,
    pub bottom: usize,
}

impl ScrollRegion {
    pub fn full(rows: usize) -> Self {
        ScrollRegion {
            top: 0,
            bottom: rows.saturating_sub(1),
        }
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row <= self.bottom
    }
}

/// Erase-in-display modes (ED)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseDisplay {
    /// Erase the whole visible screen
    Complete,
    /// Erase from the cursor to the end of the screen
    Below,
    /// Erase from the start of the screen through the cursor
    Above,
    /// Erase the scrollback (recognized, not implemented)
    Scrollback,
}

/// Erase-in-line modes (EL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseLine {
    /// Erase from the cursor to the end of the line
    Right,
    /// Erase from the start of the line up to the cursor
    Left,
    /// Erase the entire line
    Complete,
}

/// Tab-clear modes (TBC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClear {
    /// Clear the stop at the cursor column
    Current,
    /// Clear every stop
    All,
}

/// SGR attributes applied to the pen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Reset all attributes and colors
    Unset,
    Bold,
    Underline,
    Inverse,
    /// 24-bit foreground color
    DirectColorFg(Rgb),
    /// 24-bit background color
    DirectColorBg(Rgb),
    /// 8-color foreground, index 0-7
    Fg8(u8),
    /// 8-color background, index 0-7
    Bg8(u8),
    /// Bright 8-color foreground, index 0-7
    BrightFg8(u8),
    /// Bright 8-color background, index 0-7
    BrightBg8(u8),
    /// 256-color foreground
    Fg256(u8),
    /// 256-color background
    Bg256(u8),
}

/// The terminal emulation core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminal {
    grid: Grid,
    tabs: TabStops,
    cursor: Cursor,
    saved_cursor: Cursor,
    scroll_region: ScrollRegion,
    cols: usize,
    rows: usize,
    pub modes: Modes,
}

impl Terminal {
    /// Create a new terminal with the given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "terminal dimensions must be nonzero");
        Terminal {
            grid: Grid::new(cols, rows),
            tabs: TabStops::new(cols, TAB_INTERVAL),
            cursor: Cursor::new(),
            saved_cursor: Cursor::new(),
            scroll_region: ScrollRegion::full(rows),
            cols,
            rows,
            modes: Modes::default(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn scroll_region(&self) -> &ScrollRegion {
        &self.scroll_region
    }

    pub fn tabs(&self) -> &TabStops {
        &self.tabs
    }

    /// Print a single character at the cursor, applying the pen.
    ///
    /// A print that lands in the rightmost column does not advance the
    /// line; it sets the deferred-wrap flag instead, and the advance
    /// happens only when another character arrives. This keeps a line of
    /// exactly `cols` characters fully visible.
    pub fn print(&mut self, c: char) {
        // Deferred wrap from a previous print in the last column: mark
        // the break as soft, then advance to a fresh line.
        if self.cursor.pending_wrap && self.modes.autowrap {
            if let Some(cell) = self.grid.cell_mut(self.cursor.y, self.cursor.x) {
                cell.style.wrap = true;
            }
            self.index();
            self.cursor.x = 0;
        }

        let pen = self.cursor.pen;
        if let Some(cell) = self.grid.cell_mut(self.cursor.y, self.cursor.x) {
            *cell = pen;
            cell.c = c;
        }

        self.cursor.x += 1;
        if self.cursor.x == self.cols {
            // The cursor never rests on the phantom column `cols`.
            self.cursor.x = self.cols - 1;
            self.cursor.pending_wrap = true;
        }
    }

    /// Move the cursor left by `n` (minimum 1), stopping at column 0
    pub fn cursor_left(&mut self, n: usize) {
        self.cursor.x = self.cursor.x.saturating_sub(n.max(1));
        self.cursor.pending_wrap = false;
    }

    /// Move the cursor right by `n`, stopping at the last column. Never
    /// wraps or scrolls.
    pub fn cursor_right(&mut self, n: usize) {
        self.cursor.x = (self.cursor.x + n).min(self.cols - 1);
        self.cursor.pending_wrap = false;
    }

    /// Move the cursor up by `n`, stopping at the top row. Never scrolls.
    pub fn cursor_up(&mut self, n: usize) {
        self.cursor.y = self.cursor.y.saturating_sub(n);
    }

    /// Move the cursor down by `n`, stopping at the bottom row. Never
    /// scrolls.
    pub fn cursor_down(&mut self, n: usize) {
        self.cursor.y = (self.cursor.y + n).min(self.rows - 1);
    }

    pub fn backspace(&mut self) {
        self.cursor.x = self.cursor.x.saturating_sub(1);
        self.cursor.pending_wrap = false;
    }

    pub fn carriage_return(&mut self) {
        self.cursor.x = 0;
        self.cursor.pending_wrap = false;
    }

    pub fn linefeed(&mut self) {
        self.index();
    }

    /// NEL: carriage return plus index
    pub fn next_line(&mut self) {
        self.carriage_return();
        self.index();
    }

    /// Move the cursor to a 1-indexed position; 0 is normalized to 1.
    ///
    /// With origin mode enabled the row is relative to the scrolling
    /// region's top and clamped to its bottom.
    pub fn set_cursor_pos(&mut self, row: usize, col: usize) {
        let row = row.max(1);
        let col = col.max(1);

        if self.modes.origin {
            self.cursor.y = (self.scroll_region.top + row).min(self.scroll_region.bottom + 1) - 1;
        } else {
            self.cursor.y = row.min(self.rows) - 1;
        }
        self.cursor.x = col.min(self.cols) - 1;
        self.cursor.pending_wrap = false;
    }

    /// Index: move the cursor down one row. At the physical bottom of the
    /// screen, scroll up if the cursor is inside the scrolling region;
    /// outside the region it is a no-op.
    pub fn index(&mut self) {
        self.cursor.pending_wrap = false;

        if self.cursor.y == self.rows - 1 {
            if self.scroll_region.contains(self.cursor.y) {
                self.scroll_up(1);
            }
        } else {
            self.cursor.y += 1;
        }
    }

    /// Reverse index: move the cursor up one row, scrolling down at the
    /// top of the screen.
    pub fn reverse_index(&mut self) {
        if self.cursor.y == 0 {
            self.scroll_down(1);
        } else {
            self.cursor.y -= 1;
        }
    }

    /// Shift the visible screen up by `n` rows. Displaced top rows go to
    /// the scrollback; fresh blank rows appear at the bottom.
    pub fn scroll_up(&mut self, n: usize) {
        self.grid.scroll_delta(n);
    }

    /// Shift rows down within the scrolling region by `n`. The cursor is
    /// preserved.
    pub fn scroll_down(&mut self, n: usize) {
        let saved = self.cursor;
        self.cursor.y = self.scroll_region.top;
        self.insert_lines(n);
        self.cursor = saved;
    }

    /// Insert `n` blank lines at the cursor row, shifting rows down
    /// within the scrolling region. Rows pushed past the region bottom
    /// are lost. No-op when the cursor is outside the region. The cursor
    /// moves to the left margin.
    pub fn insert_lines(&mut self, n: usize) {
        if !self.scroll_region.contains(self.cursor.y) {
            return;
        }
        self.cursor.x = 0;
        self.cursor.pending_wrap = false;

        let y = self.cursor.y;
        let bottom = self.scroll_region.bottom;
        let remaining = bottom - y + 1;
        let count = n.min(remaining);

        for r in ((y + count)..=bottom).rev() {
            self.grid.copy_row(r, r - count);
        }

        let mut blank = self.cursor.pen;
        blank.c = '\0';
        for r in y..y + count {
            if let Some(line) = self.grid.line_mut(r) {
                line.fill(blank);
            }
        }
    }

    /// Delete `n` lines at the cursor row, shifting rows up within the
    /// scrolling region and opening blank rows at the region bottom.
    /// No-op when the cursor is outside the region. The cursor moves to
    /// the left margin.
    pub fn delete_lines(&mut self, n: usize) {
        if !self.scroll_region.contains(self.cursor.y) {
            return;
        }
        self.cursor.x = 0;
        self.cursor.pending_wrap = false;

        let y = self.cursor.y;
        let bottom = self.scroll_region.bottom;
        let remaining = bottom - y + 1;
        let count = n.min(remaining);

        if count < remaining {
            for r in y..=bottom - count {
                self.grid.copy_row(r, r + count);
            }
        }

        let mut blank = self.cursor.pen;
        blank.c = '\0';
        for r in (bottom + 1 - count)..=bottom {
            if let Some(line) = self.grid.line_mut(r) {
                line.fill(blank);
            }
        }
    }

    /// Delete `n` characters at the cursor, shifting the rest of the row
    /// left. The cursor does not move.
    pub fn delete_chars(&mut self, n: usize) {
        let x = self.cursor.x;
        if let Some(line) = self.grid.line_mut(self.cursor.y) {
            line.delete_cells(x, n);
        }
    }

    /// Overwrite `n` cells starting at the cursor with the pen. The
    /// cursor does not move.
    pub fn erase_chars(&mut self, n: usize) {
        let mut blank = self.cursor.pen;
        blank.c = '\0';
        let x = self.cursor.x;
        let end = (x + n).min(self.cols);
        if let Some(line) = self.grid.line_mut(self.cursor.y) {
            line.fill_range(x, end, blank);
        }
    }

    /// Insert `n` blank cells at the cursor, shifting the rest of the row
    /// right. Cells pushed past the right edge are lost.
    pub fn insert_chars(&mut self, n: usize) {
        let mut blank = self.cursor.pen;
        blank.c = '\0';
        let x = self.cursor.x;
        if let Some(line) = self.grid.line_mut(self.cursor.y) {
            line.insert_cells(x, n, blank);
        }
    }

    /// Erase a portion of the display, painting with the pen
    pub fn erase_display(&mut self, mode: EraseDisplay) {
        let mut blank = self.cursor.pen;
        blank.c = '\0';
        let (x, y) = (self.cursor.x, self.cursor.y);
        let cols = self.cols;

        match mode {
            EraseDisplay::Complete => self.grid.fill(blank),
            EraseDisplay::Below => {
                if let Some(line) = self.grid.line_mut(y) {
                    line.fill_range(x, cols, blank);
                }
                for r in y + 1..self.rows {
                    if let Some(line) = self.grid.line_mut(r) {
                        line.fill(blank);
                    }
                }
            }
            EraseDisplay::Above => {
                for r in 0..y {
                    if let Some(line) = self.grid.line_mut(r) {
                        line.fill(blank);
                    }
                }
                if let Some(line) = self.grid.line_mut(y) {
                    line.fill_range(0, x + 1, blank);
                }
            }
            EraseDisplay::Scrollback => {
                tracing::debug!("unimplemented erase mode: scrollback");
            }
        }
    }

    /// Erase a portion of the cursor row, painting with the pen
    pub fn erase_line(&mut self, mode: EraseLine) {
        let mut blank = self.cursor.pen;
        blank.c = '\0';
        let (x, cols) = (self.cursor.x, self.cols);

        if let Some(line) = self.grid.line_mut(self.cursor.y) {
            match mode {
                EraseLine::Right => line.fill_range(x, cols, blank),
                EraseLine::Left => line.fill_range(0, x, blank),
                EraseLine::Complete => line.fill(blank),
            }
        }
    }

    /// DECSTBM: set the scrolling region from 1-indexed bounds. A bottom
    /// of 0 means the last row; degenerate bounds reset to the full
    /// screen. Homes the cursor (origin-mode aware).
    pub fn set_scrolling_region(&mut self, top: usize, bottom: usize) {
        let t = top.max(1);
        let b = if bottom == 0 {
            self.rows
        } else {
            bottom.min(self.rows)
        };

        self.scroll_region = if t >= b {
            ScrollRegion::full(self.rows)
        } else {
            ScrollRegion {
                top: t - 1,
                bottom: b - 1,
            }
        };

        self.set_cursor_pos(1, 1);
    }

    /// DECSC: snapshot the entire cursor (position, pen, deferred-wrap
    /// flag) into the save slot.
    pub fn save_cursor(&mut self) {
        self.saved_cursor = self.cursor;
    }

    /// DECRC: restore the cursor from the save slot, clamping to the
    /// current screen bounds. With no prior save this yields the default
    /// cursor.
    pub fn restore_cursor(&mut self) {
        self.cursor = self.saved_cursor;
        self.cursor.x = self.cursor.x.min(self.cols - 1);
        self.cursor.y = self.cursor.y.min(self.rows - 1);
        if self.cursor.x != self.cols - 1 {
            self.cursor.pending_wrap = false;
        }
    }

    /// Apply an SGR attribute to the pen. Indexed 8-color variants reject
    /// indices above 7; the pen is unchanged on error.
    pub fn set_attribute(&mut self, attr: Attribute) -> Result<(), TermError> {
        let pen = &mut self.cursor.pen;
        match attr {
            Attribute::Unset => {
                pen.fg = None;
                pen.bg = None;
                pen.style.reset();
            }
            Attribute::Bold => pen.style.bold = true,
            Attribute::Underline => pen.style.underline = true,
            Attribute::Inverse => pen.style.inverse = true,
            Attribute::DirectColorFg(rgb) => pen.fg = Some(rgb),
            Attribute::DirectColorBg(rgb) => pen.bg = Some(rgb),
            Attribute::Fg8(idx) => {
                if idx > 7 {
                    return Err(TermError::InvalidAttribute(idx));
                }
                pen.fg = Some(color::palette(idx));
            }
            Attribute::Bg8(idx) => {
                if idx > 7 {
                    return Err(TermError::InvalidAttribute(idx));
                }
                pen.bg = Some(color::palette(idx));
            }
            Attribute::BrightFg8(idx) => {
                if idx > 7 {
                    return Err(TermError::InvalidAttribute(idx));
                }
                pen.fg = Some(color::palette(idx + 8));
            }
            Attribute::BrightBg8(idx) => {
                if idx > 7 {
                    return Err(TermError::InvalidAttribute(idx));
                }
                pen.bg = Some(color::palette(idx + 8));
            }
            Attribute::Fg256(idx) => pen.fg = Some(color::palette(idx)),
            Attribute::Bg256(idx) => pen.bg = Some(color::palette(idx)),
        }
        Ok(())
    }

    /// HT: walk the cursor to the next tab stop, printing pen-styled
    /// spaces, stopping at the last column.
    pub fn horizontal_tab(&mut self) {
        while self.cursor.x < self.cols - 1 {
            self.print(' ');
            if self.tabs.get(self.cursor.x) {
                break;
            }
        }
    }

    /// HTS: set a tab stop at the cursor column
    pub fn tab_set(&mut self) {
        self.tabs.set(self.cursor.x);
    }

    /// TBC: clear the stop at the cursor column, or all stops
    pub fn tab_clear(&mut self, mode: TabClear) {
        match mode {
            TabClear::Current => self.tabs.unset(self.cursor.x),
            TabClear::All => self.tabs.clear_all(),
        }
    }

    /// DECALN: reset the scrolling region, home the cursor, and fill the
    /// screen with 'E' in a neutral pen.
    pub fn decaln(&mut self) {
        self.set_scrolling_region(1, self.rows);
        self.grid.fill(Cell::new('E'));
    }

    /// Resize the terminal. The scrolling region resets to the full
    /// screen, the cursor clamps to the new bounds, and tab stops are
    /// rebuilt at the default interval when the column count changes.
    /// No reflow.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        assert!(cols > 0 && rows > 0, "terminal dimensions must be nonzero");
        if cols != self.cols {
            self.tabs.resize(cols);
        }
        self.grid.resize(cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.scroll_region = ScrollRegion::full(rows);
        self.cursor.x = self.cursor.x.min(cols - 1);
        self.cursor.y = self.cursor.y.min(rows - 1);
        self.cursor.pending_wrap = false;
    }

    /// RIS: reset the terminal to its initial state
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.cols, self.rows);
        self.tabs = TabStops::new(self.cols, TAB_INTERVAL);
        self.cursor = Cursor::new();
        self.saved_cursor = Cursor::new();
        self.scroll_region = ScrollRegion::full(self.rows);
        self.modes.reset();
    }

    /// Serialize the visible screen to plain UTF-8: empty cells skipped,
    /// rows joined by `\n`, trailing newlines trimmed.
    pub fn plain_string(&self) -> String {
        self.grid.text()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Terminal::new(crate::DEFAULT_COLS, crate::DEFAULT_ROWS)
    }
}
