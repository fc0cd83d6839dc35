//! Screen storage layer.
//!
//! The grid is an addressable 2D array of cells with row copy, a vertical
//! scroll primitive, and plain-text serialization. Rows displaced off the
//! top by scrolling are surrendered to the scrollback buffer. The
//! operation surface treats this type as an opaque cell store.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cell::Cell;
use crate::line::Line;
use crate::scrollback::Scrollback;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    lines: Vec<Line>,
    cols: usize,
    rows: usize,
    scrollback: Scrollback,
}

impl Grid {
    /// Create a new grid with the specified dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        let lines = (0..rows).map(|_| Line::new(cols)).collect();
        Grid {
            lines,
            cols,
            rows,
            scrollback: Scrollback::default(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.lines.get_mut(row)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.lines.get(row).and_then(|line| line.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.lines.get_mut(row).and_then(|line| line.get_mut(col))
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// All visible rows, top to bottom
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Copy the contents of row `src` into row `dst`
    pub fn copy_row(&mut self, dst: usize, src: usize) {
        if dst == src || dst >= self.rows || src >= self.rows {
            return;
        }
        let line = self.lines[src].clone();
        self.lines[dst] = line;
    }

    /// Shift all rows up by `delta`. Displaced top rows move into the
    /// scrollback; fresh blank rows appear at the bottom.
    pub fn scroll_delta(&mut self, delta: usize) {
        let delta = delta.min(self.rows);
        for _ in 0..delta {
            let line = self.lines.remove(0);
            self.scrollback.push(line);
            self.lines.push(Line::new(self.cols));
        }
    }

    /// Fill every visible cell with copies of `cell`
    pub fn fill(&mut self, cell: Cell) {
        for line in &mut self.lines {
            line.fill(cell);
        }
    }

    /// Resize the grid. Rows are truncated or padded; no reflow.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        for line in &mut self.lines {
            line.resize(cols);
        }

        match rows.cmp(&self.rows) {
            Ordering::Greater => {
                for _ in self.rows..rows {
                    self.lines.push(Line::new(cols));
                }
            }
            Ordering::Less => {
                self.lines.truncate(rows);
            }
            Ordering::Equal => {}
        }

        self.cols = cols;
        self.rows = rows;
    }

    /// Plain UTF-8 serialization of the visible screen. Empty cells are
    /// skipped, rows are joined by `\n`, trailing newlines are trimmed.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        while out.ends_with('\n') {
            out.pop();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(grid: &mut Grid, row: usize, s: &str) {
        for (i, c) in s.chars().enumerate() {
            grid.line_mut(row).unwrap().set(i, Cell::new(c));
        }
    }

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(80, 24);
        assert_eq!(grid.cols(), 80);
        assert_eq!(grid.rows(), 24);
        assert!(grid.text().is_empty());
    }

    #[test]
    fn test_copy_row() {
        let mut grid = Grid::new(10, 3);
        put(&mut grid, 0, "ABC");
        grid.copy_row(2, 0);
        assert_eq!(grid.text(), "ABC\n\nABC");
        // Source row is untouched
        assert_eq!(grid.cell(0, 0).unwrap().c, 'A');
    }

    #[test]
    fn test_scroll_delta() {
        let mut grid = Grid::new(10, 3);
        put(&mut grid, 0, "A");
        put(&mut grid, 1, "B");
        put(&mut grid, 2, "C");

        grid.scroll_delta(1);
        assert_eq!(grid.text(), "B\nC");
        assert_eq!(grid.scrollback().len(), 1);
        assert_eq!(grid.scrollback().get(0).unwrap().text(), "A");
    }

    #[test]
    fn test_resize() {
        let mut grid = Grid::new(10, 3);
        put(&mut grid, 0, "ABC");
        grid.resize(5, 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cell(0, 0).unwrap().c, 'A');

        grid.resize(2, 2);
        assert_eq!(grid.text(), "AB");
    }

    #[test]
    fn test_text_interior_blank_rows() {
        let mut grid = Grid::new(10, 4);
        put(&mut grid, 0, "A");
        put(&mut grid, 2, "B");
        assert_eq!(grid.text(), "A\n\nB");
    }
}
