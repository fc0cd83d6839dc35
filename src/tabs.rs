//! Tab stop management.
//!
//! A per-column boolean set with a default interval. With the default
//! interval of 8, stops sit on columns 7, 15, 23, ...

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabStops {
    stops: Vec<bool>,
    interval: usize,
}

impl TabStops {
    pub fn new(cols: usize, interval: usize) -> Self {
        let mut tabs = TabStops {
            stops: vec![false; cols],
            interval,
        };
        tabs.reset(interval);
        tabs
    }

    /// Clear all stops, then re-seed one every `interval` columns
    pub fn reset(&mut self, interval: usize) {
        self.interval = interval;
        self.stops.fill(false);
        if interval > 0 {
            let mut col = interval - 1;
            while col < self.stops.len() {
                self.stops[col] = true;
                col += interval;
            }
        }
    }

    pub fn set(&mut self, col: usize) {
        if col < self.stops.len() {
            self.stops[col] = true;
        }
    }

    pub fn unset(&mut self, col: usize) {
        if col < self.stops.len() {
            self.stops[col] = false;
        }
    }

    pub fn clear_all(&mut self) {
        self.stops.fill(false);
    }

    pub fn get(&self, col: usize) -> bool {
        self.stops.get(col).copied().unwrap_or(false)
    }

    /// Rebuild for a new column count at the current interval
    pub fn resize(&mut self, cols: usize) {
        self.stops = vec![false; cols];
        self.reset(self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stops() {
        let tabs = TabStops::new(80, 8);
        assert!(!tabs.get(0));
        assert!(tabs.get(7));
        assert!(!tabs.get(8));
        assert!(tabs.get(15));
        assert!(tabs.get(79));
    }

    #[test]
    fn test_set_unset() {
        let mut tabs = TabStops::new(80, 8);
        tabs.set(5);
        assert!(tabs.get(5));
        tabs.unset(5);
        assert!(!tabs.get(5));
        tabs.unset(7);
        assert!(!tabs.get(7));
    }

    #[test]
    fn test_clear_all() {
        let mut tabs = TabStops::new(80, 8);
        tabs.clear_all();
        for col in 0..80 {
            assert!(!tabs.get(col));
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut tabs = TabStops::new(10, 8);
        assert!(!tabs.get(100));
        tabs.set(100); // ignored
        assert!(!tabs.get(100));
    }

    #[test]
    fn test_resize_reseeds() {
        let mut tabs = TabStops::new(10, 8);
        tabs.set(3);
        tabs.resize(40);
        assert!(!tabs.get(3));
        assert!(tabs.get(7));
        assert!(tabs.get(39));
    }
}
