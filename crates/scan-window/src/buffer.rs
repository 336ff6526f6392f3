//! Bounded Scan Window Implementation

use crate::Scan;
use std::collections::VecDeque;
use tracing::trace;

/// Default number of prior scans kept alongside the current one
pub const DEFAULT_DEPTH: usize = 3;

/// Bounded FIFO of scans, oldest at the head
#[derive(Debug, Clone)]
pub struct ScanWindow {
    /// Retained scans, oldest first
    scans: VecDeque<Scan>,
    /// Maximum number of retained scans (always >= 1)
    capacity: usize,
    /// Total scans ever pushed (for statistics)
    total_pushed: usize,
}

impl ScanWindow {
    /// Create a new window holding at most `capacity` scans.
    ///
    /// A capacity of zero is raised to one: the window always keeps at
    /// least the most recent scan.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            scans: VecDeque::with_capacity(capacity),
            capacity,
            total_pushed: 0,
        }
    }

    /// Create a window for the current scan plus `depth` prior scans
    pub fn with_depth(depth: usize) -> Self {
        Self::new(depth.saturating_add(1))
    }

    /// Push a scan at the tail, evicting and returning the oldest if full
    pub fn push(&mut self, scan: Scan) -> Option<Scan> {
        let evicted = if self.scans.len() >= self.capacity {
            self.scans.pop_front()
        } else {
            None
        };

        if let Some(old) = &evicted {
            trace!("Evicted scan with {} channels from window", old.len());
        }

        self.scans.push_back(scan);
        self.total_pushed += 1;
        evicted
    }

    /// Number of scans currently retained
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    /// Check if the window holds `capacity` scans
    pub fn is_full(&self) -> bool {
        self.scans.len() == self.capacity
    }

    /// Maximum number of retained scans
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of prior scans kept in addition to the latest one
    pub fn depth(&self) -> usize {
        self.capacity - 1
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.scans.len() as f64 / self.capacity as f64
    }

    /// Total scans ever pushed, including evicted ones
    pub fn total_pushed(&self) -> usize {
        self.total_pushed
    }

    /// Most recently pushed scan
    pub fn latest(&self) -> Option<&Scan> {
        self.scans.back()
    }

    /// Channel count of the most recent scan (0 when empty)
    pub fn channel_count(&self) -> usize {
        self.latest().map_or(0, Vec::len)
    }

    /// Iterate over retained scans, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Scan> + '_ {
        self.scans.iter()
    }

    /// Iterate over the scans that survive one more push, oldest first
    pub fn survivors(&self) -> impl Iterator<Item = &Scan> + '_ {
        let skip = usize::from(self.is_full());
        self.scans.iter().skip(skip)
    }

    /// Gather the values at `channel` across the window, oldest first.
    ///
    /// Returns `None` if any retained scan is too short to have that channel.
    pub fn column(&self, channel: usize) -> Option<Vec<f64>> {
        self.scans
            .iter()
            .map(|scan| scan.get(channel).copied())
            .collect()
    }

    /// Drop every retained scan; `total_pushed` is kept
    pub fn clear(&mut self) {
        self.scans.clear();
    }
}

impl Default for ScanWindow {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut window = ScanWindow::with_depth(2);

        assert!(window.push(vec![1.0]).is_none());
        assert!(window.push(vec![2.0]).is_none());
        assert!(!window.is_full());
        assert!(window.push(vec![3.0]).is_none());

        assert!(window.is_full());
        assert_eq!(window.len(), 3);
        assert_eq!(window.capacity(), 3);
        assert_eq!(window.depth(), 2);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut window = ScanWindow::new(2);

        window.push(vec![1.0, 1.0]);
        window.push(vec![2.0, 2.0]);
        let evicted = window.push(vec![3.0, 3.0]);

        assert_eq!(evicted, Some(vec![1.0, 1.0]));
        assert_eq!(window.len(), 2);
        assert_eq!(window.total_pushed(), 3);

        let retained: Vec<&Scan> = window.iter().collect();
        assert_eq!(retained[0], &vec![2.0, 2.0]); // Oldest
        assert_eq!(retained[1], &vec![3.0, 3.0]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut window = ScanWindow::new(0);
        assert_eq!(window.capacity(), 1);

        window.push(vec![1.0]);
        assert_eq!(window.push(vec![2.0]), Some(vec![1.0]));
        assert_eq!(window.latest(), Some(&vec![2.0]));
    }

    #[test]
    fn test_column_gathers_oldest_first() {
        let mut window = ScanWindow::with_depth(3);
        window.push(vec![1.0, 10.0]);
        window.push(vec![2.0, 20.0]);
        window.push(vec![3.0, 30.0]);

        assert_eq!(window.column(1), Some(vec![10.0, 20.0, 30.0]));
        assert_eq!(window.column(2), None);
    }

    #[test]
    fn test_column_short_scan() {
        let mut window = ScanWindow::with_depth(1);
        window.push(vec![1.0]);
        window.push(vec![2.0, 3.0]);

        assert_eq!(window.column(0), Some(vec![1.0, 2.0]));
        assert_eq!(window.column(1), None);
    }

    #[test]
    fn test_survivors_skip_head_when_full() {
        let mut window = ScanWindow::new(2);
        window.push(vec![1.0]);
        assert_eq!(window.survivors().count(), 1);

        window.push(vec![2.0]);
        let survivors: Vec<&Scan> = window.survivors().collect();
        assert_eq!(survivors, vec![&vec![2.0]]);
    }

    #[test]
    fn test_fill_ratio_and_clear() {
        let mut window = ScanWindow::new(4);
        assert_eq!(window.fill_ratio(), 0.0);

        window.push(vec![]);
        window.push(vec![]);
        assert!((window.fill_ratio() - 0.5).abs() < 0.01);

        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.channel_count(), 0);
        assert_eq!(window.total_pushed(), 2);
    }
}
