//! Bounded line store backing the log panel
//!
//! A FIFO ring: lines are appended at the tail and, once the capacity is
//! exceeded, evicted from the head. Besides the retained lines it tracks how
//! many lines were ever appended. That count acts as a length fence: a reader
//! remembers the fence from its last read and later asks for everything
//! appended since, without caring how much was evicted in between.

use std::collections::VecDeque;

/// Default capacity of the log panel, in lines
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Capacity-limited, append-only line store
#[derive(Debug, Clone)]
pub struct BoundedSink<T> {
    lines: VecDeque<T>,
    capacity: usize,
    /// Total lines ever appended (monotonic)
    appended: u64,
}

impl<T> BoundedSink<T> {
    /// Create an empty sink. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            // Don't preallocate the full ring: most sessions never fill it
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            appended: 0,
        }
    }

    /// Append one line, evicting the oldest if the sink is full
    pub fn push(&mut self, line: T) {
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
        self.appended = self.appended.wrapping_add(1);

        debug_assert!(self.lines.len() <= self.capacity);
    }

    /// Append a batch of lines in order
    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = T>,
    {
        for line in lines {
            self.push(line);
        }
    }

    /// Number of retained lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total lines ever appended, including evicted ones
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Total lines evicted from the head so far
    pub fn evicted(&self) -> u64 {
        self.appended.saturating_sub(self.lines.len() as u64)
    }

    /// Retained lines, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.lines.iter()
    }

    /// Retained lines appended at or after `fence` (a previous `appended()` value)
    ///
    /// Lines that were appended after the fence but already evicted are skipped.
    pub fn since(&self, fence: u64) -> impl Iterator<Item = &T> {
        let skip = fence.saturating_sub(self.evicted());
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        self.lines.iter().skip(skip)
    }
}

impl<T> Default for BoundedSink<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
