use std::collections::VecDeque;

use crate::model::{HistoryPoint, LogView};

/// Bounded time series, oldest point first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create a buffer keeping at most `capacity` points (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a point keeping timestamp order, then evict the oldest points
    /// past capacity
    pub fn push(&mut self, point: HistoryPoint) {
        let index = self
            .points
            .partition_point(|item| item.timestamp <= point.timestamp);
        self.points.insert(index, point);

        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Replace the whole series, e.g. with a history reported by the source
    pub fn replace<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = HistoryPoint>,
    {
        self.points.clear();
        for point in points {
            self.push(point);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<HistoryPoint> {
        self.points.iter().copied().collect()
    }
}

/// Recent log lines, newest first, capped at a fixed size.
#[derive(Debug, Clone)]
pub struct LogWindow {
    entries: VecDeque<LogView>,
    capacity: usize,
}

impl LogWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, entry: LogView) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<LogView> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogLevel;

    fn point(timestamp: i64, value: u64) -> HistoryPoint {
        HistoryPoint { timestamp, value }
    }

    fn log(message: &str) -> LogView {
        LogView {
            timestamp: 0,
            time: String::from("00:00:00"),
            level: LogLevel::Info,
            message: message.to_owned(),
            source: None,
            details: None,
        }
    }

    #[test]
    fn test_push_past_capacity_evicts_oldest() {
        let mut buffer = HistoryBuffer::new(3);
        for ts in 1..=4 {
            buffer.push(point(ts, ts as u64 * 10));
        }

        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.to_vec(),
            vec![point(2, 20), point(3, 30), point(4, 40)]
        );
    }

    #[test]
    fn test_out_of_order_push_keeps_order() {
        let mut buffer = HistoryBuffer::new(5);
        buffer.push(point(10, 1));
        buffer.push(point(30, 3));
        buffer.push(point(20, 2));
        buffer.push(point(20, 4));

        let timestamps: Vec<i64> =
            buffer.to_vec().iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, vec![10, 20, 20, 30]);
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_replace_applies_capacity() {
        let mut buffer = HistoryBuffer::new(2);
        buffer.push(point(100, 1));
        buffer.replace(vec![point(3, 3), point(1, 1), point(2, 2)]);

        assert_eq!(buffer.to_vec(), vec![point(2, 2), point(3, 3)]);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut buffer = HistoryBuffer::new(0);
        buffer.push(point(1, 1));
        buffer.push(point(2, 2));

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.to_vec(), vec![point(2, 2)]);
    }

    #[test]
    fn test_log_window_keeps_newest() {
        let mut window = LogWindow::new(2);
        window.append(log("first"));
        window.append(log("second"));
        window.append(log("third"));

        let messages: Vec<String> =
            window.to_vec().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["third", "second"]);
    }
}
