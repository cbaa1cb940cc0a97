//! In-memory log of completed quiz attempts
//!
//! Lives for the process only; there is no persistence and no delete
//! operation. Records are kept newest first.

use std::collections::VecDeque;

/// Summary of one completed quiz attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    /// Subject display name
    pub subject: String,
    /// Chapter display title
    pub chapter: String,
    /// Final score as an integer percentage
    pub percent: u8,
    /// Localized completion timestamp
    pub completed_at: String,
}

/// Ordered log of completed attempts, most recent first
#[derive(Debug, Clone, Default)]
pub struct QuizHistory {
    records: VecDeque<HistoryRecord>,
}

impl QuizHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a completed attempt
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push_front(record);
    }

    /// Snapshot of all records, newest first
    pub fn all(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }

    /// Number of completed attempts
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no attempt has completed yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Arithmetic mean of the recorded percentages, `0.0` when empty
    pub fn average_percent(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.records.iter().map(|r| r.percent as u32).sum();
        sum as f64 / self.records.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(chapter: &str, percent: u8) -> HistoryRecord {
        HistoryRecord {
            subject: "Lập trình Python".into(),
            chapter: chapter.into(),
            percent,
            completed_at: "01/11/2025 10:00:00".into(),
        }
    }

    #[test]
    fn empty_history_averages_zero() {
        let history = QuizHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.average_percent(), 0.0);
    }

    #[test]
    fn records_are_newest_first() {
        let mut history = QuizHistory::new();
        history.append(record("Chương 1", 80));
        history.append(record("Chương 2", 60));

        let all = history.all();
        assert_eq!(all[0].chapter, "Chương 2");
        assert_eq!(all[1].chapter, "Chương 1");
    }

    #[test]
    fn average_of_80_and_60_is_70() {
        let mut history = QuizHistory::new();
        history.append(record("Chương 1", 80));
        history.append(record("Chương 2", 60));
        assert_eq!(history.average_percent(), 70.0);
    }

    #[test]
    fn snapshot_is_detached_from_the_store() {
        let mut history = QuizHistory::new();
        history.append(record("Chương 1", 50));

        let mut snapshot = history.all();
        snapshot[0].percent = 0;
        snapshot.clear();

        assert_eq!(history.len(), 1);
        assert_eq!(history.all()[0].percent, 50);
    }
}
