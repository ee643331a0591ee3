//! Newest-first, append-only event log.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::envelope::EventEnvelope;
use crate::event::Event;

/// In-memory history of recorded events.
///
/// Entries are stored newest-first, so reading the most recent `n` is a
/// prefix take. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct EventLog<E> {
    entries: VecDeque<EventEnvelope<E>>,
    next_sequence: u64,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            next_sequence: 1,
        }
    }
}

impl<E: Event> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `event` in an envelope and prepend it. Returns the assigned
    /// sequence number.
    pub fn record(&mut self, event: E) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        tracing::debug!(
            event_type = event.event_type(),
            version = event.version(),
            sequence_number = seq,
            "event recorded"
        );
        self.entries
            .push_front(EventEnvelope::new(Uuid::now_v7(), seq, event));
        seq
    }

    /// Up to `count` most recent entries, newest first.
    pub fn latest(&self, count: usize) -> impl Iterator<Item = &EventEnvelope<E>> {
        self.entries.iter().take(count)
    }

    /// All entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &EventEnvelope<E>> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&EventEnvelope<E>> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Noted(u32);

    impl core::fmt::Display for Noted {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "noted {}", self.0)
        }
    }

    impl Event for Noted {
        fn event_type(&self) -> &'static str {
            "test.noted"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            DateTime::<Utc>::UNIX_EPOCH
        }
    }

    #[test]
    fn latest_returns_newest_first() {
        let mut log = EventLog::new();
        for i in 1..=5 {
            log.record(Noted(i));
        }

        let got: Vec<u32> = log.latest(2).map(|e| e.payload().0).collect();
        assert_eq!(got, vec![5, 4]);
    }

    #[test]
    fn latest_with_oversized_count_returns_everything() {
        let mut log = EventLog::new();
        log.record(Noted(1));
        log.record(Noted(2));

        assert_eq!(log.latest(100).count(), 2);
        assert_eq!(log.latest(0).count(), 0);
    }

    #[test]
    fn sequence_numbers_are_monotonic_and_ids_unique() {
        let mut log = EventLog::new();
        assert_eq!(log.record(Noted(1)), 1);
        assert_eq!(log.record(Noted(2)), 2);
        assert_eq!(log.record(Noted(3)), 3);

        let seqs: Vec<u64> = log.iter().map(|e| e.sequence_number()).collect();
        assert_eq!(seqs, vec![3, 2, 1]);

        let mut ids: Vec<Uuid> = log.iter().map(|e| e.event_id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn recorded_payload_keeps_event_metadata() {
        let mut log = EventLog::new();
        log.record(Noted(3));
        let newest = log.newest().unwrap().payload();
        assert_eq!(newest.event_type(), "test.noted");
        assert_eq!(newest.version(), 1);
        assert_eq!(newest.occurred_at(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn envelope_displays_payload() {
        let mut log = EventLog::new();
        log.record(Noted(7));
        assert_eq!(log.newest().unwrap().to_string(), "noted 7");
    }
}
