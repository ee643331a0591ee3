use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for an event, carrying log metadata around the payload.
///
/// - `event_id` is a time-ordered UUIDv7, unique per recorded entry.
/// - `sequence_number` is monotonically increasing within one log, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,

    /// Position in the owning log (1-based, never reused).
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}

impl<E: core::fmt::Display> core::fmt::Display for EventEnvelope<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.payload, f)
    }
}
