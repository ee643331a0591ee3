//! Inventory events and the transaction log they are recorded in.

pub mod envelope;
pub mod event;
pub mod log;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use log::EventLog;
