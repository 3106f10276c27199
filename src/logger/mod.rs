//! Interaction logging: append-only JSONL with graceful degradation.

pub mod jsonl;

pub use jsonl::{EventType, JsonlWriter, LogEntry, Severity};
