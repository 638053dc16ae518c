//! Product catalogue domain: records, validation and the in-memory store.

pub mod context;
pub mod domain;
