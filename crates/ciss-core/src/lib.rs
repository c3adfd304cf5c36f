//! ciss-core
//!
//! Pure domain types for the Cognitive Impairment Scoring System (CISS).
//! No scoring rules and no I/O — this is the shared vocabulary between the
//! engine and its callers.

pub mod models;
