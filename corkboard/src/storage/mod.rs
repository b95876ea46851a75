//! Storage module
//!
//! Mirrors the in-memory board model into the durable key/value store.

pub mod board_store;

pub use board_store::{connections_key, notes_key, BoardStore, CASES_KEY};
