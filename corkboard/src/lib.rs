//! Corkboard library
//!
//! Cases hold boards of sticky notes joined by colored rope connections.
//! The library exposes the views, the board store and the host command
//! surface for the binary and for testing.

pub mod app;
pub mod board;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod router;
pub mod services;
pub mod storage;
pub mod ui;
