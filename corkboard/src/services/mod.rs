//! Services module
//!
//! Business logic that coordinates between the views and the board store.

pub mod directory;

pub use directory::{CaseDirectory, DirectoryScene};
