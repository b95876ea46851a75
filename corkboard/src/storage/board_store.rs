//! Board persistence adapter
//!
//! The only component that reads or writes persisted board state.
//! Layout in the key/value store:
//!
//! - `cases` -> JSON array of cases
//! - `notes_<caseId>` -> JSON array of notes
//! - `connections_<caseId>` -> JSON array of connections
//!
//! Absent or corrupt values read as an empty list. Writes replace the whole
//! list under its key.

use crate::database::{Case, Connection, Note, Repository};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const CASES_KEY: &str = "cases";

pub fn notes_key(case_id: &str) -> String {
    format!("notes_{}", case_id)
}

pub fn connections_key(case_id: &str) -> String {
    format!("connections_{}", case_id)
}

/// Persistence adapter over the durable key/value store
#[derive(Clone)]
pub struct BoardStore {
    repo: Repository,
}

impl BoardStore {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Access to the raw store, used for inspection in tests and tooling
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub async fn load_cases(&self) -> Result<Vec<Case>> {
        self.load_list(CASES_KEY).await
    }

    pub async fn save_cases(&self, cases: &[Case]) -> Result<()> {
        self.save_list(CASES_KEY, cases).await
    }

    pub async fn load_notes(&self, case_id: &str) -> Result<Vec<Note>> {
        self.load_list(&notes_key(case_id)).await
    }

    pub async fn save_notes(&self, case_id: &str, notes: &[Note]) -> Result<()> {
        self.save_list(&notes_key(case_id), notes).await
    }

    pub async fn load_connections(&self, case_id: &str) -> Result<Vec<Connection>> {
        self.load_list(&connections_key(case_id)).await
    }

    pub async fn save_connections(&self, case_id: &str, connections: &[Connection]) -> Result<()> {
        self.save_list(&connections_key(case_id), connections).await
    }

    /// Remove both per-case keys
    pub async fn drop_case(&self, case_id: &str) -> Result<()> {
        self.repo.remove_item(&notes_key(case_id)).await?;
        self.repo.remove_item(&connections_key(case_id)).await?;

        tracing::debug!("Dropped board data for case: {}", case_id);
        Ok(())
    }

    async fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.repo.get_item(key).await? else {
            return Ok(Vec::new());
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring corrupt value under {}: {}", key, e);
                return Ok(Vec::new());
            }
        };

        // A bad entry is skipped on its own; the rest of the list survives
        let items = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<T>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping corrupt entry {} under {}: {}", index, key, e);
                    None
                }
            })
            .collect();

        Ok(items)
    }

    async fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.repo.set_item(key, &json).await
    }
}
