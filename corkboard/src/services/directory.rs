//! Case directory service
//!
//! Creates, lists and deletes cases. Creating a case also initializes its
//! empty board; deleting one drops the board with it.

use crate::config::{
    DATE_DISPLAY_FORMAT, DIRECTORY_EMPTY_HINT, DIRECTORY_EMPTY_TITLE, DIRECTORY_SUBTITLE,
    DIRECTORY_TITLE, TOAST_CASE_CREATED, TOAST_CASE_DELETED, TOAST_DELETED_TITLE,
    TOAST_EMPTY_CASE_NAME, TOAST_ERROR_TITLE, TOAST_SUCCESS_TITLE,
};
use crate::database::{Case, CaseId};
use crate::error::{AppError, Result};
use crate::router::Route;
use crate::storage::BoardStore;
use crate::ui::{EmptyState, Toast, Ui};
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCardView {
    pub id: CaseId,
    pub name: String,
    pub created_label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryScene {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cases: Vec<CaseCardView>,
    pub empty_state: Option<EmptyState>,
}

pub struct CaseDirectory {
    store: BoardStore,
    ui: Ui,
    cases: Vec<Case>,
}

impl CaseDirectory {
    pub async fn load(store: BoardStore, ui: Ui) -> Result<Self> {
        let cases = store.load_cases().await?;
        tracing::debug!("Loaded {} case(s)", cases.len());

        Ok(Self { store, ui, cases })
    }

    /// Cases in insertion order
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Create a case from the name the user entered.
    ///
    /// Blank names are rejected with a notification and change nothing.
    pub async fn create_case(&mut self, name: &str) -> Result<Option<Case>> {
        let name = name.trim();
        if name.is_empty() {
            self.ui
                .notify(Toast::destructive(TOAST_ERROR_TITLE, TOAST_EMPTY_CASE_NAME));
            return Ok(None);
        }

        let case = Case::new(name);
        tracing::info!("Creating case: {} ({})", case.name, case.id);

        self.cases.push(case.clone());
        self.store.save_cases(&self.cases).await?;
        self.store.save_notes(&case.id, &[]).await?;
        self.store.save_connections(&case.id, &[]).await?;

        self.ui
            .notify(Toast::new(TOAST_SUCCESS_TITLE, TOAST_CASE_CREATED));
        Ok(Some(case))
    }

    /// Delete a case together with its notes and connections
    pub async fn delete_case(&mut self, case_id: &str) -> Result<()> {
        let index = self
            .cases
            .iter()
            .position(|c| c.id == case_id)
            .ok_or_else(|| AppError::CaseNotFound(case_id.to_string()))?;
        let case = self.cases.remove(index);

        self.store.save_cases(&self.cases).await?;
        self.store.drop_case(case_id).await?;

        tracing::info!("Deleted case: {} ({})", case.name, case.id);
        self.ui
            .notify(Toast::new(TOAST_DELETED_TITLE, TOAST_CASE_DELETED));
        Ok(())
    }

    /// Route for opening a case's board. Unknown ids still open (blank) boards.
    pub fn open_case(&self, case_id: &str) -> Route {
        Route::board(case_id)
    }

    pub fn scene(&self) -> DirectoryScene {
        let cases = self
            .cases
            .iter()
            .map(|case| CaseCardView {
                id: case.id.clone(),
                name: case.name.clone(),
                created_label: created_label(case),
                path: Route::board(case.id.as_str()).to_path(),
            })
            .collect();

        DirectoryScene {
            title: DIRECTORY_TITLE,
            subtitle: DIRECTORY_SUBTITLE,
            cases,
            empty_state: self
                .cases
                .is_empty()
                .then_some(EmptyState {
                    title: DIRECTORY_EMPTY_TITLE,
                    hint: DIRECTORY_EMPTY_HINT,
                }),
        }
    }
}

/// Creation date in local time
pub fn created_label(case: &Case) -> String {
    case.created_at
        .with_timezone(&Local)
        .format(DATE_DISPLAY_FORMAT)
        .to_string()
}
