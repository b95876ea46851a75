//! Route table
//!
//! - `/` -> case directory
//! - `/case/:caseId` -> board for that case
//!
//! Anything else falls back to the directory.

use crate::database::CaseId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Directory,
    Board { case_id: CaseId },
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed.strip_prefix("/case/") {
            Some(case_id) if !case_id.is_empty() && !case_id.contains('/') => Route::Board {
                case_id: case_id.to_string(),
            },
            _ => {
                if !trimmed.is_empty() {
                    tracing::warn!("Unknown route {}, showing directory", path);
                }
                Route::Directory
            }
        }
    }

    pub fn board(case_id: impl Into<CaseId>) -> Self {
        Route::Board {
            case_id: case_id.into(),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Directory => "/".to_string(),
            Route::Board { case_id } => format!("/case/{}", case_id),
        }
    }
}
