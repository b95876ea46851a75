//! Application state and the router shell
//!
//! `setup` opens the data directory and store once at startup. The `Shell`
//! owns the current route and the view mounted for it; navigating mounts a
//! fresh view, so ephemeral board state never outlives its route.

use crate::board::{BoardScene, BoardView};
use crate::config::DATABASE_FILE_NAME;
use crate::database::{create_pool, Repository};
use crate::error::{AppError, Result};
use crate::router::Route;
use crate::services::{CaseDirectory, DirectoryScene};
use crate::storage::BoardStore;
use crate::ui::{PresetConfirm, ToastQueue, Ui};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Central application state shared by every view
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub store: BoardStore,
    pub toasts: Arc<ToastQueue>,
    pub confirm: Arc<PresetConfirm>,
}

impl AppState {
    pub fn new(app_data_dir: PathBuf, store: BoardStore) -> Self {
        Self {
            app_data_dir,
            store,
            toasts: Arc::new(ToastQueue::default()),
            confirm: Arc::new(PresetConfirm::default()),
        }
    }

    pub fn ui(&self) -> Ui {
        Ui::new(self.toasts.clone(), self.confirm.clone())
    }
}

/// Application setup - called once on startup
pub async fn setup(app_data_dir: &Path) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(app_data_dir)?;

    let pool = create_pool(&app_data_dir.join(DATABASE_FILE_NAME)).await?;
    let store = BoardStore::new(Repository::new(pool));

    tracing::info!("Application initialized successfully");

    Ok(AppState::new(app_data_dir.to_path_buf(), store))
}

/// The view mounted for the current route
pub enum View {
    Directory(CaseDirectory),
    Board(Box<BoardView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Scene {
    Directory(DirectoryScene),
    Board(BoardScene),
}

pub struct Shell {
    state: AppState,
    route: Route,
    view: View,
}

impl Shell {
    /// Start at the directory
    pub async fn start(state: AppState) -> Result<Self> {
        let view = View::Directory(CaseDirectory::load(state.store.clone(), state.ui()).await?);

        Ok(Self {
            state,
            route: Route::Directory,
            view,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn path(&self) -> String {
        self.route.to_path()
    }

    pub async fn navigate(&mut self, path: &str) -> Result<()> {
        self.go(Route::parse(path)).await
    }

    /// Mount the view for `route`, replacing the current one
    pub async fn go(&mut self, route: Route) -> Result<()> {
        // Leaving a board ends any drag in progress
        if let View::Board(board) = &mut self.view {
            board.mouse_up().await?;
        }

        let view = match &route {
            Route::Directory => View::Directory(
                CaseDirectory::load(self.state.store.clone(), self.state.ui()).await?,
            ),
            Route::Board { case_id } => View::Board(Box::new(
                BoardView::mount(self.state.store.clone(), self.state.ui(), case_id).await?,
            )),
        };

        tracing::debug!("Navigated to {}", route.to_path());
        self.route = route;
        self.view = view;
        Ok(())
    }

    pub async fn back(&mut self) -> Result<()> {
        self.go(Route::Directory).await
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn directory_mut(&mut self) -> Result<&mut CaseDirectory> {
        match &mut self.view {
            View::Directory(directory) => Ok(directory),
            View::Board(_) => Err(AppError::WrongView {
                expected: "directory",
            }),
        }
    }

    pub fn board_mut(&mut self) -> Result<&mut BoardView> {
        match &mut self.view {
            View::Board(board) => Ok(board.as_mut()),
            View::Directory(_) => Err(AppError::WrongView { expected: "board" }),
        }
    }

    pub fn scene(&self) -> Scene {
        match &self.view {
            View::Directory(directory) => Scene::Directory(directory.scene()),
            View::Board(board) => Scene::Board(board.scene()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_shell() -> (Shell, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state = setup(&temp_dir.path().join("data")).await.unwrap();
        (Shell::start(state).await.unwrap(), temp_dir)
    }

    #[tokio::test]
    async fn test_setup_creates_database() {
        let (shell, temp_dir) = create_test_shell().await;

        assert!(temp_dir.path().join("data").join("corkboard.db").exists());
        assert_eq!(shell.path(), "/");
        assert!(matches!(shell.scene(), Scene::Directory(_)));
    }

    #[tokio::test]
    async fn test_navigate_between_views() {
        let (mut shell, _temp_dir) = create_test_shell().await;

        shell.navigate("/case/k1").await.unwrap();
        assert_eq!(shell.route(), &Route::board("k1"));
        assert!(shell.board_mut().is_ok());
        assert!(matches!(
            shell.directory_mut(),
            Err(AppError::WrongView { .. })
        ));

        shell.back().await.unwrap();
        assert_eq!(shell.path(), "/");
        assert!(shell.directory_mut().is_ok());
    }

    #[tokio::test]
    async fn test_unknown_path_shows_directory() {
        let (mut shell, _temp_dir) = create_test_shell().await;

        shell.navigate("/case/k1").await.unwrap();
        shell.navigate("/nowhere").await.unwrap();

        assert_eq!(shell.route(), &Route::Directory);
    }

    #[tokio::test]
    async fn test_scene_is_tagged_by_view() {
        let (mut shell, _temp_dir) = create_test_shell().await;
        shell.navigate("/case/k1").await.unwrap();

        let json = serde_json::to_value(shell.scene()).unwrap();
        assert_eq!(json["view"], "board");
        assert_eq!(json["caseId"], "k1");
        assert_eq!(json["canvasWidth"], 3000.0);
    }
}
