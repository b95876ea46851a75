//! Host command surface
//!
//! The front end sends one JSON invocation per event and receives the
//! scene of the active view back, along with any notifications raised
//! while handling it. Submodules hold the handlers:
//! - `cases`: case directory operations
//! - `board`: gestures, connect mode, editor and connections

pub mod board;
pub mod cases;

use crate::app::{Scene, Shell};
use crate::board::{EditorField, Point, Rect};
use crate::error::Result;
use crate::ui::Toast;
use serde::{Deserialize, Serialize};

/// One request from the front end
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invocation {
    pub id: u64,
    /// Answer to any confirmation prompt raised by this command
    #[serde(default)]
    pub confirm: bool,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Navigate {
        path: String,
    },
    Render,
    CreateCase {
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    DeleteCase {
        case_id: String,
    },
    #[serde(rename_all = "camelCase")]
    OpenCase {
        case_id: String,
    },
    Back,
    AddNote,
    #[serde(rename_all = "camelCase")]
    NoteMouseDown {
        note_id: String,
        client: Point,
        card: Rect,
    },
    MouseMove {
        client: Point,
        board: Rect,
    },
    AnimationFrame,
    MouseUp,
    #[serde(rename_all = "camelCase")]
    NoteClick {
        note_id: String,
    },
    #[serde(rename_all = "camelCase")]
    NoteDoubleClick {
        note_id: String,
    },
    #[serde(rename_all = "camelCase")]
    NoteImageError {
        note_id: String,
    },
    ToggleConnectMode,
    EditorInput {
        field: EditorField,
        value: String,
    },
    EditorSave,
    EditorCancel,
    EditorDelete,
    EditorImageError,
    #[serde(rename_all = "camelCase")]
    HoverConnection {
        connection_id: String,
        hovered: bool,
    },
    #[serde(rename_all = "camelCase")]
    ClickConnection {
        connection_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: Option<u64>,
    pub ok: bool,
    pub path: String,
    pub result: Option<Scene>,
    pub error: Option<String>,
    pub toasts: Vec<Toast>,
    pub request_frame: bool,
}

/// Parse and run one line of host input
pub async fn handle_line(shell: &mut Shell, line: &str) -> Response {
    match serde_json::from_str::<Invocation>(line) {
        Ok(invocation) => dispatch(shell, invocation).await,
        Err(e) => {
            tracing::warn!("Rejected malformed invocation: {}", e);
            let id = serde_json::from_str::<serde_json::Value>(line)
                .ok()
                .and_then(|value| value.get("id").and_then(serde_json::Value::as_u64));

            Response {
                id,
                ok: false,
                path: shell.path(),
                result: None,
                error: Some(format!("Invalid invocation: {}", e)),
                toasts: Vec::new(),
                request_frame: false,
            }
        }
    }
}

/// Run one invocation against the shell
pub async fn dispatch(shell: &mut Shell, invocation: Invocation) -> Response {
    let Invocation {
        id,
        confirm,
        command,
    } = invocation;

    shell.state().confirm.preset(confirm);
    let outcome = execute(shell, command).await;
    // An unasked answer must not carry over to the next command
    shell.state().confirm.preset(false);

    let toasts = shell.state().toasts.drain();
    let path = shell.path();

    match outcome {
        Ok(request_frame) => Response {
            id: Some(id),
            ok: true,
            path,
            result: Some(shell.scene()),
            error: None,
            toasts,
            request_frame,
        },
        Err(e) => {
            tracing::warn!("Command {} failed: {}", id, e);
            Response {
                id: Some(id),
                ok: false,
                path,
                result: None,
                error: Some(e.to_string()),
                toasts,
                request_frame: false,
            }
        }
    }
}

/// Returns whether an animation frame should be requested
async fn execute(shell: &mut Shell, command: Command) -> Result<bool> {
    tracing::trace!("Executing {:?}", command);

    match command {
        Command::Navigate { path } => shell.navigate(&path).await?,
        Command::Render => {}
        Command::CreateCase { name } => cases::create_case(shell, &name).await?,
        Command::DeleteCase { case_id } => cases::delete_case(shell, &case_id).await?,
        Command::OpenCase { case_id } => cases::open_case(shell, &case_id).await?,
        Command::Back => shell.back().await?,
        Command::AddNote => board::add_note(shell).await?,
        Command::NoteMouseDown {
            note_id,
            client,
            card,
        } => board::note_mouse_down(shell, &note_id, client, card).await?,
        Command::MouseMove {
            client,
            board: board_rect,
        } => return board::mouse_move(shell, client, board_rect),
        Command::AnimationFrame => board::animation_frame(shell).await?,
        Command::MouseUp => board::mouse_up(shell).await?,
        Command::NoteClick { note_id } => board::note_click(shell, &note_id).await?,
        Command::NoteDoubleClick { note_id } => board::note_double_click(shell, &note_id)?,
        Command::NoteImageError { note_id } => board::note_image_error(shell, &note_id)?,
        Command::ToggleConnectMode => board::toggle_connect_mode(shell)?,
        Command::EditorInput { field, value } => board::editor_input(shell, field, value)?,
        Command::EditorSave => board::editor_save(shell).await?,
        Command::EditorCancel => board::editor_cancel(shell)?,
        Command::EditorDelete => board::editor_delete(shell).await?,
        Command::EditorImageError => board::editor_image_error(shell)?,
        Command::HoverConnection {
            connection_id,
            hovered,
        } => board::hover_connection(shell, &connection_id, hovered)?,
        Command::ClickConnection { connection_id } => {
            board::click_connection(shell, &connection_id).await?
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::setup;
    use serde_json::json;
    use tempfile::TempDir;

    async fn create_test_shell() -> (Shell, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state = setup(temp_dir.path()).await.unwrap();
        (Shell::start(state).await.unwrap(), temp_dir)
    }

    async fn send(shell: &mut Shell, value: serde_json::Value) -> Response {
        handle_line(shell, &value.to_string()).await
    }

    #[test]
    fn test_parse_invocation() {
        let invocation: Invocation = serde_json::from_value(json!({
            "id": 7,
            "command": {
                "cmd": "note_mouse_down",
                "noteId": "n1",
                "client": {"x": 10.0, "y": 20.0},
                "card": {"left": 5.0, "top": 6.0, "width": 200.0, "height": 200.0}
            }
        }))
        .unwrap();

        assert_eq!(invocation.id, 7);
        assert!(!invocation.confirm);
        assert_eq!(
            invocation.command,
            Command::NoteMouseDown {
                note_id: "n1".to_string(),
                client: Point::new(10.0, 20.0),
                card: Rect::new(5.0, 6.0, 200.0, 200.0),
            }
        );
    }

    #[test]
    fn test_parse_editor_input() {
        let command: Command = serde_json::from_value(json!({
            "cmd": "editor_input", "field": "fileName", "value": "report.pdf"
        }))
        .unwrap();

        assert_eq!(
            command,
            Command::EditorInput {
                field: EditorField::FileName,
                value: "report.pdf".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_render_returns_directory_scene() {
        let (mut shell, _temp_dir) = create_test_shell().await;

        let response = send(&mut shell, json!({"id": 1, "command": {"cmd": "render"}})).await;

        assert!(response.ok);
        assert_eq!(response.id, Some(1));
        assert_eq!(response.path, "/");
        assert!(matches!(response.result, Some(Scene::Directory(_))));
    }

    #[tokio::test]
    async fn test_create_and_open_case() {
        let (mut shell, _temp_dir) = create_test_shell().await;

        let response = send(
            &mut shell,
            json!({"id": 1, "command": {"cmd": "create_case", "name": "Heist"}}),
        )
        .await;
        assert_eq!(response.toasts[0].title, "Success");
        let Some(Scene::Directory(scene)) = response.result else {
            panic!("expected directory scene");
        };
        let case_id = scene.cases[0].id.clone();

        let response = send(
            &mut shell,
            json!({"id": 2, "command": {"cmd": "open_case", "caseId": case_id}}),
        )
        .await;

        assert!(response.ok);
        assert_eq!(response.path, format!("/case/{}", case_id));
        let Some(Scene::Board(board)) = response.result else {
            panic!("expected board scene");
        };
        assert_eq!(board.title, "Heist");
    }

    #[tokio::test]
    async fn test_board_command_on_directory_fails() {
        let (mut shell, _temp_dir) = create_test_shell().await;

        let response = send(&mut shell, json!({"id": 3, "command": {"cmd": "add_note"}})).await;

        assert!(!response.ok);
        assert_eq!(response.result, None);
        assert_eq!(
            response.error.as_deref(),
            Some("Command requires the board view")
        );
    }

    #[tokio::test]
    async fn test_malformed_line_echoes_id() {
        let (mut shell, _temp_dir) = create_test_shell().await;

        let response = handle_line(&mut shell, r#"{"id": 9, "command": {"cmd": "fly"}}"#).await;
        assert!(!response.ok);
        assert_eq!(response.id, Some(9));

        let response = handle_line(&mut shell, "not json").await;
        assert_eq!(response.id, None);
    }

    #[tokio::test]
    async fn test_confirm_applies_to_one_command() {
        let (mut shell, _temp_dir) = create_test_shell().await;
        send(&mut shell, json!({"id": 1, "command": {"cmd": "navigate", "path": "/case/k"}})).await;
        send(&mut shell, json!({"id": 2, "command": {"cmd": "add_note"}})).await;

        // Confirmation given to an unrelated command is not reused
        send(
            &mut shell,
            json!({"id": 3, "confirm": true, "command": {"cmd": "render"}}),
        )
        .await;
        let response = send(&mut shell, json!({"id": 4, "command": {"cmd": "editor_delete"}})).await;
        let Some(Scene::Board(board)) = response.result else {
            panic!("expected board scene");
        };
        assert_eq!(board.notes.len(), 1);

        let response = send(
            &mut shell,
            json!({"id": 5, "confirm": true, "command": {"cmd": "editor_delete"}}),
        )
        .await;
        let Some(Scene::Board(board)) = response.result else {
            panic!("expected board scene");
        };
        assert!(board.notes.is_empty());
    }

    #[tokio::test]
    async fn test_mouse_move_requests_frame() {
        let (mut shell, _temp_dir) = create_test_shell().await;
        send(&mut shell, json!({"id": 1, "command": {"cmd": "navigate", "path": "/case/k"}})).await;
        send(&mut shell, json!({"id": 2, "command": {"cmd": "add_note"}})).await;
        send(&mut shell, json!({"id": 3, "command": {"cmd": "editor_cancel"}})).await;

        let response = send(&mut shell, json!({"id": 4, "command": {"cmd": "render"}})).await;
        let Some(Scene::Board(board)) = response.result else {
            panic!("expected board scene");
        };
        let note_id = board.notes[0].id.clone();

        send(
            &mut shell,
            json!({"id": 5, "command": {
                "cmd": "note_mouse_down",
                "noteId": note_id,
                "client": {"x": 120.0, "y": 120.0},
                "card": {"left": 100.0, "top": 100.0}
            }}),
        )
        .await;
        let board_rect = json!({"left": 0.0, "top": 0.0});
        let first = send(
            &mut shell,
            json!({"id": 6, "command": {"cmd": "mouse_move", "client": {"x": 220.0, "y": 220.0}, "board": board_rect}}),
        )
        .await;
        let second = send(
            &mut shell,
            json!({"id": 7, "command": {"cmd": "mouse_move", "client": {"x": 230.0, "y": 230.0}, "board": board_rect}}),
        )
        .await;

        assert!(first.request_frame);
        assert!(!second.request_frame);

        let response = send(&mut shell, json!({"id": 8, "command": {"cmd": "animation_frame"}})).await;
        let Some(Scene::Board(board)) = response.result else {
            panic!("expected board scene");
        };
        assert_eq!((board.notes[0].left, board.notes[0].top), (210.0, 210.0));
    }
}
