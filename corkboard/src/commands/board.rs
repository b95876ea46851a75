//! Board commands
//!
//! Pointer gestures, connect mode, the note editor and connection hover/click.

use crate::app::Shell;
use crate::board::{EditorField, Point, Rect};
use crate::error::{AppError, Result};

pub async fn add_note(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.add_note().await?;
    Ok(())
}

pub async fn note_mouse_down(
    shell: &mut Shell,
    note_id: &str,
    client: Point,
    card: Rect,
) -> Result<()> {
    shell
        .board_mut()?
        .note_mouse_down(note_id, client, card)
        .await
}

/// Returns true when the front end should request an animation frame
pub fn mouse_move(shell: &mut Shell, client: Point, board: Rect) -> Result<bool> {
    Ok(shell.board_mut()?.mouse_move(client, board))
}

pub async fn animation_frame(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.animation_frame().await?;
    Ok(())
}

pub async fn mouse_up(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.mouse_up().await
}

pub async fn note_click(shell: &mut Shell, note_id: &str) -> Result<()> {
    shell.board_mut()?.note_click(note_id).await
}

pub fn note_double_click(shell: &mut Shell, note_id: &str) -> Result<()> {
    shell.board_mut()?.note_double_click(note_id)
}

pub fn note_image_error(shell: &mut Shell, note_id: &str) -> Result<()> {
    shell.board_mut()?.note_image_failed(note_id);
    Ok(())
}

pub fn toggle_connect_mode(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.toggle_connect_mode();
    Ok(())
}

// ===== Editor =====

pub fn editor_input(shell: &mut Shell, field: EditorField, value: String) -> Result<()> {
    shell
        .board_mut()?
        .editor_mut()
        .ok_or_else(no_editor)?
        .set_field(field, value);
    Ok(())
}

pub async fn editor_save(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.save_editor().await
}

pub fn editor_cancel(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.cancel_editor();
    Ok(())
}

pub async fn editor_delete(shell: &mut Shell) -> Result<()> {
    shell.board_mut()?.delete_from_editor().await?;
    Ok(())
}

pub fn editor_image_error(shell: &mut Shell) -> Result<()> {
    shell
        .board_mut()?
        .editor_mut()
        .ok_or_else(no_editor)?
        .image_load_failed();
    Ok(())
}

fn no_editor() -> AppError {
    AppError::InvalidInput("No note is being edited".to_string())
}

// ===== Connections =====

pub fn hover_connection(shell: &mut Shell, connection_id: &str, hovered: bool) -> Result<()> {
    shell.board_mut()?.hover_connection(connection_id, hovered);
    Ok(())
}

pub async fn click_connection(shell: &mut Shell, connection_id: &str) -> Result<()> {
    shell.board_mut()?.click_connection(connection_id).await?;
    Ok(())
}
