//! Case directory commands

use crate::app::Shell;
use crate::error::Result;

/// Create a case; a blank name only raises a notification
pub async fn create_case(shell: &mut Shell, name: &str) -> Result<()> {
    shell.directory_mut()?.create_case(name).await?;
    Ok(())
}

pub async fn delete_case(shell: &mut Shell, case_id: &str) -> Result<()> {
    shell.directory_mut()?.delete_case(case_id).await
}

/// Open a case's board
pub async fn open_case(shell: &mut Shell, case_id: &str) -> Result<()> {
    let route = shell.directory_mut()?.open_case(case_id);
    shell.go(route).await
}
