use std::path::Path;

use buildenv_core::ModelResult;
use buildenv_model::{load_environment, WireShape};
use tracing::debug;

/// Execute the render command
pub fn execute(path: &Path, pretty: bool) -> ModelResult<()> {
    println!("{}", render(path, pretty)?);
    Ok(())
}

/// Request body for the environment in a document
pub fn render(path: &Path, pretty: bool) -> ModelResult<String> {
    debug!("Rendering environment document {}", path.display());
    load_environment(path)?.request_json(pretty)
}
