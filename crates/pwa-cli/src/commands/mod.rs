pub mod detect;
pub mod init;
pub mod instructions;
pub mod meta;
pub mod update;

use pwa_config::find_project_root;
use std::path::PathBuf;

use crate::errors::CliError;
use crate::GlobalOpts;

/// Project root for the current invocation
pub(crate) fn project_root(opts: &GlobalOpts) -> Result<PathBuf, CliError> {
    let root = find_project_root(&opts.start_dir())?;
    crate::logger::debug(&format!("Using project root {}", root.display()));
    Ok(root)
}
