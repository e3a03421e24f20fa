//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod catalog;
pub mod init;
pub mod plan;

use std::path::PathBuf;

pub use catalog::{execute_catalog, CatalogOptions};
pub use init::{execute_init, InitOptions};
pub use plan::{execute_plan, PlanOptions};

/// Template directory from the flag, else the per-user data directory
///
/// The environment variable is folded into the flag by the argument parser.
/// Returns `None` when no candidate directory exists.
pub fn resolve_template_dir(flag: Option<PathBuf>) -> Option<PathBuf> {
    let candidate = flag.or_else(|| {
        dirs::data_dir().map(|data| data.join("claude-setup").join("templates"))
    })?;

    if candidate.is_dir() {
        Some(candidate)
    } else {
        tracing::debug!(path = %candidate.display(), "template directory not found");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flag_wins_when_it_exists() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_template_dir(Some(dir.path().to_path_buf())),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_flag_dir_resolves_to_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_template_dir(Some(dir.path().join("absent"))), None);
    }
}
