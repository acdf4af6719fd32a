//! `init` and `patch` command handlers
//!
//! Handlers receive everything they need through [`CommandContext`]: the
//! catalog is resolved once by the caller and passed in.

pub mod init;
pub mod patch;

use thiserror::Error;

use crate::config::ToolConfig;
use crate::project::error::{StoreError, SyncError};
use crate::project::layout::ProjectLayout;
use crate::project::store::ProjectStore;
use crate::project::sync::Packages;
use crate::prompt::{PromptError, Prompter};
use crate::version::catalog::{Catalog, ReleaseDescriptor};
use crate::version::error::VersionError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("No stable releases of {0} were found in the registry")]
    EmptyCatalog(String),
}

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Files were written
    Completed,
    /// The user did not confirm; nothing was written
    Declined,
}

/// Collaborators shared by the command handlers
pub struct CommandContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a ToolConfig,
    pub layout: &'a ProjectLayout,
    pub store: &'a dyn ProjectStore,
    pub prompter: &'a dyn Prompter,
}

impl CommandContext<'_> {
    fn packages(&self) -> Packages<'_> {
        Packages {
            api: &self.config.api_package,
            data: &self.config.data_package,
        }
    }

    fn ensure_catalog(&self) -> Result<(), CommandError> {
        if self.catalog.is_empty() {
            return Err(CommandError::EmptyCatalog(self.config.api_package.clone()));
        }
        Ok(())
    }

    /// Let the user pick a release, newest first
    fn select_release(
        &self,
        message: &str,
        default: usize,
    ) -> Result<&ReleaseDescriptor, CommandError> {
        let labels: Vec<String> = self.catalog.iter().map(release_label).collect();
        let index = self.prompter.select(message, &labels, default)?;
        self.catalog
            .get(index)
            .ok_or_else(|| CommandError::EmptyCatalog(self.config.api_package.clone()))
    }
}

fn release_label(release: &ReleaseDescriptor) -> String {
    format!(
        "{} (min engine {}, {})",
        release.api_version, release.release_version, release.original
    )
}

fn print_summary(rows: &[(&str, String)]) {
    println!();
    for (label, value) in rows {
        println!("  {label:<12} {value}");
    }
    println!();
}

/// Plugin names become directory names
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
