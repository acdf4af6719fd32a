//! Project documents and the rules that keep them consistent
//!
//! A project is described three times: `package.json` (the descriptor) and the
//! behavior/resource pack manifests. All three are projections of one state,
//! the plugin version plus the selected API release.
//!
//! # Modules
//!
//! - [`descriptor`]: `package.json` wrapper preserving user-owned fields
//! - [`manifest`]: Behavior and resource pack manifest documents
//! - [`sync`]: Creates and patches the three documents together
//! - [`entry_point`]: Line substitution into `.env` and `src/main.ts`
//! - [`layout`]: Where each file lives under the project root
//! - [`store`]: File system access behind a mockable trait
//! - [`error`]: Error types for documents and storage

pub mod descriptor;
pub mod entry_point;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod store;
pub mod sync;
