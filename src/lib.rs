//! Scaffolds and patches the metadata of Minecraft Bedrock script plugin projects.
//!
//! - [`version`]: registry access and the stable release catalog
//! - [`project`]: `package.json`, pack manifests and their consistency rules
//! - [`commands`]: the interactive `init` and `patch` flows
//! - [`prompt`]: terminal prompts behind a mockable trait

pub mod commands;
pub mod config;
pub mod logging;
pub mod project;
pub mod prompt;
pub mod version;
