//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::Path;

use async_trait::async_trait;
use tempfile::TempDir;

use stdhub_cli::prompt::{PromptError, Prompter};
use stdhub_cli::version::error::RegistryError;
use stdhub_cli::version::registry::Registry;
use stdhub_cli::version::types::PackageVersions;

/// Registry answering from a fixed table
pub struct StaticRegistry {
    versions: HashMap<String, Vec<String>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self {
            versions: HashMap::new(),
        }
    }

    pub fn with_versions(mut self, package: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl Registry for StaticRegistry {
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError> {
        match self.versions.get(package_name) {
            Some(versions) => Ok(PackageVersions::new(versions.clone())),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}

/// One scripted answer
pub enum Answer {
    /// Text; an empty string takes the prompt's default
    Text(&'static str),
    /// Index into the offered options
    Choice(usize),
    /// Keep the select prompt's default
    DefaultChoice,
    Confirm(bool),
}

/// Prompter replaying answers in order and recording select defaults
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub select_defaults: RefCell<Vec<usize>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            select_defaults: RefCell::new(Vec::new()),
        }
    }

    fn next(&self, message: &str) -> Answer {
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for {message:?}"))
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str, default: Option<String>) -> Result<String, PromptError> {
        match self.next(message) {
            Answer::Text("") => Ok(default.unwrap_or_default()),
            Answer::Text(text) => Ok(text.to_string()),
            _ => panic!("expected a text answer for {message:?}"),
        }
    }

    fn select(
        &self,
        message: &str,
        _options: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        self.select_defaults.borrow_mut().push(default);
        match self.next(message) {
            Answer::Choice(index) => Ok(index),
            Answer::DefaultChoice => Ok(default),
            _ => panic!("expected a choice for {message:?}"),
        }
    }

    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        match self.next(message) {
            Answer::Confirm(ok) => Ok(ok),
            _ => panic!("expected a confirmation for {message:?}"),
        }
    }
}

pub const STARTER_PACKAGE_JSON: &str = r#"{
  "name": "scripting-starter",
  "version": "0.1.0",
  "productName": "Minecraft TypeScript Starter Project",
  "description": "Minecraft TypeScript Starter Project",
  "private": true,
  "scripts": {
    "build": "just-scripts build"
  },
  "dependencies": {
    "@minecraft/math": "^1.1.0",
    "@minecraft/server": "^1.8.0",
    "@minecraft/server-ui": "^1.1.0",
    "@minecraft/vanilla-data": "^1.20.60"
  }
}
"#;

pub const STARTER_ENV: &str = "MINECRAFT_PRODUCT=BedrockUWP\nPROJECT_NAME=\"starter\"\n";

pub const STARTER_MAIN_TS: &str = "import { world } from '@minecraft/server';\n\nexport const pluginName = 'starter';\n\nworld.afterEvents.worldInitialize.subscribe(() => {});\n";

/// A temp directory laid out like the TypeScript starter project
pub fn starter_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "package.json", STARTER_PACKAGE_JSON);
    write(dir.path(), ".env", STARTER_ENV);
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    write(dir.path(), "src/main.ts", STARTER_MAIN_TS);
    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    std::fs::write(root.join(relative), content).unwrap();
}

pub fn read_json(root: &Path, relative: &str) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(root.join(relative)).unwrap()).unwrap()
}

/// Published versions of `@minecraft/server`, newest first
pub fn server_versions() -> Vec<&'static str> {
    vec![
        "1.12.0-beta.1.21.10-preview.20",
        "1.11.0",
        "1.11.0-beta.1.21.2-stable",
        "1.11.0-beta.1.21.0-stable",
        "1.11.0-beta.1.21.0-preview.25",
        "1.10.0",
        "1.10.0-beta.1.20.80-stable",
        "1.9.0-beta.1.20.70-stable",
        "1.9.0-beta.1.20.70-preview.22",
    ]
}
