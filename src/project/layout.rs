//! Project file locations

use std::path::PathBuf;

const BEHAVIOR_PACKS_DIR: &str = "behavior_packs";
const RESOURCE_PACKS_DIR: &str = "resource_packs";
const MANIFEST_FILE: &str = "manifest.json";

/// Paths of the files the tool reads and writes, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }

    pub fn entry_point(&self) -> PathBuf {
        self.root.join("src").join("main.ts")
    }

    pub fn behavior_pack_dir(&self, name: &str) -> PathBuf {
        self.root.join(BEHAVIOR_PACKS_DIR).join(name)
    }

    pub fn resource_pack_dir(&self, name: &str) -> PathBuf {
        self.root.join(RESOURCE_PACKS_DIR).join(name)
    }

    pub fn behavior_manifest(&self, name: &str) -> PathBuf {
        self.behavior_pack_dir(name).join(MANIFEST_FILE)
    }

    pub fn resource_manifest(&self, name: &str) -> PathBuf {
        self.resource_pack_dir(name).join(MANIFEST_FILE)
    }
}
