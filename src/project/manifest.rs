//! Behavior and resource pack manifests

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::{COMPANION_MODULE_VERSION, COMPANION_MODULES, MANIFEST_FORMAT_VERSION};
use crate::project::error::SyncError;
use crate::project::sync::ProjectFields;
use crate::version::catalog::ReleaseDescriptor;
use crate::version::triple::VersionTriple;

pub const BEHAVIOR_MANIFEST: &str = "behavior manifest";
pub const RESOURCE_MANIFEST: &str = "resource manifest";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    #[serde(default)]
    pub modules: Vec<ManifestModule>,
    #[serde(default)]
    pub dependencies: Vec<ManifestDependency>,
    /// Keys the tool does not manage
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: Uuid,
    pub version: VersionTriple,
    pub min_engine_version: VersionTriple,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: Uuid,
    pub version: VersionTriple,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A manifest dependency: either a script module by name or a pack by uuid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManifestDependency {
    Module { module_name: String, version: String },
    Pack { uuid: Uuid, version: VersionTriple },
}

impl Manifest {
    /// Version of the script module dependency named `package`
    pub fn api_dependency_mut(&mut self, package: &str) -> Option<&mut String> {
        self.dependencies.iter_mut().find_map(|dep| match dep {
            ManifestDependency::Module {
                module_name,
                version,
            } if module_name == package => Some(version),
            _ => None,
        })
    }

    /// Version of the dependency referencing the sibling pack `uuid`
    pub fn sibling_reference_mut(&mut self, uuid: &Uuid) -> Option<&mut VersionTriple> {
        self.dependencies.iter_mut().find_map(|dep| match dep {
            ManifestDependency::Pack { uuid: id, version } if id == uuid => Some(version),
            _ => None,
        })
    }

    pub fn parse(document: &'static str, content: &str) -> Result<Self, SyncError> {
        serde_json::from_str(content).map_err(|source| SyncError::InvalidJson { document, source })
    }

    pub fn to_json_string(&self, document: &'static str) -> Result<String, SyncError> {
        let mut out = serde_json::to_string_pretty(self)
            .map_err(|source| SyncError::Serialize { document, source })?;
        out.push('\n');
        Ok(out)
    }
}

/// Identifiers generated once per project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackIds {
    pub behavior_pack: Uuid,
    pub script_module: Uuid,
    pub resource_pack: Uuid,
    pub resource_module: Uuid,
}

impl PackIds {
    pub fn generate() -> Self {
        Self {
            behavior_pack: Uuid::new_v4(),
            script_module: Uuid::new_v4(),
            resource_pack: Uuid::new_v4(),
            resource_module: Uuid::new_v4(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManifestPair {
    pub behavior: Manifest,
    pub resource: Manifest,
}

impl ManifestPair {
    /// Build fresh manifests for a new project
    pub fn scaffold(
        fields: &ProjectFields,
        release: &ReleaseDescriptor,
        api_package: &str,
        ids: &PackIds,
    ) -> Self {
        let version = &fields.version;
        let min_engine_version = &release.release_version;

        let mut behavior_dependencies = vec![ManifestDependency::Module {
            module_name: api_package.to_string(),
            version: release.pre_release_api_version(),
        }];
        behavior_dependencies.extend(COMPANION_MODULES.iter().map(|module_name| {
            ManifestDependency::Module {
                module_name: module_name.to_string(),
                version: COMPANION_MODULE_VERSION.to_string(),
            }
        }));
        behavior_dependencies.push(ManifestDependency::Pack {
            uuid: ids.resource_pack,
            version: version.clone(),
        });

        let behavior = Manifest {
            format_version: MANIFEST_FORMAT_VERSION,
            header: ManifestHeader {
                name: format!("{}-BP", fields.name),
                description: fields.description.clone(),
                uuid: ids.behavior_pack,
                version: version.clone(),
                min_engine_version: min_engine_version.clone(),
                extra: Map::new(),
            },
            modules: vec![ManifestModule {
                description: "Script resources".to_string(),
                language: Some("javascript".to_string()),
                kind: "script".to_string(),
                uuid: ids.script_module,
                version: version.clone(),
                entry: Some("scripts/main.js".to_string()),
                extra: Map::new(),
            }],
            dependencies: behavior_dependencies,
            extra: Map::new(),
        };

        let resource = Manifest {
            format_version: MANIFEST_FORMAT_VERSION,
            header: ManifestHeader {
                name: format!("{}-RP", fields.name),
                description: format!("Resource pack for plugin {}", fields.name),
                uuid: ids.resource_pack,
                version: version.clone(),
                min_engine_version: min_engine_version.clone(),
                extra: Map::new(),
            },
            modules: vec![ManifestModule {
                description: "Resource Pack".to_string(),
                language: None,
                kind: "resources".to_string(),
                uuid: ids.resource_module,
                version: version.clone(),
                entry: None,
                extra: Map::new(),
            }],
            dependencies: vec![ManifestDependency::Pack {
                uuid: ids.behavior_pack,
                version: version.clone(),
            }],
            extra: Map::new(),
        };

        Self { behavior, resource }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn release() -> ReleaseDescriptor {
        ReleaseDescriptor {
            original: "1.11.0-beta.1.21.0-stable".to_string(),
            api_version: VersionTriple::new(1, 11, 0),
            release_version: VersionTriple::new(1, 21, 0),
        }
    }

    fn fields() -> ProjectFields {
        ProjectFields {
            name: "demo".to_string(),
            description: "A demo plugin".to_string(),
            version: VersionTriple::new(0, 1, 0),
        }
    }

    #[test]
    fn scaffold_produces_expected_behavior_manifest() {
        let ids = PackIds::generate();
        let pair = ManifestPair::scaffold(&fields(), &release(), "@minecraft/server", &ids);

        let value = serde_json::to_value(&pair.behavior).unwrap();
        assert_eq!(
            value,
            json!({
                "format_version": 2,
                "header": {
                    "name": "demo-BP",
                    "description": "A demo plugin",
                    "uuid": ids.behavior_pack.to_string(),
                    "version": [0, 1, 0],
                    "min_engine_version": [1, 21, 0]
                },
                "modules": [{
                    "description": "Script resources",
                    "language": "javascript",
                    "type": "script",
                    "uuid": ids.script_module.to_string(),
                    "version": [0, 1, 0],
                    "entry": "scripts/main.js"
                }],
                "dependencies": [
                    { "module_name": "@minecraft/server", "version": "1.11.0-beta" },
                    { "module_name": "@minecraft/server-net", "version": "1.0.0-beta" },
                    { "module_name": "@minecraft/server-admin", "version": "1.0.0-beta" },
                    { "uuid": ids.resource_pack.to_string(), "version": [0, 1, 0] }
                ]
            })
        );
    }

    #[test]
    fn scaffold_links_resource_manifest_back_to_behavior_pack() {
        let ids = PackIds::generate();
        let pair = ManifestPair::scaffold(&fields(), &release(), "@minecraft/server", &ids);

        assert_eq!(pair.resource.header.name, "demo-RP");
        assert_eq!(pair.resource.header.description, "Resource pack for plugin demo");
        assert_eq!(pair.resource.modules[0].kind, "resources");
        assert_eq!(
            pair.resource.dependencies,
            vec![ManifestDependency::Pack {
                uuid: ids.behavior_pack,
                version: VersionTriple::new(0, 1, 0),
            }]
        );
    }

    #[test]
    fn generate_yields_distinct_identifiers() {
        let ids = PackIds::generate();
        let all = [
            ids.behavior_pack,
            ids.script_module,
            ids.resource_pack,
            ids.resource_module,
        ];

        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parse_keeps_unmanaged_keys() {
        let content = r#"{
            "format_version": 2,
            "header": {
                "name": "demo-BP",
                "description": "d",
                "uuid": "0b6f0c50-5a3d-4d0e-9d6b-6f7b0b1f2a3c",
                "version": [0, 1, 0],
                "min_engine_version": [1, 21, 0],
                "pack_scope": "world"
            },
            "modules": [],
            "dependencies": [],
            "metadata": { "authors": ["someone"] }
        }"#;

        let manifest = Manifest::parse("manifest.json", content).unwrap();
        let value: Value =
            serde_json::from_str(&manifest.to_json_string("manifest.json").unwrap()).unwrap();

        assert_eq!(value["header"]["pack_scope"], "world");
        assert_eq!(value["metadata"]["authors"][0], "someone");
    }

    #[test]
    fn to_json_string_reports_versions_a_manifest_cannot_hold() {
        let ids = PackIds::generate();
        let mut pair = ManifestPair::scaffold(&fields(), &release(), "@minecraft/server", &ids);
        pair.resource.header.min_engine_version = "1.0.18446744073709551616".parse().unwrap();

        assert!(matches!(
            pair.resource.to_json_string(RESOURCE_MANIFEST),
            Err(SyncError::Serialize {
                document: RESOURCE_MANIFEST,
                ..
            })
        ));
        assert!(pair.behavior.to_json_string(BEHAVIOR_MANIFEST).is_ok());
    }

    #[test]
    fn role_lookups_find_entries_regardless_of_position() {
        let ids = PackIds::generate();
        let mut pair = ManifestPair::scaffold(&fields(), &release(), "@minecraft/server", &ids);
        pair.behavior.dependencies.reverse();

        assert_eq!(
            pair.behavior
                .api_dependency_mut("@minecraft/server")
                .cloned(),
            Some("1.11.0-beta".to_string())
        );
        assert!(pair.behavior.sibling_reference_mut(&ids.resource_pack).is_some());
        assert!(pair.behavior.sibling_reference_mut(&ids.behavior_pack).is_none());
        assert!(pair.resource.api_dependency_mut("@minecraft/server").is_none());
    }
}
