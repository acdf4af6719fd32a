//! Keeps `package.json` and the manifest pair consistent
//!
//! The three documents are projections of `{ plugin version, selected release }`:
//! - both manifests' `header.version`, module versions and sibling references
//!   carry the plugin version,
//! - both manifests' `min_engine_version` carry the release version,
//! - the behavior manifest declares the API module at `<api>-beta`,
//! - `package.json` pins the API package to the release's raw string and the
//!   data package to its release version.

use crate::project::descriptor::ProjectDescriptor;
use crate::project::error::SyncError;
use crate::project::manifest::{
    BEHAVIOR_MANIFEST, Manifest, ManifestPair, PackIds, RESOURCE_MANIFEST,
};
use crate::version::catalog::ReleaseDescriptor;
use crate::version::triple::VersionTriple;

/// User-entered attributes of a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub version: VersionTriple,
}

/// User-entered attributes of a patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchFields {
    pub version: VersionTriple,
    pub description: String,
}

/// Package names written into `package.json` and the behavior manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packages<'a> {
    pub api: &'a str,
    pub data: &'a str,
}

fn pin_dependencies(
    descriptor: &mut ProjectDescriptor,
    release: &ReleaseDescriptor,
    packages: Packages<'_>,
) -> Result<(), SyncError> {
    descriptor.set_dependency(packages.api, &release.original)?;
    descriptor.set_dependency(packages.data, &release.release_version.to_string())
}

/// Scaffold a project: fill the descriptor template and build both manifests
pub fn create(
    mut descriptor: ProjectDescriptor,
    fields: &ProjectFields,
    release: &ReleaseDescriptor,
    packages: Packages<'_>,
    ids: &PackIds,
) -> Result<(ProjectDescriptor, ManifestPair), SyncError> {
    descriptor.set_name(&fields.name);
    descriptor.set_description(&fields.description);
    descriptor.set_version(&fields.version.to_string());
    pin_dependencies(&mut descriptor, release, packages)?;

    let pair = ManifestPair::scaffold(fields, release, packages.api, ids);
    Ok((descriptor, pair))
}

fn patch_manifest(
    manifest: &mut Manifest,
    document: &'static str,
    sibling: &uuid::Uuid,
    fields: &PatchFields,
    release: &ReleaseDescriptor,
) -> Result<(), SyncError> {
    manifest.header.description = fields.description.clone();
    manifest.header.version = fields.version.clone();
    manifest.header.min_engine_version = release.release_version.clone();
    for module in &mut manifest.modules {
        module.version = fields.version.clone();
    }

    let reference = manifest
        .sibling_reference_mut(sibling)
        .ok_or_else(|| SyncError::MissingDependency {
            document,
            role: format!("sibling pack {sibling}"),
        })?;
    *reference = fields.version.clone();
    Ok(())
}

/// Move an existing project to a new version, release and description.
///
/// Either every document is updated or, on error, none is.
pub fn patch(
    descriptor: &mut ProjectDescriptor,
    pair: &mut ManifestPair,
    fields: &PatchFields,
    release: &ReleaseDescriptor,
    packages: Packages<'_>,
) -> Result<(), SyncError> {
    let mut next_descriptor = descriptor.clone();
    next_descriptor.set_version(&fields.version.to_string());
    next_descriptor.set_description(&fields.description);
    pin_dependencies(&mut next_descriptor, release, packages)?;

    let mut next = pair.clone();
    let behavior_id = next.behavior.header.uuid;
    let resource_id = next.resource.header.uuid;

    patch_manifest(&mut next.behavior, BEHAVIOR_MANIFEST, &resource_id, fields, release)?;
    patch_manifest(&mut next.resource, RESOURCE_MANIFEST, &behavior_id, fields, release)?;

    let api = next
        .behavior
        .api_dependency_mut(packages.api)
        .ok_or_else(|| SyncError::MissingDependency {
            document: BEHAVIOR_MANIFEST,
            role: packages.api.to_string(),
        })?;
    *api = release.pre_release_api_version();

    *pair = next;
    *descriptor = next_descriptor;
    Ok(())
}
