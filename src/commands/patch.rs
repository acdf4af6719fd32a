//! `patch`: move an existing project to a new version or target API

use tracing::info;

use crate::commands::{
    CommandContext, CommandError, Outcome, is_valid_name, print_summary, release_label,
};
use crate::project::descriptor::ProjectDescriptor;
use crate::project::error::SyncError;
use crate::project::manifest::{BEHAVIOR_MANIFEST, Manifest, ManifestPair, RESOURCE_MANIFEST};
use crate::project::sync::{self, PatchFields};
use crate::prompt::input_validated;
use crate::version::triple::VersionTriple;

pub fn run(ctx: &CommandContext<'_>) -> Result<Outcome, CommandError> {
    ctx.ensure_catalog()?;
    let layout = ctx.layout;

    println!("Reading plugin name and version from `package.json`...");
    let mut descriptor =
        ProjectDescriptor::parse(&ctx.store.read_to_string(&layout.package_json())?)?;
    let name = descriptor
        .name()
        .ok_or(SyncError::MissingField {
            document: "package.json",
            field: "name",
        })?
        .to_string();
    if !is_valid_name(&name) {
        return Err(SyncError::InvalidName {
            document: "package.json",
            name,
        }
        .into());
    }
    let behavior_path = layout.behavior_manifest(&name);
    let resource_path = layout.resource_manifest(&name);
    let mut pair = ManifestPair {
        behavior: Manifest::parse(
            BEHAVIOR_MANIFEST,
            &ctx.store.read_to_string(&behavior_path)?,
        )?,
        resource: Manifest::parse(
            RESOURCE_MANIFEST,
            &ctx.store.read_to_string(&resource_path)?,
        )?,
    };

    let version: VersionTriple = input_validated(
        ctx.prompter,
        "New version:",
        descriptor.version(),
        VersionTriple::is_valid,
    )?
    .parse()?;
    let current = descriptor
        .dependency(&ctx.config.api_package)
        .and_then(|spec| ctx.catalog.position_of_dependency(spec))
        .unwrap_or(0);
    let release = ctx.select_release("New target API version:", current)?;
    let description = ctx.prompter.input(
        "New description:",
        descriptor.description().map(str::to_string),
    )?;

    print_summary(&[
        ("version", version.to_string()),
        ("target API", release_label(release)),
        ("description", description.clone()),
    ]);
    if !ctx.prompter.confirm("Is that OK?")? {
        println!("Info not confirmed. Please execute `stdhub-cli patch` again.");
        return Ok(Outcome::Declined);
    }

    let fields = PatchFields {
        version,
        description,
    };
    sync::patch(&mut descriptor, &mut pair, &fields, release, ctx.packages())?;
    let package_json = descriptor.to_json_string()?;
    let behavior_manifest = pair.behavior.to_json_string(BEHAVIOR_MANIFEST)?;
    let resource_manifest = pair.resource.to_json_string(RESOURCE_MANIFEST)?;

    ctx.store.write(&layout.package_json(), &package_json)?;
    println!("Successfully patched `package.json`.");
    ctx.store.write(&behavior_path, &behavior_manifest)?;
    ctx.store.write(&resource_path, &resource_manifest)?;
    println!("Successfully patched `manifest.json`s.");

    info!(
        "Patched {} to {} targeting {}",
        name, fields.version, release.original
    );
    Ok(Outcome::Completed)
}
