//! `init`: scaffold a plugin project from the starter template

use tracing::{info, warn};

use crate::commands::{
    CommandContext, CommandError, Outcome, is_valid_name, print_summary, release_label,
};
use crate::config::DEFAULT_PLUGIN_VERSION;
use crate::project::descriptor::ProjectDescriptor;
use crate::project::entry_point::{patch_entry_point, patch_env_file};
use crate::project::manifest::{BEHAVIOR_MANIFEST, PackIds, RESOURCE_MANIFEST};
use crate::project::sync::{self, ProjectFields};
use crate::prompt::input_validated;
use crate::version::triple::VersionTriple;

pub fn run(ctx: &CommandContext<'_>) -> Result<Outcome, CommandError> {
    ctx.ensure_catalog()?;
    let layout = ctx.layout;

    println!("Resolving `package.json`...");
    let template = ProjectDescriptor::parse(&ctx.store.read_to_string(&layout.package_json())?)?;
    let env_content = ctx.store.read_to_string(&layout.env_file())?;
    let entry_content = ctx.store.read_to_string(&layout.entry_point())?;

    let name = input_validated(ctx.prompter, "The name of plugin:", None, is_valid_name)?;
    let description = ctx.prompter.input("The description of plugin:", None)?;
    let version: VersionTriple = input_validated(
        ctx.prompter,
        "The version of plugin:",
        Some(DEFAULT_PLUGIN_VERSION),
        VersionTriple::is_valid,
    )?
    .parse()?;
    let release = ctx.select_release(&format!("Version of {}:", ctx.config.api_package), 0)?;

    print_summary(&[
        ("name", name.clone()),
        ("description", description.clone()),
        ("version", version.to_string()),
        ("target API", release_label(release)),
    ]);
    if !ctx.prompter.confirm("Is that OK?")? {
        println!("Info not confirmed. Please execute `stdhub-cli init` again.");
        return Ok(Outcome::Declined);
    }

    let fields = ProjectFields {
        name,
        description,
        version,
    };
    let ids = PackIds::generate();
    let (descriptor, pair) = sync::create(template, &fields, release, ctx.packages(), &ids)?;
    let package_json = descriptor.to_json_string()?;
    let behavior_manifest = pair.behavior.to_json_string(BEHAVIOR_MANIFEST)?;
    let resource_manifest = pair.resource.to_json_string(RESOURCE_MANIFEST)?;
    let name = fields.name.as_str();

    ctx.store.write(&layout.package_json(), &package_json)?;
    println!("Successfully patched `package.json`.");

    match patch_env_file(&env_content, name) {
        Some(patched) => {
            ctx.store.write(&layout.env_file(), &patched)?;
            println!("Successfully patched `.env`.");
        }
        None => warn!("No PROJECT_NAME= line in {}", layout.env_file().display()),
    }

    ctx.store.create_dir_all(&layout.behavior_pack_dir(name))?;
    ctx.store
        .write(&layout.behavior_manifest(name), &behavior_manifest)?;
    ctx.store.create_dir_all(&layout.resource_pack_dir(name))?;
    ctx.store
        .write(&layout.resource_manifest(name), &resource_manifest)?;
    println!("Successfully created `manifest.json`s.");

    match patch_entry_point(&entry_content, name) {
        Some(patched) => {
            ctx.store.write(&layout.entry_point(), &patched)?;
            println!("Successfully patched `main.ts`.");
        }
        None => warn!("No pluginName export in {}", layout.entry_point().display()),
    }

    info!(
        "Initialized {} {} targeting {}",
        name, fields.version, release.original
    );
    println!();
    println!("Initialization complete.");
    println!(
        "Remember to execute \x1b[44;37mnpm update @minecraft/server-net\x1b[0m to check for package updates."
    );
    println!(
        "Execute `\x1b[32mnpm install\x1b[0m` (or other package managers) and enjoy your journey!"
    );
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolConfig;
    use crate::project::layout::ProjectLayout;
    use crate::project::store::MockProjectStore;
    use crate::prompt::MockPrompter;
    use crate::version::catalog::{Catalog, resolve};

    fn catalog() -> Catalog {
        resolve(&["1.11.0-beta.1.21.0-stable".to_string()])
    }

    fn store_with_template() -> MockProjectStore {
        let mut store = MockProjectStore::new();
        store.expect_read_to_string().returning(|path| {
            Ok(if path.ends_with("package.json") {
                r#"{"name": "starter", "dependencies": {}}"#.to_string()
            } else {
                String::new()
            })
        });
        store
    }

    fn answering_prompter(confirmed: bool) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter.expect_input().returning(|message, default| {
            Ok(match message {
                "The name of plugin:" => "demo".to_string(),
                _ => default.unwrap_or_default(),
            })
        });
        prompter.expect_select().times(1).returning(|_, _, default| Ok(default));
        prompter
            .expect_confirm()
            .times(1)
            .returning(move |_| Ok(confirmed));
        prompter
    }

    #[test]
    fn declined_confirmation_writes_nothing() {
        let catalog = catalog();
        let config = ToolConfig::default();
        let layout = ProjectLayout::new("/project");
        let mut store = store_with_template();
        store.expect_write().never();
        store.expect_create_dir_all().never();
        let prompter = answering_prompter(false);

        let ctx = CommandContext {
            catalog: &catalog,
            config: &config,
            layout: &layout,
            store: &store,
            prompter: &prompter,
        };

        assert_eq!(run(&ctx).unwrap(), Outcome::Declined);
    }

    #[test]
    fn empty_catalog_fails_before_prompting() {
        let catalog = Catalog::default();
        let config = ToolConfig::default();
        let layout = ProjectLayout::new("/project");
        let store = MockProjectStore::new();
        let prompter = MockPrompter::new();

        let ctx = CommandContext {
            catalog: &catalog,
            config: &config,
            layout: &layout,
            store: &store,
            prompter: &prompter,
        };

        assert!(matches!(run(&ctx), Err(CommandError::EmptyCatalog(_))));
    }

    #[test]
    fn confirmed_init_skips_entry_point_files_without_markers() {
        let catalog = catalog();
        let config = ToolConfig::default();
        let layout = ProjectLayout::new("/project");
        let mut store = store_with_template();
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = written.clone();
        store.expect_write().returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });
        store.expect_create_dir_all().times(2).returning(|_| Ok(()));
        let prompter = answering_prompter(true);

        let ctx = CommandContext {
            catalog: &catalog,
            config: &config,
            layout: &layout,
            store: &store,
            prompter: &prompter,
        };

        assert_eq!(run(&ctx).unwrap(), Outcome::Completed);
        assert_eq!(
            *written.lock().unwrap(),
            vec![
                layout.package_json(),
                layout.behavior_manifest("demo"),
                layout.resource_manifest("demo"),
            ]
        );
    }
}
