use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use stdhub_cli::commands::{self, CommandContext};
use stdhub_cli::config::ToolConfig;
use stdhub_cli::project::layout::ProjectLayout;
use stdhub_cli::project::store::FsStore;
use stdhub_cli::prompt::TerminalPrompter;
use stdhub_cli::version::catalog::fetch_catalog;
use stdhub_cli::version::registries::NpmRegistry;

#[derive(Parser)]
#[command(name = "stdhub-cli")]
#[command(version, about = "Scaffold and patch Minecraft Bedrock script plugin projects")]
struct Cli {
    /// `init` to scaffold a project, `patch` to update version and target API
    command: Option<String>,

    /// Project root containing `package.json`
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// npm registry base URL (overrides `stdhub.json`)
    #[arg(long)]
    registry: Option<String>,

    /// Log filter directive, e.g. `debug` (defaults to $STDHUB_LOG or `info`)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy)]
enum Command {
    Init,
    Patch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command.as_deref() {
        Some("init") => Command::Init,
        Some("patch") => Command::Patch,
        other => {
            println!(
                "Unknown command {}. Check docs for possible commands.",
                other.unwrap_or("undefined")
            );
            return Ok(());
        }
    };

    let _guard = stdhub_cli::logging::init(cli.log_level.as_deref());

    let mut config = ToolConfig::load(&cli.project_dir)?;
    if let Some(registry) = cli.registry {
        config.registry_url = registry;
    }

    let registry = NpmRegistry::new(&config.registry_url);
    let catalog = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(fetch_catalog(&registry, &config.api_package))
        .with_context(|| format!("Failed to fetch versions of {}", config.api_package))?;

    let layout = ProjectLayout::new(cli.project_dir);
    let prompter = TerminalPrompter::stdio();
    let ctx = CommandContext {
        catalog: &catalog,
        config: &config,
        layout: &layout,
        store: &FsStore,
        prompter: &prompter,
    };

    let outcome = match command {
        Command::Init => commands::init::run(&ctx)?,
        Command::Patch => commands::patch::run(&ctx)?,
    };
    info!("Command finished: {:?}", outcome);
    Ok(())
}
