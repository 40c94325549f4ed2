//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::resolve_order;
use crate::infrastructure::di::ServiceContainer;
use crate::tree_traits::{count_nodes, depth, TreeNodeConvert};

pub async fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build { file, pretty }) => build(cli, file.as_deref(), *pretty).await,
        Some(Commands::Tree { file }) => tree(cli, file.as_deref()).await,
        Some(Commands::Home { file }) => home(cli, file.as_deref()).await,
        Some(Commands::Order { title, id }) => order(title, *id),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(cli),
            ConfigCommands::Path => config_path(cli),
        },
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see `navtree --help`".to_string(),
        )),
    }
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir
        .clone()
        .or_else(|| std::env::current_dir().ok())
}

fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    let dir = config_dir(cli);
    if let Some(dir) = dir.as_deref() {
        if !dir.is_dir() {
            return Err(CliError::InvalidArgs(format!(
                "config directory does not exist: {}",
                dir.display()
            )));
        }
    }
    let settings = Settings::load(dir.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

#[instrument(skip(cli))]
async fn build(cli: &Cli, file: Option<&Path>, pretty: bool) -> CliResult<()> {
    let container = container(cli)?;
    let tree = container.tree_service(file)?.build().await?;

    let json = if pretty || container.settings.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    output::info(&json);
    Ok(())
}

#[instrument(skip(cli))]
async fn tree(cli: &Cli, file: Option<&Path>) -> CliResult<()> {
    let container = container(cli)?;
    let tree = container.tree_service(file)?.build().await?;

    if tree.is_empty() {
        output::warning("no categories");
        return Ok(());
    }

    output::info(&("categories", tree.as_slice()).to_tree_string());
    output::action("categories", &count_nodes(&tree));
    output::action("depth", &depth(&tree));
    Ok(())
}

#[instrument(skip(cli))]
async fn home(cli: &Cli, file: Option<&Path>) -> CliResult<()> {
    let container = container(cli)?;
    let home = container.tree_service(file)?.home_categories().await?;

    if home.is_empty() {
        output::warning("no categories promoted to home");
        return Ok(());
    }

    output::header(&format!("Home section ({})", home.len()));
    for category in &home {
        output::home_entry(&format!("{} [{}]", category.name, category.order));
        if !category.image.is_empty() {
            output::detail(&format!("  image: {}", category.image));
        }
    }
    Ok(())
}

fn order(title: &str, id: i64) -> CliResult<()> {
    output::info(&resolve_order(title, id));
    Ok(())
}

fn config_show(cli: &Cli) -> CliResult<()> {
    let container = container(cli)?;
    let rendered = container.settings.to_toml()?;
    output::info(rendered.trim_end());
    Ok(())
}

fn config_path(cli: &Cli) -> CliResult<()> {
    let describe = |path: &Path| {
        if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not present)", path.display())
        }
    };

    match global_config_path() {
        Some(path) => output::action("global", &describe(&path)),
        None => output::action("global", "unavailable (no home directory)"),
    }
    if let Some(dir) = config_dir(cli) {
        output::action("local", &describe(&local_config_path(&dir)));
    }
    Ok(())
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
