use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::demo::run_demo;
use crate::errors::parse_values;
use crate::report::{draw, format_values, Order, TreeReport};
use crate::BinaryTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = effective_settings(cli)?;
    output::set_color(settings.color);

    match &cli.command {
        Some(Commands::Demo) => _demo(&settings),
        Some(Commands::Build { values }) => _build(values, &settings),
        Some(Commands::Traverse { order, values }) => _traverse(*order, values),
        Some(Commands::Classify { values }) => _classify(values),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try `lotree --help`".to_string(),
        )),
    }
}

/// Loaded settings with command-line flags applied on top.
fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load()?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if cli.no_tree {
        settings.show_tree = false;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

#[instrument(skip(settings))]
fn _demo(settings: &Settings) -> CliResult<()> {
    for (n, report) in run_demo(&settings.demo_sequences) {
        match settings.format {
            OutputFormat::Toml => {
                output::info(&format!("# Tree {n}"));
                output::info(&report.to_toml()?);
            }
            OutputFormat::Text => {
                output::header(&format!("\nTree {n}"));
                print_report(&report, settings.show_tree);
            }
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _build(values: &[String], settings: &Settings) -> CliResult<()> {
    let values = parse_values(values)?;
    let report = TreeReport::from_values(&values);
    match settings.format {
        OutputFormat::Toml => output::info(&report.to_toml()?),
        OutputFormat::Text => print_report(&report, settings.show_tree),
    }
    Ok(())
}

#[instrument]
fn _traverse(order: Order, values: &[String]) -> CliResult<()> {
    let values = parse_values(values)?;
    let tree: BinaryTree<i64> = values.into_iter().collect();
    output::action(order.name(), &format_values(&tree.traverse(order)));
    Ok(())
}

#[instrument]
fn _classify(values: &[String]) -> CliResult<()> {
    let values = parse_values(values)?;
    let tree: BinaryTree<i64> = values.into_iter().collect();
    for label in tree.classify().labels() {
        output::success_detail(label);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::InvalidArgs(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn print_report(report: &TreeReport<i64>, show_tree: bool) {
    if show_tree {
        output::info(draw(&report.values).trim_end());
    }
    output::action("In-Order", &format_values(&report.inorder));
    output::action("Pre-Order", &format_values(&report.preorder));
    output::action("Post-Order", &format_values(&report.postorder));
    output::action("Level-Order", &format_values(&report.level_order));
    output::action("Height", &report.height);
    output::action("Nodes", &report.count);

    output::header("\nClassification:");
    for label in &report.labels {
        output::success_detail(label);
    }
}
