//! Lumina admin console binary.
//!
//! Without a subcommand the console TUI starts. The `routes` and `crumbs`
//! subcommands expose the navigation catalog and breadcrumb resolution for
//! scripting and debugging without entering the terminal UI.

mod config;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use lumina_nav::{NavigationTree, breadcrumbs};
use lumina_tui::RunOptions;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = Config::load();

    match matches.subcommand() {
        None => run_tui(&matches, config).await,
        Some(("routes", sub)) => {
            init_tracing_stderr();
            run_routes(sub)
        }
        Some(("crumbs", sub)) => {
            init_tracing_stderr();
            run_crumbs(sub)
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
    }
}

fn build_cli() -> Command {
    Command::new("lumina")
        .about("Lumina image hosting admin console")
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Verbose state logging to the trace log")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("collapsed")
                .long("collapsed")
                .help("Start with the sidebar collapsed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("route")
                .long("route")
                .value_name("HREF")
                .help("Route to open with (e.g. /images/list)"),
        )
        .subcommand(
            Command::new("routes")
                .about("Print the navigation catalog in flattened order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit JSON instead of a table")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("crumbs")
                .about("Resolve the breadcrumb trail for a route")
                .arg(Arg::new("path").required(true).value_name("HREF")),
        )
}

/// Tracing to stderr for non-interactive subcommands.
fn init_tracing_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Tracing to a log file while the TUI owns the terminal.
fn init_tracing_for_tui(debug: bool) -> Result<()> {
    let default_filter = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let log_dir = dirs_next::data_dir()
        .context("no data directory available for the trace log")?
        .join("lumina");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("lumina.log"))
        .context("opening trace log")?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

async fn run_tui(matches: &ArgMatches, config: Config) -> Result<()> {
    let debug = matches.get_flag("debug");
    init_tracing_for_tui(debug)?;

    let options = RunOptions {
        initial_route: matches
            .get_one::<String>("route")
            .cloned()
            .or(config.start_route),
        start_collapsed: matches.get_flag("collapsed") || config.sidebar_collapsed,
        theme: config.theme,
        debug,
    };
    lumina_tui::run(options).await
}

fn run_routes(matches: &ArgMatches) -> Result<()> {
    let tree = NavigationTree::from_embedded_catalog()?;
    if matches.get_flag("json") {
        let items: Vec<_> = tree.flatten().collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let id_width = tree.flatten().map(|item| item.id.len()).max().unwrap_or(0);
    let href_width = tree.flatten().map(|item| item.href.len()).max().unwrap_or(0);
    for item in tree.flatten() {
        let badge = item
            .badge
            .as_deref()
            .map(|badge| format!(" [{badge}]"))
            .unwrap_or_default();
        println!(
            "{:<id_width$}  {:<href_width$}  {}{badge}",
            item.id, item.href, item.label
        );
    }
    Ok(())
}

fn run_crumbs(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("missing required path argument")?;
    let tree = NavigationTree::from_embedded_catalog()?;
    let trail = breadcrumbs(&tree, path);
    let rendered: Vec<String> = trail
        .iter()
        .map(|crumb| format!("{} ({})", crumb.label, crumb.href))
        .collect();
    println!("{}", rendered.join(" › "));
    Ok(())
}
