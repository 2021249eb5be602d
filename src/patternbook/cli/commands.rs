//! # CLI Layer
//!
//! Responsibilities, in order:
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Logging Setup**: a `tracing-subscriber` fmt layer on stderr
//! 3. **Context Setup**: a `CatalogApi` loaded from the config directory
//! 4. **API Dispatch**: call the matching `CatalogApi` method
//! 5. **Output**: hand the `CmdResult` values to `render`
//!
//! CLI tests exercise argument parsing (`setup.rs`) and the binary end to end
//! (`tests/`); pattern behavior is tested in the command layer.

use super::render::{print_entries, print_json, print_messages, print_results, print_settings};
use super::setup::{Cli, Commands};
use clap::Parser;
use patternbook::api::{CatalogApi, ConfigAction};
use patternbook::catalog::{Family, PatternId};
use patternbook::config;
use patternbook::error::Result;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CatalogApi,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_run_all(&ctx),
        Some(Commands::List { family }) => handle_list(&ctx, family),
        Some(Commands::Run { patterns }) => handle_run(&ctx, patterns),
        Some(Commands::Show { pattern }) => handle_show(&ctx, pattern),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when run from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config::config_dir()?;
    tracing::debug!(config_dir = %dir.display(), "loading config");
    let api = CatalogApi::from_config_dir(dir)?;

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn handle_run_all(ctx: &AppContext) -> Result<()> {
    let results = ctx.api.run_all()?;
    if ctx.json {
        return print_json(&results);
    }
    print_results(&results);
    Ok(())
}

fn handle_run(ctx: &AppContext, patterns: Vec<String>) -> Result<()> {
    // Parse everything first so a typo fails before any demonstration runs
    let ids = patterns
        .iter()
        .map(|p| p.parse::<PatternId>())
        .collect::<Result<Vec<_>>>()?;

    let results = ctx.api.run_patterns(&ids)?;
    if ctx.json {
        return print_json(&results);
    }
    print_results(&results);
    Ok(())
}

fn handle_list(ctx: &AppContext, family: Option<String>) -> Result<()> {
    let family = family.map(|f| f.parse::<Family>()).transpose()?;
    let result = ctx.api.list_patterns(family);
    if ctx.json {
        return print_json(&result.entries);
    }
    print_entries(&result.entries);
    Ok(())
}

fn handle_show(ctx: &AppContext, pattern: String) -> Result<()> {
    let id: PatternId = pattern.parse()?;
    let result = ctx.api.show_pattern(id);
    if ctx.json {
        return print_json(&result);
    }
    print_entries(&result.entries);
    println!();
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if ctx.json {
        return print_json(&result);
    }
    print_settings(&result.settings);
    print_messages(&result.messages);
    Ok(())
}
