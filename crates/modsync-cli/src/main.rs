//! CLI entry point for modsync.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `modsync-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use modsync_app::{
    build_report, format_explanation, format_not_found, parse_inventory_json, render_report,
    run_explain, verdict_exit_code, ExplainOutput, Gatekeeper, OutputFormat, StartInput,
    StartOutput,
};
use modsync_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "modsync",
    version,
    about = "Mod-list policy gate for multiplayer servers"
)]
struct Cli {
    /// Config directory (holds modsync.toml and ModSyncLists/).
    #[arg(long, default_value = ".")]
    config_dir: Utf8PathBuf,

    /// Path to the settings TOML. Defaults to modsync.toml inside the config directory.
    #[arg(long)]
    settings: Option<Utf8PathBuf>,

    /// Override profile (default|open|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Override: accept peers reporting no mods.
    #[arg(long)]
    allow_vanilla: Option<bool>,

    /// Override: accept peers reporting any mods.
    #[arg(long)]
    allow_modded: Option<bool>,

    /// Override: enforce RequiredMods.txt.
    #[arg(long)]
    enforce_required: Option<bool>,

    /// Override: enforce BannedMods.txt.
    #[arg(long)]
    enforce_banned: Option<bool>,

    /// Override: enforce ApprovedMods.txt.
    #[arg(long)]
    enforce_approved: Option<bool>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or repair the rule lists and report what was loaded.
    Sync,

    /// Judge one peer inventory against the policy.
    Check {
        /// Inventory JSON: {"mods": [{"id": "...", "version": "1.2.3"}]}.
        #[arg(long)]
        inventory: Utf8PathBuf,

        /// Output format (text, json, or md).
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the JSON schema for modsync.toml.
    Schema,

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "mods.banned") or code (e.g., "banned_mod") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    match &cli.cmd {
        Commands::Sync => {
            exit_on_error(cmd_sync(&cli));
            Ok(())
        }
        Commands::Check { inventory, format } => {
            let code = exit_on_error(cmd_check(&cli, inventory, format));
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Schema => {
            println!("{}", exit_on_error(modsync_settings::settings_json_schema()));
            Ok(())
        }
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn exit_on_error<T>(result: anyhow::Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("modsync error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        allow_vanilla: cli.allow_vanilla,
        allow_modded: cli.allow_modded,
        enforce_required: cli.enforce_required,
        enforce_banned: cli.enforce_banned,
        enforce_approved: cli.enforce_approved,
    }
}

/// Missing settings file is allowed (defaults apply); unreadable is not.
fn read_settings(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no settings file, using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read settings: {path}")),
    }
}

fn start(cli: &Cli) -> anyhow::Result<StartOutput> {
    if !cli.config_dir.is_dir() {
        anyhow::bail!("config directory does not exist: {}", cli.config_dir);
    }
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| cli.config_dir.join(modsync_settings::SETTINGS_FILE_NAME));
    let settings_text = read_settings(&settings_path)?;

    Gatekeeper::start(StartInput {
        config_dir: &cli.config_dir,
        settings_text: &settings_text,
        overrides: overrides(cli),
    })
}

fn cmd_sync(cli: &Cli) -> anyhow::Result<()> {
    let out = start(cli)?;
    println!("profile: {}", out.settings.profile);
    for list in out.lists.iter() {
        println!(
            "{} mods list: {} ({} rule(s), {} row(s) stored) {}",
            list.kind,
            list.action.as_str(),
            list.entries.len(),
            list.stored_rows,
            list.path
        );
        for diag in &list.diagnostics {
            println!("  {diag}");
        }
    }
    Ok(())
}

fn cmd_check(cli: &Cli, inventory_path: &Utf8Path, format: &str) -> anyhow::Result<i32> {
    let format: OutputFormat = format.parse()?;
    let text = std::fs::read_to_string(inventory_path)
        .with_context(|| format!("read inventory: {inventory_path}"))?;
    let inventory = parse_inventory_json(&text)?;

    let StartOutput { gatekeeper, .. } = start(cli)?;
    let decision = gatekeeper.evaluate(&inventory);
    let report = build_report(&decision, &inventory, &gatekeeper.policy().toggles);

    print!("{}", render_report(&report, format)?);
    Ok(verdict_exit_code(report.verdict))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
