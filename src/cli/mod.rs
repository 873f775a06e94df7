//! CLI surface for the letter register.
//!
//! Goal:
//! - Thin handlers over the registration service - no business logic here
//! - Robust parsing (aliases, boolish flags, case/dash tolerance)

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use time::Date;
use time::macros::format_description;

use crate::config::Config;
use crate::core::{Classification, LetterStatus};
use crate::service::Register;
use crate::storage::{JsonFileStore, StorageError};
use crate::{Error, Result};

mod commands;
mod render;

// =============================================================================
// Entry + global options
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "lr",
    version,
    about = "Sequential register for administrative letters",
    infer_subcommands = true,
    infer_long_args = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Machine-readable JSON output (default: false; use `--json` for scripting).
    #[arg(
        long,
        global = true,
        default_value_t = false,
        num_args = 0..=1,
        value_parser = BoolishValueParser::new()
    )]
    pub json: bool,

    /// Register file (default: config `storage.path`, then the XDG data dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Errors only.
    #[arg(
        short = 'q',
        long,
        global = true,
        default_value_t = false,
        num_args = 0..=1,
        value_parser = BoolishValueParser::new()
    )]
    pub quiet: bool,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Issue a new letter and assign its register number.
    #[command(alias = "new", alias = "add")]
    Issue(IssueArgs),

    /// Void a letter. Its number and record stay in the register.
    #[command(alias = "cancel")]
    Void {
        /// Letter id.
        id: String,
    },

    /// Permanently delete a letter record (its number stays consumed).
    #[command(alias = "rm", alias = "delete")]
    Purge {
        /// Letter id.
        id: String,
    },

    /// List letters, newest first.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Search letters by text (alias for list QUERY).
    Search(SearchArgs),

    /// Preview the next register number without reserving it.
    #[command(alias = "next")]
    Preview(PreviewArgs),

    /// Show the last issued number per series.
    Counters,

    /// Totals overview.
    Status,

    /// Export the register as interchange JSON.
    Export(ExportArgs),

    /// Import a register snapshot, replacing the current state.
    Import(ImportArgs),

    /// Wipe all letters and counters.
    Reset(ResetArgs),
}

// =============================================================================
// Per-command args
// =============================================================================

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Classification (outgoing|certificate).
    #[arg(value_parser = parse_classification)]
    pub classification: Classification,

    /// Subject line.
    #[arg(value_name = "SUBJECT")]
    pub subject: String,

    /// Letter date, YYYY-MM-DD (default: today).
    #[arg(short = 'd', long, value_parser = parse_date)]
    pub date: Option<Date>,

    /// Counterparty the letter is addressed to or issued for.
    #[arg(short = 'p', long)]
    pub party: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Classification filter.
    #[arg(short = 'c', long, value_parser = parse_classification)]
    pub classification: Option<Classification>,

    /// Year filter.
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Status filter (active|void).
    #[arg(short = 's', long, value_parser = parse_status)]
    pub status: Option<LetterStatus>,

    /// Limit results.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Optional text query (matches number, subject, party, date).
    #[arg(value_name = "QUERY", num_args = 0..)]
    pub query: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (multiple words allowed).
    #[arg(num_args = 1..)]
    pub query: Vec<String>,

    /// Limit results.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Classification (outgoing|certificate).
    #[arg(value_parser = parse_classification)]
    pub classification: Classification,

    /// Series year (default: the current year).
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Take the year from a letter date instead.
    #[arg(short = 'd', long, value_parser = parse_date, conflicts_with = "year")]
    pub date: Option<Date>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Snapshot file to import.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Required: wiping is irreversible.
    #[arg(long)]
    pub force: bool,
}

// =============================================================================
// Public API
// =============================================================================

/// Parse CLI from raw args, applying normalization for robustness.
pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw: Vec<OsString> = args.into_iter().map(|t| t.into()).collect();
    Cli::parse_from(normalize_args(raw))
}

/// Run the CLI (used by bin).
pub fn run(cli: Cli) -> Result<()> {
    let cfg = crate::config::load_or_init();
    let store = match resolve_data_path(cli.data, &cfg) {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::open_default(),
    };
    tracing::debug!("register file: {}", store.path().display());

    let mut ctx = Ctx {
        register: Register::open(Box::new(store)),
        json: cli.json,
    };

    match cli.command {
        Commands::Issue(args) => commands::issue::handle(&mut ctx, args),
        Commands::Void { id } => commands::void::handle(&mut ctx, &id),
        Commands::Purge { id } => commands::purge::handle(&mut ctx, &id),
        Commands::List(args) => commands::list::handle_list(&mut ctx, args),
        Commands::Search(args) => commands::list::handle_search(&mut ctx, args),
        Commands::Preview(args) => commands::preview::handle(&mut ctx, args),
        Commands::Counters => commands::counters::handle(&mut ctx),
        Commands::Status => commands::status::handle(&mut ctx),
        Commands::Export(args) => commands::snapshot::handle_export(&mut ctx, args),
        Commands::Import(args) => commands::snapshot::handle_import(&mut ctx, args),
        Commands::Reset(args) => commands::reset::handle(&mut ctx, args),
    }
}

// =============================================================================
// Context + helpers
// =============================================================================

pub(crate) struct Ctx {
    pub(crate) register: Register,
    pub(crate) json: bool,
}

fn resolve_data_path(flag: Option<PathBuf>, cfg: &Config) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path);
    }
    if let Ok(path) = std::env::var("LR_DATA_FILE")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    cfg.storage.path.clone()
}

pub(super) fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::Storage(StorageError::Encode { source: e }))
}

// =============================================================================
// Parsing helpers (tolerant)
// =============================================================================

fn normalize_args(mut raw: Vec<OsString>) -> Vec<OsString> {
    if raw.is_empty() {
        return raw;
    }

    let mut out = Vec::with_capacity(raw.len());
    out.push(raw.remove(0)); // program name

    for arg in raw {
        let s = arg.to_string_lossy();
        if s.starts_with("--") {
            let mut pieces = s.splitn(2, '=');
            let flag = pieces.next().unwrap_or("");
            let val = pieces.next();
            let mut canon = flag.to_lowercase().replace('_', "-");
            canon = canonical_flag(&canon).to_string();
            if let Some(v) = val {
                out.push(OsString::from(format!("{canon}={v}")));
            } else {
                out.push(OsString::from(canon));
            }
        } else {
            out.push(arg);
        }
    }
    out
}

fn canonical_flag(flag: &str) -> &str {
    match flag {
        "--cls" | "--type" => "--classification",
        "--letter-date" => "--date",
        "--out" => "--output",
        other => other,
    }
}

fn parse_classification(raw: &str) -> std::result::Result<Classification, String> {
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "outgoing" | "out" => Ok(Classification::Outgoing),
        "certificate" | "cert" | "ket" => Ok(Classification::Certificate),
        _ => Err(format!("unknown classification `{raw}`")),
    }
}

fn parse_status(raw: &str) -> std::result::Result<LetterStatus, String> {
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "active" => Ok(LetterStatus::Active),
        "void" | "voided" | "cancelled" => Ok(LetterStatus::Void),
        _ => Err(format!("unknown status `{raw}`")),
    }
}

fn parse_date(raw: &str) -> std::result::Result<Date, String> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), format)
        .map_err(|_| format!("unsupported date format: {raw:?} (use YYYY-MM-DD)"))
}
