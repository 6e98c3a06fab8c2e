//! CLI argument definitions for tabmap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabmap",
    version,
    about = "Map uploaded transaction and contact sheets to import-ready CSV",
    long_about = "Map uploaded transaction and contact sheets to import-ready CSV.\n\n\
                  Reads a CSV or spreadsheet, picks columns by 1-based position, cleans\n\
                  contact fields, removes duplicate phone numbers, and writes\n\
                  processed_file.csv or contacts_file.csv to the output directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow phone numbers, names, and emails to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a transaction sheet to processed_file.csv.
    Transactions(TransactionArgs),

    /// Clean and deduplicate a contact sheet into contacts_file.csv.
    Contacts(ContactArgs),
}

/// Options shared by both pipelines.
#[derive(Args)]
pub struct SourceArgs {
    /// Uploaded CSV or spreadsheet file.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Decoder to use: csv or excel (default: from the file extension).
    #[arg(long = "file-type", value_name = "TYPE")]
    pub file_type: Option<String>,

    /// Directory the artifact is written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "processed")]
    pub output_dir: PathBuf,

    /// Join fields with plain commas, without quoting.
    ///
    /// Produces byte-identical output to older exports. Values that contain
    /// commas or newlines will break the row structure.
    #[arg(long = "raw-output")]
    pub raw_output: bool,

    /// Print the structured response as JSON instead of a summary table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct TransactionArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Column number holding the mobile number.
    #[arg(long = "mobile", value_name = "COL")]
    pub mobile: Option<i64>,

    /// Column number holding the bill number.
    #[arg(long = "bill-number", value_name = "COL")]
    pub bill_number: Option<i64>,

    /// Column number holding the bill amount.
    #[arg(long = "bill-amount", value_name = "COL")]
    pub bill_amount: Option<i64>,

    /// Column number holding the order time.
    #[arg(long = "order-time", value_name = "COL")]
    pub order_time: Option<i64>,

    /// Column number holding points earned.
    #[arg(long = "points-earned", value_name = "COL")]
    pub points_earned: Option<i64>,

    /// Column number holding points redeemed.
    #[arg(long = "points-redeemed", value_name = "COL")]
    pub points_redeemed: Option<i64>,
}

#[derive(Args)]
pub struct ContactArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// JSON file with the column mapping (phone, name, email, birthday,
    /// anniversary, gender, points, tags). Flags override its entries.
    #[arg(long = "mapping-file", value_name = "PATH")]
    pub mapping_file: Option<PathBuf>,

    #[arg(long = "phone", value_name = "COL")]
    pub phone: Option<i64>,

    #[arg(long = "name", value_name = "COL")]
    pub name: Option<i64>,

    #[arg(long = "email", value_name = "COL")]
    pub email: Option<i64>,

    #[arg(long = "birthday", value_name = "COL")]
    pub birthday: Option<i64>,

    #[arg(long = "anniversary", value_name = "COL")]
    pub anniversary: Option<i64>,

    #[arg(long = "gender", value_name = "COL")]
    pub gender: Option<i64>,

    #[arg(long = "points", value_name = "COL")]
    pub points: Option<i64>,

    #[arg(long = "tags", value_name = "COL")]
    pub tags: Option<i64>,

    /// Country-code prefix to strip from phone numbers (repeatable).
    ///
    /// Defaults to +91, 0091, and 91.
    #[arg(long = "country-code", value_name = "CODE")]
    pub country_codes: Vec<String>,

    /// Digits left after removing a country code (0 accepts any length).
    #[arg(long = "national-length", value_name = "N", default_value_t = 10)]
    pub national_length: usize,

    /// Read ambiguous dates like 01/05/2023 as month first.
    #[arg(long = "month-first")]
    pub month_first: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
