//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hda_model::ReportKind;

#[derive(Parser)]
#[command(
    name = "hda",
    version,
    about = "Hospital data analysis - merge, clean and export hospital CSV exports",
    long_about = "Load the general, prenatal and sports hospital exports, reconcile their\n\
                  column names, merge them into one cleaned table and export it as a\n\
                  workbook or CSV. Optionally print the data behind the standard charts."
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

    /// Include cell values (hospital names, diagnoses) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the three exports, merge them and export the result.
    Merge(MergeArgs),

    /// List the known sources and their column renames.
    Sources,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// General hospital export.
    #[arg(long = "general", value_name = "CSV")]
    pub general: PathBuf,

    /// Prenatal hospital export.
    #[arg(long = "prenatal", value_name = "CSV")]
    pub prenatal: PathBuf,

    /// Sports hospital export.
    #[arg(long = "sports", value_name = "CSV")]
    pub sports: PathBuf,

    /// Write the merged table here (.xlsx for a workbook, anything else for CSV).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the data behind a chart. Repeat for several charts.
    #[arg(long = "report", value_enum, value_name = "KIND")]
    pub reports: Vec<ReportKindArg>,

    /// Print the first N merged rows.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// Print the merge statistics and reports as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Reject source files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Rows scanned to infer column types (default: whole file).
    #[arg(long = "infer-schema-length", value_name = "ROWS")]
    pub infer_schema_length: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportKindArg {
    Bar,
    Pie,
    Violin,
    #[value(name = "stacked_gender", alias = "stacked-gender")]
    StackedGender,
}

impl From<ReportKindArg> for ReportKind {
    fn from(arg: ReportKindArg) -> Self {
        match arg {
            ReportKindArg::Bar => ReportKind::Bar,
            ReportKindArg::Pie => ReportKind::Pie,
            ReportKindArg::Violin => ReportKind::Violin,
            ReportKindArg::StackedGender => ReportKind::StackedGender,
        }
    }
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
