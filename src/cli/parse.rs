use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "adaptive-buckets",
    about = "Plan nice heatmap buckets and rebucket aggregated counts"
)]
pub struct Cli {
    /// TOML file with `[time]` / `[value]` bucket budgets
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit timing diagnostics and debug logs
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plan time buckets for a window
    Time(TimeArgs),
    /// Plan value buckets for a range
    Value(ValueArgs),
    /// Lay out a heatmap CSV
    Heatmap(HeatmapArgs),
    /// Print example invocations
    Examples,
}

/// Output switches shared by every planning command.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// `adaptive-buckets time …`
#[derive(Parser, Debug)]
pub struct TimeArgs {
    /// Window start, epoch milliseconds
    #[arg(long, allow_negative_numbers = true)]
    pub start: i64,
    /// Window end, epoch milliseconds
    #[arg(long, allow_negative_numbers = true)]
    pub end: i64,
    /// Available width in pixels (terminal width if omitted)
    #[arg(long)]
    pub width: Option<f64>,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// `adaptive-buckets value …`
#[derive(Parser, Debug)]
pub struct ValueArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub min: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub max: f64,
    /// Available height in pixels (terminal height if omitted)
    #[arg(long)]
    pub height: Option<f64>,
    /// Ten buckets per decade instead of linear nice buckets
    #[arg(long)]
    pub log: bool,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// `adaptive-buckets heatmap …`
#[derive(Parser, Debug)]
pub struct HeatmapArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Panel width in pixels (terminal width if omitted)
    #[arg(long)]
    pub width: Option<f64>,
    /// Panel height in pixels (terminal height if omitted)
    #[arg(long)]
    pub height: Option<f64>,

    /// Window start (first timestamp if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,
    /// Window end (last timestamp if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Log-scale value axis
    #[arg(long)]
    pub log: bool,
    /// Keep the file's own value buckets
    #[arg(long, conflicts_with = "log")]
    pub explicit: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}
