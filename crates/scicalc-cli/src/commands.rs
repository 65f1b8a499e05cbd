//! CLI command definitions using clap

use crate::config::{ColorChoice, HistoryOrder};
use clap::{Parser, Subcommand, ValueEnum};
use scicalc::core::AngleMode;
use std::path::PathBuf;

/// scicalc: scientific calculator driven by keypad tokens
#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "SCICALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start in this angle mode instead of the configured one
    #[arg(long, global = true)]
    pub angle: Option<AngleArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate keypad tokens given on the command line
    ///
    /// Example: scicalc eval 2 + 3 x 4 =
    Eval(EvalArgs),

    /// Evaluate keypad tokens from a script file (`#` starts a comment)
    Run(RunArgs),

    /// Interactive session reading tokens from stdin
    Repl(ReplArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keypad tokens, e.g. `1.5 + 2 =` or `90 sin`
    #[arg(required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the history
    #[arg(long)]
    pub history: bool,

    /// History print order (overrides config)
    #[arg(long)]
    pub order: Option<OrderArg>,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script file with whitespace-separated tokens
    pub script: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the history
    #[arg(long)]
    pub history: bool,

    /// History print order (overrides config)
    #[arg(long)]
    pub order: Option<OrderArg>,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Do not print the prompt
    #[arg(long)]
    pub no_prompt: bool,
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable display and status
    #[default]
    Text,
    /// Engine snapshot as JSON
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Auto-detect
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Angle mode argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum AngleArg {
    /// Radians
    Rad,
    /// Degrees
    Deg,
}

impl From<AngleArg> for AngleMode {
    fn from(arg: AngleArg) -> Self {
        match arg {
            AngleArg::Rad => Self::Radians,
            AngleArg::Deg => Self::Degrees,
        }
    }
}

/// History order argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrderArg {
    /// Most recent first
    Newest,
    /// Chronological
    Oldest,
}

impl From<OrderArg> for HistoryOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Newest => Self::NewestFirst,
            OrderArg::Oldest => Self::OldestFirst,
        }
    }
}
