use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "bondgraph CLI - Inspect, slice, combine and traverse index-based chemical bond tables.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.sort-bonds=true
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print atom count, bond count, degree statistics and component count of a bond table.
    Info(InfoArgs),
    /// Keep a subset of atoms and renumber the surviving bonds.
    Select(SelectArgs),
    /// Merge two bond tables sharing one index space, or concatenate them.
    Combine(CombineArgs),
    /// List the atoms connected to a root atom.
    Connected(ConnectedArgs),
    /// List all connected components of a bond table.
    Components(ComponentsArgs),
    /// Build a bond table from residue bond templates.
    Connect(ConnectArgs),
}

/// Where and how to write a resulting bond table.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Path for the output bond table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Sort rows by atom pair, overriding `output.sort-bonds`.
    #[arg(long)]
    pub sort_bonds: bool,

    /// Omit the bond order column, overriding `output.include-orders`.
    #[arg(long)]
    pub no_orders: bool,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input bond table.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

/// Exactly one way of describing the atoms to keep.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SelectionArgs {
    /// Comma separated atom indices; negative values count from the end (e.g., '0,2,-1').
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pub indices: Option<String>,

    /// Half-open atom range 'START..END'; either bound may be omitted (e.g., '2..10').
    #[arg(long, value_name = "RANGE")]
    pub range: Option<String>,

    /// One '1' (keep) or '0' (drop) per atom (e.g., '1101').
    #[arg(long, value_name = "BITS")]
    pub mask: Option<String>,
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Path to the input bond table.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// Union of both tables in a shared index space.
    Merge,
    /// Append the atoms of the second table after those of the first.
    Concat,
}

/// Arguments for the `combine` subcommand.
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Path to the first bond table.
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Path to the second bond table.
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// How to combine the two tables.
    #[arg(short, long, value_enum, default_value_t = CombineMode::Concat)]
    pub mode: CombineMode,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `connected` subcommand.
#[derive(Args, Debug)]
pub struct ConnectedArgs {
    /// Path to the input bond table.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Index of the root atom.
    #[arg(short, long, required = true, value_name = "INT")]
    pub root: usize,

    /// Print a '0'/'1' mask over all atoms instead of an index list.
    #[arg(long)]
    pub mask: bool,
}

/// Arguments for the `components` subcommand.
#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Path to the input bond table.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `connect` subcommand.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// TOML file listing the atom count and the residue spans of the atom collection.
    #[arg(long, required = true, value_name = "PATH")]
    pub residues: PathBuf,

    /// TOML file with the bond templates of each residue type.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub templates: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}
