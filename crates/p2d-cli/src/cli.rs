use clap::{Args, Parser, Subcommand, ValueEnum};
use poscar2data::engine::project::ProjectionFrame;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "mash",
    version,
    about = "p2d - Convert VASP POSCAR structures into LAMMPS atomic data files with a lower-triangular box.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `batch --parallel`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single POSCAR file into a LAMMPS data file.
    Convert(ConvertArgs),
    /// Convert every POSCAR file in a directory that matches the naming convention.
    Batch(BatchArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input POSCAR file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output data file.
    /// Derived from the input name by the suffix/extension convention when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub conversion: ConversionArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory to scan for structure files.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Convert files concurrently on the thread pool instead of one after another.
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub conversion: ConversionArgs,
}

/// Options shared by every conversion command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConversionArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File-name ending that marks a structure file (e.g. '-POSCAR').
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Replacement for the suffix in output file names (e.g. '.lmp').
    #[arg(long, value_name = "EXT", allow_hyphen_values = true)]
    pub extension: Option<String>,

    /// Text of the comment line at the top of the data file.
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,

    /// Number of decimal digits for box bounds, tilts and coordinates.
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Frame in which atom positions are written.
    #[arg(long, value_enum, value_name = "FRAME")]
    pub frame: Option<FrameArg>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Output frame for atom positions.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameArg {
    /// Multiply fractional coordinates by the original lattice basis; keep absolute ones as-is.
    Basis,
    /// Additionally rotate positions into the triangular box frame.
    Box,
}

impl From<FrameArg> for ProjectionFrame {
    fn from(frame: FrameArg) -> Self {
        match frame {
            FrameArg::Basis => ProjectionFrame::Basis,
            FrameArg::Box => ProjectionFrame::Box,
        }
    }
}
