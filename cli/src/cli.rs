use std::path::PathBuf;

use mapsplit::Broadphase;

/// Split brush maps into groups of non-intersecting brushes
#[derive(clap::Parser, Debug)]
#[command(name = "mapsplit", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Split a map into one map per group of non-intersecting brushes
    Split(SplitArgs),

    /// Color a list of boxes and print the groups
    Color(ColorArgs),
}

#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// Input map file; groups are written beside it as <name>-<i>.<ext>
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub map: PathBuf,

    /// Also write an exports file with one interior instance per group
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub exports: Option<PathBuf>,

    /// Prefix for interior paths in the exports file
    #[arg(short, long, requires = "exports")]
    pub prefix: Option<String>,

    /// Extension of compiled interiors named in the exports file
    #[arg(long, default_value = "dif")]
    pub interior_ext: String,

    /// Extension of the written group maps (defaults to the input's)
    #[arg(long)]
    pub group_ext: Option<String>,

    /// How overlapping brush pairs are found
    #[arg(long, value_enum, default_value_t = BroadphaseArg::Naive)]
    pub broadphase: BroadphaseArg,
}

#[derive(clap::Args, Debug)]
pub struct ColorArgs {
    /// File with one box per line: x1 y1 z1 x2 y2 z2
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub aabbs: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// How overlapping box pairs are found
    #[arg(long, value_enum, default_value_t = BroadphaseArg::Naive)]
    pub broadphase: BroadphaseArg,
}

/// How overlapping pairs are found
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BroadphaseArg {
    /// Test every pair on one thread
    #[default]
    Naive,
    /// Test every pair across all cores
    Parallel,
    /// Query an R-tree for candidate pairs
    Rtree,
}

impl From<BroadphaseArg> for Broadphase {
    fn from(arg: BroadphaseArg) -> Self {
        match arg {
            BroadphaseArg::Naive => Broadphase::Naive,
            BroadphaseArg::Parallel => Broadphase::Parallel,
            BroadphaseArg::Rtree => Broadphase::RTree,
        }
    }
}
