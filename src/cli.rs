use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "voxset")]
#[command(about = "Generate, validate and mesh voxel/pixel grid datasets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a batch of entries and write them as a JSON collection.
    Generate(GenerateArgs),
    /// Check every entry of a dataset file.
    Validate(ValidateArgs),
    /// Mesh one entry and report the face buckets.
    Mesh(MeshArgs),
    /// List a generator's editable properties and their current values.
    Props(PropsArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GeneratorKind {
    /// Layered 2D side-view terrain.
    Terrain,
    /// All-empty 3D grid.
    Empty,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(long, value_enum, default_value_t = GeneratorKind::Terrain)]
    pub generator: GeneratorKind,

    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Base seed; entry `i` uses `seed + i`. Drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shorthand for `--set size=...`, e.g. `64x64` or `16x16x16`.
    #[arg(long)]
    pub size: Option<String>,

    /// Terrain generation TOML (`[terrain]`, `[ponds]`, `[caves]`, `[trees]`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Property assignment `name=value`; repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub sets: Vec<String>,

    /// Collection name written alongside the entries.
    #[arg(long)]
    pub name: Option<String>,

    /// Output file; stdout when omitted.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct MeshArgs {
    pub file: PathBuf,

    /// Index of the entry inside the collection.
    #[arg(long, default_value_t = 0)]
    pub entry: usize,

    /// Palette TOML; the bundled palette when omitted.
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Window `x0,y0,z0:x1,y1,z1` (half-open), 3D entries only.
    #[arg(long)]
    pub window: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PropsArgs {
    #[arg(long, value_enum, default_value_t = GeneratorKind::Terrain)]
    pub generator: GeneratorKind,

    #[arg(long)]
    pub config: Option<PathBuf>,
}
