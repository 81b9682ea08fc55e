use anyhow::Result;
use clap::{Parser, Subcommand};
use packidx::areas::inspector::Inspector;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "packidx",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Inspect Git pack index files",
    long_about = "This is a reader for version 2 Git pack index (.idx) files. \
    It resolves object IDs to byte offsets in the companion pack file \
    without reading the pack itself.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "show-index",
        about = "List every object in a pack index",
        long_about = "This command prints one line per object in the pack index, \
        with its pack offset followed by its object ID, in index order."
    )]
    ShowIndex {
        #[arg(index = 1, help = "The path to the pack index file")]
        path: PathBuf,
    },
    #[command(
        name = "offset-of",
        about = "Print the pack offset of an object",
        long_about = "This command looks up a single object in the pack index \
        and prints its byte offset in the pack file. \
        It fails if the object is not in the index."
    )]
    OffsetOf {
        #[arg(index = 1, help = "The path to the pack index file")]
        path: PathBuf,
        #[arg(index = 2, help = "The object SHA to look up")]
        sha: String,
    },
    #[command(
        name = "stats",
        about = "Print pack index statistics",
        long_about = "This command prints the format version, the number of objects \
        and the number of large (64-bit) offsets in the pack index."
    )]
    Stats {
        #[arg(index = 1, help = "The path to the pack index file")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let inspector = Inspector::new(Box::new(std::io::stdout()));

    match &cli.command {
        Commands::ShowIndex { path } => inspector.show_index(path)?,
        Commands::OffsetOf { path, sha } => inspector.offset_of(path, sha)?,
        Commands::Stats { path } => inspector.stats(path)?,
    }

    Ok(())
}
