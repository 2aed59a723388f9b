mod commands;
mod project;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixelpaint", about = "Paint-by-number pixel art from photos")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn an image into a paint-by-number project
    Create(commands::create::CreateArgs),
    /// Print or save the default generation config
    Config(commands::config::ConfigArgs),
    /// Show project dimensions, palette and progress
    Info(commands::info::InfoArgs),
    /// Color cells of a project with one palette color
    Paint(commands::paint::PaintArgs),
    /// Render the finished artwork as PNG
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Create(args) => commands::create::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Paint(args) => commands::paint::run(args),
        Commands::Export(args) => commands::export::run(args),
    }
}
