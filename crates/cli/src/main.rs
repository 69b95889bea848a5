use anyhow::Result;
use cafe_admin_core::DataPaths;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Host, PageCommand};

#[derive(Parser)]
#[command(name = "cafe-admin")]
#[command(about = "Café admin demo: login, order board and product list", long_about = None)]
struct Cli {
    /// Directory holding the persistent storage file
    #[arg(long, global = true, env = "CAFE_ADMIN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Page(PageCommand),
    /// Keep one tab open and read commands from stdin
    Shell,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let paths = cli.data_dir.map_or_else(DataPaths::platform_default, DataPaths::new);

    match cli.command {
        Commands::Page(command) => {
            let host = Host::open(&paths, true)?;
            commands::execute(&host, command, &mut std::io::stdout().lock())
        },
        Commands::Shell => {
            let host = Host::open(&paths, false)?;
            commands::shell::run_shell(&host, std::io::stdin().lock(), &mut std::io::stdout().lock())
        },
    }
}
