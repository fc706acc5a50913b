use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obot_client::cli;

#[derive(Parser)]
#[command(name = "obot")]
#[command(about = "Client for the obot platform API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the client version
    Version {
        /// Ignored
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Render a JSON project list as a tree
    Tree {
        /// File containing a JSON array of projects (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

/// Initialize tracing on stderr so stdout only carries command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "obot_client=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let parsed = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match parsed.command {
        Commands::Version { args } => {
            cli::Version::default().run(&mut out, &args)?;
        }
        Commands::Tree { file: Some(path) } => {
            cli::tree::run_from_path(&path, &mut out)
                .with_context(|| format!("Failed to render projects from {}", path.display()))?;
        }
        Commands::Tree { file: None } => {
            cli::tree::run(io::stdin().lock(), &mut out)
                .context("Failed to render projects from stdin")?;
        }
    }

    out.flush()?;
    Ok(())
}
