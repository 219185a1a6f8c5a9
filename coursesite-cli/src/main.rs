use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;

/// coursesite - serve and check the course website
#[derive(Parser)]
#[command(name = "coursesite")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the website
    Serve {
        /// Load configuration from this file instead of the search path
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Compile every page and report template errors
    Check {
        /// Load configuration from this file instead of the search path
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// List available template fragments
    Fragments {
        /// List fragments in this directory instead of the embedded set
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config, port } => commands::serve::execute(config, port).await,
        Commands::Check { config } => commands::check::execute(config),
        Commands::Fragments { dir } => commands::fragments::execute(dir),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}
