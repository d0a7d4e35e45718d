// lexaudit/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug lexaudit report ... to see every query
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { project_dir, json } => {
            commands::report::execute(project_dir, json).await?;
        }
        Commands::Regress {
            jurisdiction,
            project_dir,
        } => {
            commands::regress::execute(project_dir, jurisdiction).await?;
        }
        Commands::Catalog { project_dir } => {
            commands::catalog::execute(project_dir)?;
        }
    }

    Ok(())
}
