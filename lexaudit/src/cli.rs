// lexaudit/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexaudit")]
#[command(about = "Completeness, status and regression audits for legislative datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Writes the dataset report (backlog, status distribution, fill rates)
    Report {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Also write report.json next to report.txt
        #[arg(long)]
        json: bool,
    },

    /// 🧪 Re-checks hand-verified values of historical bills
    Regress {
        /// Country name (HUNGARY) or code (HU)
        #[arg(long, short)]
        jurisdiction: String,

        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 📚 Prints the tracked record types and their fields
    Catalog {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_report_defaults() -> Result<()> {
        let args = Cli::parse_from(["lexaudit", "report"]);
        match args.command {
            Commands::Report { project_dir, json } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert!(!json);
                Ok(())
            }
            _ => bail!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_report_json() -> Result<()> {
        let args = Cli::parse_from(["lexaudit", "report", "--json", "--project-dir", "/tmp"]);
        match args.command {
            Commands::Report { project_dir, json } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
                assert!(json);
                Ok(())
            }
            _ => bail!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_regress() -> Result<()> {
        let args = Cli::parse_from(["lexaudit", "regress", "-j", "HU"]);
        match args.command {
            Commands::Regress { jurisdiction, .. } => {
                assert_eq!(jurisdiction, "HU");
                Ok(())
            }
            _ => bail!("Expected Regress command"),
        }
    }

    #[test]
    fn test_cli_regress_requires_jurisdiction() {
        assert!(Cli::try_parse_from(["lexaudit", "regress"]).is_err());
    }
}
