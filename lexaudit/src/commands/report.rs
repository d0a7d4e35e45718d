// lexaudit/src/commands/report.rs
//
// USE CASE: Generate the dataset report.

use std::path::PathBuf;

use lexaudit_core::application::report::REPORT_FILE;
use lexaudit_core::application::{ReportOptions, generate_report};

use super::{load_config, open_store};

pub async fn execute(project_dir: PathBuf, json: bool) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    let config = load_config(&project_dir)?;
    let store = open_store(&project_dir, &config)?;
    let catalog = config.catalog();

    let options = ReportOptions {
        export_dir: project_dir.join(&config.export_path),
        backlog_jurisdiction: config.backlog_jurisdiction,
        write_json: json,
    };

    println!("📊 Generating report from dataset...");
    match generate_report(&store, &catalog, &options).await {
        Ok(report) => {
            println!(
                "   {} unprocessed bill pages, {} bills, {} record types",
                report.backlog.len(),
                report.status_distribution.total_count,
                report.completeness.len()
            );
            println!(
                "\n✨ Done generating report in {:.2?}, see {}",
                start.elapsed(),
                options.export_dir.join(REPORT_FILE).display()
            );
        }
        Err(e) => {
            eprintln!("\n💥 REPORT FAILED: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
