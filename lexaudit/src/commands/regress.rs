// lexaudit/src/commands/regress.rs
//
// USE CASE: Run the regression suite of one jurisdiction.

use std::path::PathBuf;

use lexaudit_core::application::run_suite;
use lexaudit_core::domain::Jurisdiction;
use lexaudit_core::domain::regression::suite_for;

use super::{load_config, open_store};

pub async fn execute(project_dir: PathBuf, jurisdiction: String) -> anyhow::Result<()> {
    let jurisdiction: Jurisdiction = jurisdiction.parse()?;

    let config = load_config(&project_dir)?;
    let store = open_store(&project_dir, &config)?;

    let suite = suite_for(jurisdiction);
    let report = match run_suite(&store, &suite).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("\n💥 REGRESSION RUN ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if report.is_vacuous() {
        println!(
            "\n✨ {}: no regression checks authored, passing vacuously",
            jurisdiction
        );
    } else if let Some(failure) = &report.failure {
        eprintln!(
            "\n❌ FAILURE. {} after {}/{} assertions: {}",
            jurisdiction, report.passed, report.total_assertions, failure
        );
        std::process::exit(1);
    } else {
        println!(
            "\n✨ SUCCESS! {}: {} assertions passed",
            jurisdiction, report.passed
        );
    }

    Ok(())
}
