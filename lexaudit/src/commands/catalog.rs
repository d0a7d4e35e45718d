// lexaudit/src/commands/catalog.rs
//
// USE CASE: Show what the report tracks, skipped fields included.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::path::PathBuf;

use lexaudit_core::domain::schema::FillStrategy;

use super::load_config;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let config = load_config(&project_dir)?;
    let catalog = config.catalog();
    catalog.validate()?;

    for record_type in catalog.record_types() {
        let strategy = match record_type.strategy() {
            FillStrategy::LogicalPredicate => "logical",
            FillStrategy::RawColumn => "raw column",
        };
        println!(
            "\n📚 {} ({}, {})",
            record_type.type_name, record_type.table_name, strategy
        );

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Field", "Storage", "Kind", "Tracked"]);

        for field in &record_type.fields {
            let kind = match (&field.nested_type, field.multi_valued) {
                (Some(declared_type), _) => format!("nested {}", declared_type),
                (None, true) => "related rows".to_string(),
                (None, false) => "scalar".to_string(),
            };
            table.add_row(vec![
                field.name.clone(),
                field.storage_column.clone(),
                kind,
                if field.skip { "skipped" } else { "yes" }.to_string(),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
