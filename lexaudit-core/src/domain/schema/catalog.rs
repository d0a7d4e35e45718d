// lexaudit-core/src/domain/schema/catalog.rs

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::schema::descriptor::{FieldDescriptor, RecordTypeDescriptor};
use crate::domain::schema::naming::{is_plain_identifier, snake_case, table_name};

/// Nested value types with no meaningful "empty" state. They are embedded in
/// their owner's row and always present structurally.
pub const DEFAULT_SKIP_TYPES: &[&str] = &[
    "ColombiaOriginatorVariables",
    "UkCountrySpecificVariables",
    "UsaCountrySpecificVariables",
    "GeCountrySpecificVariables",
    "SouthAfricaCountrySpecificVariables",
    "RawPageSource",
];

pub const BILL_TABLE: &str = "bill_main_table";

/// Fluent declaration of one record type.
pub struct RecordTypeBuilder<'a> {
    descriptor: RecordTypeDescriptor,
    skip_types: &'a [String],
}

impl<'a> RecordTypeBuilder<'a> {
    /// Top-level record type; the persistence layer names its table.
    pub fn entity(type_name: &str, table: &str, skip_types: &'a [String]) -> Self {
        Self::new(type_name, table.to_string(), false, skip_types)
    }

    /// Embedded type stored in its own table, derived from the type name.
    pub fn embedded(type_name: &str, skip_types: &'a [String]) -> Self {
        Self::new(type_name, table_name(type_name), true, skip_types)
    }

    fn new(type_name: &str, table: String, is_embedded: bool, skip_types: &'a [String]) -> Self {
        Self {
            descriptor: RecordTypeDescriptor {
                type_name: type_name.to_string(),
                table_name: table,
                fields: Vec::new(),
                is_embedded,
                key_column: "id".to_string(),
                child_key: "record_id".to_string(),
            },
            skip_types,
        }
    }

    pub fn child_key(mut self, column: &str) -> Self {
        self.descriptor.child_key = column.to_string();
        self
    }

    pub fn scalar(self, name: &str) -> Self {
        let column = snake_case(name);
        self.push(name, column, false, false)
    }

    /// Scalar whose column is overridden by the persistence mapping.
    pub fn scalar_as(self, name: &str, column: &str) -> Self {
        self.push(name, column.to_string(), false, false)
    }

    /// Multi-valued field backed by a child table keyed on `child_key`.
    pub fn collection(self, name: &str, table: &str) -> Self {
        self.push(name, table.to_string(), true, false)
    }

    /// One-to-one entity kept in its own table. Present when a row of
    /// `table` points back at the record, the same shape as a collection.
    pub fn association(self, name: &str, table: &str) -> Self {
        self.push(name, table.to_string(), true, false)
    }

    /// Nested value type embedded in the owner's row. Skipped when its
    /// declared type is on the skip list; otherwise `validate` rejects it,
    /// since no single column holds it.
    pub fn nested(mut self, name: &str, declared_type: &str) -> Self {
        let skip = self.skip_types.iter().any(|t| t == declared_type);
        self = self.push(name, snake_case(name), false, skip);
        if let Some(field) = self.descriptor.fields.last_mut() {
            field.nested_type = Some(declared_type.to_string());
        }
        self
    }

    fn push(mut self, name: &str, storage_column: String, multi_valued: bool, skip: bool) -> Self {
        self.descriptor.fields.push(FieldDescriptor {
            name: name.to_string(),
            storage_column,
            multi_valued,
            skip,
            nested_type: None,
        });
        self
    }

    pub fn build(self) -> RecordTypeDescriptor {
        self.descriptor
    }
}

/// Statically declared metadata for every tracked record type.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaCatalog {
    types: Vec<RecordTypeDescriptor>,
}

impl SchemaCatalog {
    pub fn new(types: Vec<RecordTypeDescriptor>) -> Self {
        Self { types }
    }

    /// Declaration order: top-level entities first, then embedded types.
    pub fn record_types(&self) -> &[RecordTypeDescriptor] {
        &self.types
    }

    pub fn record_type(&self, type_name: &str) -> Result<&RecordTypeDescriptor, DomainError> {
        self.types
            .iter()
            .find(|t| t.type_name == type_name)
            .ok_or_else(|| DomainError::UnknownRecordType(type_name.to_string()))
    }

    pub fn fields_of(&self, type_name: &str) -> Result<&[FieldDescriptor], DomainError> {
        self.record_type(type_name).map(|t| t.fields.as_slice())
    }

    /// Rejects any mapping that could not be addressed by a query.
    /// Runs before the first query of a report.
    pub fn validate(&self) -> Result<(), DomainError> {
        for rt in &self.types {
            let unresolvable = |field: &str, reason: String| DomainError::UnresolvableColumn {
                record_type: rt.type_name.clone(),
                field: field.to_string(),
                reason,
            };

            for (what, ident) in [
                ("table", &rt.table_name),
                ("key column", &rt.key_column),
                ("child key", &rt.child_key),
            ] {
                if !is_plain_identifier(ident) {
                    return Err(unresolvable(
                        "<record>",
                        format!("{} '{}' is not a valid identifier", what, ident),
                    ));
                }
            }

            for field in &rt.fields {
                if field.skip {
                    continue;
                }
                if let Some(declared_type) = &field.nested_type {
                    return Err(unresolvable(
                        &field.name,
                        format!(
                            "nested type '{}' has no single storage column, list it under skip-types",
                            declared_type
                        ),
                    ));
                }
                if !is_plain_identifier(&field.storage_column) {
                    return Err(unresolvable(
                        &field.name,
                        format!("'{}' is not a valid identifier", field.storage_column),
                    ));
                }
                if field.multi_valued && rt.is_embedded {
                    return Err(unresolvable(
                        &field.name,
                        "embedded types cannot own collections".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// The legislative dataset as mapped by the collectors.
    pub fn legislative(skip_types: &[String]) -> Self {
        let bill = RecordTypeBuilder::entity("LegislativeDataRecord", BILL_TABLE, skip_types)
            .scalar("id")
            .scalar("recordId")
            .scalar("country")
            .scalar("billType")
            .scalar("lawType")
            .scalar("typeOfLawEng")
            .scalar("billId")
            .scalar("lawId")
            .scalar("billTitle")
            .scalar("billPageUrl")
            .scalar("originalLaw")
            .scalar("originType")
            .scalar("stagesCount")
            .scalar("billStatus")
            .collection("originators", "originators")
            .scalar("billSize")
            .scalar("billText")
            .scalar("billTextUrl")
            .scalar("lawText")
            .scalar("lawTextUrl")
            .scalar("lawSize")
            .scalar("dateIntroduction")
            .scalar("committeeDate")
            .scalar("datePassing")
            .scalar("dateEnteringIntoForce")
            .scalar("committeeCount")
            .scalar("committeeHearingCount")
            .scalar("committeeDepth")
            .collection("committees", "committees")
            .collection("billVersions", "bill_versions")
            .scalar("procedureTypeStandard")
            .scalar("procedureTypeEng")
            .scalar("procedureTypeNational")
            .scalar_as("impactAssessmentDone", "ia_dummy")
            .scalar("amendmentCount")
            .collection("amendments", "amendments")
            .collection("impactAssessments", "impact_assessments")
            .collection("modifiedLaws", "affected_laws")
            .scalar("modifiedLawsCount")
            .scalar("affectingLawsCount")
            .scalar("affectingLawsFirstDate")
            .collection("affectingLawsDetailed", "affecting_laws_detailed")
            .collection("stages", "legislative_stages")
            .collection("originatorSupportNames", "originator_support_names")
            .collection("relatedBills", "related_bills")
            .scalar("plenarySize")
            .scalar("finalVoteFor")
            .scalar("finalVoteAgainst")
            .scalar("finalVoteAbst")
            .nested("countrySpecificVariables", "UkCountrySpecificVariables")
            .association("brazilCountrySpecificVariables", "brazil_spec_vars")
            .association("colombiaCountrySpecificVariables", "colombia_spec_vars")
            .nested("usaCountrySpecificVariables", "UsaCountrySpecificVariables")
            .association("jordanCountrySpecificVariables", "jordan_spec_vars")
            .nested("geCountrySpecificVariables", "GeCountrySpecificVariables")
            .association("indiaCountrySpecificVariables", "india_spec_vars")
            .association("bgSpecificVariables", "bulgaria_spec_vars")
            .association("chileCountrySpecificVariables", "chile_spec_vars")
            .association("auCountrySpecificVariables", "australia_spec_vars")
            .association("swedenCountrySpecificVariables", "sweden_spec_vars")
            .nested(
                "southAfricaCountrySpecificVariables",
                "SouthAfricaCountrySpecificVariables",
            )
            .scalar("dateProcessed")
            .scalar("billTextGeneralJustification")
            .scalar("altBillPageUrl")
            .nested("rawPageSource", "RawPageSource")
            .collection("errors", "errors")
            .build();

        let amendment = RecordTypeBuilder::entity("Amendment", "amendments", skip_types)
            .child_key("amendment_id")
            .scalar("id")
            .scalar_as("dataRecord", "record_id")
            .scalar_as("pageUrl", "amendment_page_url")
            .scalar("amendmentId")
            .scalar("date")
            .scalar_as("stageNumber", "amendment_stage_number")
            .scalar_as("stageName", "amendment_stage_name")
            .scalar_as("title", "amendment_title")
            .scalar_as("committeeName", "amendment_committee_name")
            .collection("originators", "amendment_originators")
            .scalar_as("plenary", "amendment_plenary")
            .scalar_as("outcome", "amendment_outcome")
            .scalar_as("votesInFavor", "amendment_vote_for")
            .scalar_as("votesAgainst", "amendment_vote_against")
            .scalar_as("votesAbstention", "amendment_vote_abst")
            .scalar_as("textSourceUrl", "amendment_text_url")
            .scalar_as("amendmentText", "amendment_text")
            .build();

        let impact_assessment =
            RecordTypeBuilder::entity("ImpactAssessment", "impact_assessments", skip_types)
                .scalar("id")
                .scalar_as("title", "ia_title")
                .scalar_as("date", "ia_date")
                .scalar("originalUrl")
                .scalar_as("text", "ia_text")
                .scalar_as("size", "ia_size")
                .scalar_as("dataRecord", "record_id")
                .build();

        let committee = RecordTypeBuilder::embedded("Committee", skip_types)
            .scalar_as("name", "committee_name")
            .scalar_as("role", "committee_role")
            .scalar_as("date", "committee_date")
            .scalar("committeeHearingCount")
            .scalar("numberOfPublicHearingsCommittee")
            .build();

        let stage = RecordTypeBuilder::embedded("LegislativeStage", skip_types)
            .scalar("stageNumber")
            .scalar("date")
            .scalar("name")
            .scalar("debateSize")
            .build();

        let originator = RecordTypeBuilder::embedded("Originator", skip_types)
            .scalar_as("name", "originator_name")
            .scalar_as("affiliation", "originator_affiliation")
            .nested("colombiaVariables", "ColombiaOriginatorVariables")
            .build();

        Self::new(vec![
            bill,
            amendment,
            impact_assessment,
            committee,
            stage,
            originator,
        ])
    }

    pub fn default_skip_types() -> Vec<String> {
        DEFAULT_SKIP_TYPES.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::legislative(&Self::default_skip_types())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::schema::descriptor::FillStrategy;

    #[test]
    fn test_default_catalog_is_valid() {
        SchemaCatalog::default().validate().unwrap();
    }

    #[test]
    fn test_declaration_order() {
        let catalog = SchemaCatalog::default();
        let names: Vec<&str> = catalog
            .record_types()
            .iter()
            .map(|t| t.type_name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "LegislativeDataRecord",
                "Amendment",
                "ImpactAssessment",
                "Committee",
                "LegislativeStage",
                "Originator"
            ]
        );
    }

    #[test]
    fn test_embedded_table_names_and_strategy() {
        let catalog = SchemaCatalog::default();
        let stage = catalog.record_type("LegislativeStage").unwrap();
        assert_eq!(stage.table_name, "legislative_stages");
        assert_eq!(stage.strategy(), FillStrategy::RawColumn);
        assert_eq!(catalog.record_type("Committee").unwrap().table_name, "committees");

        let bill = catalog.record_type("LegislativeDataRecord").unwrap();
        assert_eq!(bill.table_name, BILL_TABLE);
        assert_eq!(bill.strategy(), FillStrategy::LogicalPredicate);
    }

    #[test]
    fn test_column_resolution() {
        let catalog = SchemaCatalog::default();
        let bill = catalog.record_type("LegislativeDataRecord").unwrap();

        let hearing = bill.field("committeeHearingCount").unwrap();
        assert_eq!(hearing.storage_column, "committee_hearing_count");
        assert!(!hearing.multi_valued);

        // explicit override wins over snake case
        let ia = bill.field("impactAssessmentDone").unwrap();
        assert_eq!(ia.storage_column, "ia_dummy");

        let stages = bill.field("stages").unwrap();
        assert!(stages.multi_valued);
        assert_eq!(stages.storage_column, "legislative_stages");
    }

    #[test]
    fn test_skip_list_marks_instead_of_omitting() {
        let catalog = SchemaCatalog::default();
        let fields = catalog.fields_of("Originator").unwrap();
        let colombia = fields.iter().find(|f| f.name == "colombiaVariables").unwrap();
        assert!(colombia.skip);

        let originator = catalog.record_type("Originator").unwrap();
        let tracked: Vec<&str> = originator.tracked_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(tracked, ["name", "affiliation"]);
    }

    #[test]
    fn test_empty_skip_list_is_rejected_before_querying() {
        let catalog = SchemaCatalog::legislative(&[]);
        let originator = catalog.record_type("Originator").unwrap();
        assert!(!originator.field("colombiaVariables").unwrap().skip);

        match catalog.validate().unwrap_err() {
            DomainError::UnresolvableColumn {
                record_type, field, ..
            } => {
                assert_eq!(record_type, "LegislativeDataRecord");
                assert_eq!(field, "countrySpecificVariables");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unlisted_nested_type_names_the_field() {
        let skip = vec!["UkCountrySpecificVariables".to_string()];
        let rt = RecordTypeBuilder::embedded("Originator", &skip)
            .scalar_as("name", "originator_name")
            .nested("colombiaVariables", "ColombiaOriginatorVariables")
            .build();
        let err = SchemaCatalog::new(vec![rt]).validate().unwrap_err();
        assert!(err.to_string().contains("'colombiaVariables'"));
        assert!(err.to_string().contains("ColombiaOriginatorVariables"));
    }

    #[test]
    fn test_one_to_one_associations_are_presence_checks() {
        let catalog = SchemaCatalog::default();
        let bill = catalog.record_type("LegislativeDataRecord").unwrap();

        let brazil = bill.field("brazilCountrySpecificVariables").unwrap();
        assert!(!brazil.skip);
        assert!(brazil.multi_valued);
        assert_eq!(brazil.storage_column, "brazil_spec_vars");
        assert_eq!(bill.field("bgSpecificVariables").unwrap().storage_column, "bulgaria_spec_vars");

        // embedded value types stay skipped
        assert!(bill.field("countrySpecificVariables").unwrap().skip);
        assert!(bill.field("rawPageSource").unwrap().skip);
    }

    #[test]
    fn test_fields_of_is_deterministic() {
        let catalog = SchemaCatalog::default();
        let a = catalog.fields_of("Amendment").unwrap().to_vec();
        let b = catalog.fields_of("Amendment").unwrap().to_vec();
        assert_eq!(a, b);
        assert!(catalog.fields_of("Nope").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_override() {
        let skip = SchemaCatalog::default_skip_types();
        let broken = RecordTypeBuilder::entity("Broken", "broken", &skip)
            .scalar("fine")
            .scalar_as("weird", "weird column")
            .build();
        let err = SchemaCatalog::new(vec![broken]).validate().unwrap_err();
        match err {
            DomainError::UnresolvableColumn { field, record_type, .. } => {
                assert_eq!(field, "weird");
                assert_eq!(record_type, "Broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_collection_on_embedded() {
        let broken = RecordTypeBuilder::embedded("Vote", &[])
            .collection("ballots", "ballots")
            .build();
        assert!(SchemaCatalog::new(vec![broken]).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let broken = RecordTypeBuilder::embedded("Thing", &[]).scalar("").build();
        assert!(SchemaCatalog::new(vec![broken]).validate().is_err());
    }
}
