// lexaudit-core/src/domain/regression/assertion.rs

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Value of a bill attribute, as stored or as expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Int(i64),
    Bool(bool),
    Date(NaiveDate),
    Text(String),
}

impl AttributeValue {
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day).map_or(Self::Null, Self::Date)
    }
}

impl From<Option<i64>> for AttributeValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Self::Null, Self::Int)
    }
}

impl From<Option<bool>> for AttributeValue {
    fn from(v: Option<bool>) -> Self {
        v.map_or(Self::Null, Self::Bool)
    }
}

impl From<Option<NaiveDate>> for AttributeValue {
    fn from(v: Option<NaiveDate>) -> Self {
        v.map_or(Self::Null, Self::Date)
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(v: Option<String>) -> Self {
        v.map_or(Self::Null, Self::Text)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::Text(v) => write!(f, "\"{}\"", v),
        }
    }
}

/// How a historical bill is found in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    BillId(String),
    BillPageUrl(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BillId(id) => write!(f, "{}", id),
            Self::BillPageUrl(url) => write!(f, "{}", url),
        }
    }
}

/// Stored state of one bill, as far as regression checks look at it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillSnapshot {
    pub bill_id: Option<String>,
    pub bill_page_url: Option<String>,
    pub bill_status: Option<String>,
    pub stages_count: Option<i64>,
    pub committee_count: Option<i64>,
    pub committee_hearing_count: Option<i64>,
    pub final_vote_for: Option<i64>,
    pub final_vote_against: Option<i64>,
    pub final_vote_abst: Option<i64>,
    pub date_introduction: Option<NaiveDate>,
    pub date_passing: Option<NaiveDate>,
    pub original_law: Option<bool>,
    pub modified_laws_count: Option<i64>,
    pub affecting_laws_count: Option<i64>,
    pub affecting_laws_first_date: Option<NaiveDate>,
    pub originators_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillAttribute {
    BillStatus,
    StagesCount,
    CommitteeCount,
    CommitteeHearingCount,
    FinalVoteFor,
    FinalVoteAgainst,
    FinalVoteAbst,
    DateIntroduction,
    DatePassing,
    OriginalLaw,
    ModifiedLawsCount,
    AffectingLawsCount,
    AffectingLawsFirstDate,
    /// Size of the originators collection.
    OriginatorsCount,
}

impl BillAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BillStatus => "billStatus",
            Self::StagesCount => "stagesCount",
            Self::CommitteeCount => "committeeCount",
            Self::CommitteeHearingCount => "committeeHearingCount",
            Self::FinalVoteFor => "finalVoteFor",
            Self::FinalVoteAgainst => "finalVoteAgainst",
            Self::FinalVoteAbst => "finalVoteAbst",
            Self::DateIntroduction => "dateIntroduction",
            Self::DatePassing => "datePassing",
            Self::OriginalLaw => "originalLaw",
            Self::ModifiedLawsCount => "modifiedLawsCount",
            Self::AffectingLawsCount => "affectingLawsCount",
            Self::AffectingLawsFirstDate => "affectingLawsFirstDate",
            Self::OriginatorsCount => "originators.size",
        }
    }

    pub fn read(&self, bill: &BillSnapshot) -> AttributeValue {
        match self {
            Self::BillStatus => bill.bill_status.clone().into(),
            Self::StagesCount => bill.stages_count.into(),
            Self::CommitteeCount => bill.committee_count.into(),
            Self::CommitteeHearingCount => bill.committee_hearing_count.into(),
            Self::FinalVoteFor => bill.final_vote_for.into(),
            Self::FinalVoteAgainst => bill.final_vote_against.into(),
            Self::FinalVoteAbst => bill.final_vote_abst.into(),
            Self::DateIntroduction => bill.date_introduction.into(),
            Self::DatePassing => bill.date_passing.into(),
            Self::OriginalLaw => bill.original_law.into(),
            Self::ModifiedLawsCount => bill.modified_laws_count.into(),
            Self::AffectingLawsCount => bill.affecting_laws_count.into(),
            Self::AffectingLawsFirstDate => bill.affecting_laws_first_date.into(),
            Self::OriginatorsCount => AttributeValue::Int(bill.originators_count),
        }
    }
}

/// Dataset-wide rule whose violating rows must number zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyRule {
    AmendingLawsModifiedByOthers,
    OriginalLawsModifyingOthers,
    RejectedBillsWithLawLinks,
    PassedAmendingBillsNotModifyingOneLaw,
}

impl ConsistencyRule {
    pub fn description(&self) -> &'static str {
        match self {
            Self::AmendingLawsModifiedByOthers => "Amending laws being modified by other laws",
            Self::OriginalLawsModifyingOthers => "Original laws modifying others",
            Self::RejectedBillsWithLawLinks => "Rejected bills with modified or affecting laws",
            Self::PassedAmendingBillsNotModifyingOneLaw => {
                "Passed amending bills not modifying exactly one law"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// A bill with this id and date of passing exists.
    DatePassing { bill_id: String, date: NaiveDate },
    /// The bill exists and every expectation holds, in order.
    Record {
        key: LookupKey,
        expectations: Vec<(BillAttribute, AttributeValue)>,
    },
    Consistency(ConsistencyRule),
}

impl Check {
    pub fn date_passing(bill_id: &str, year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self::DatePassing {
            bill_id: bill_id.to_string(),
            date,
        })
    }

    pub fn bill(bill_id: &str, expectations: Vec<(BillAttribute, AttributeValue)>) -> Self {
        Self::Record {
            key: LookupKey::BillId(bill_id.to_string()),
            expectations,
        }
    }

    pub fn page(url: &str, expectations: Vec<(BillAttribute, AttributeValue)>) -> Self {
        Self::Record {
            key: LookupKey::BillPageUrl(url.to_string()),
            expectations,
        }
    }

    /// Number of individual assertions carried by the check.
    pub fn assertion_count(&self) -> usize {
        match self {
            Self::Record { expectations, .. } => expectations.len().max(1),
            _ => 1,
        }
    }
}

/// First mismatch of a suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionFailure {
    pub subject: String,
    pub attribute: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} expected {}, found {}",
            self.subject, self.attribute, self.expected, self.actual
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_attributes() {
        let bill = BillSnapshot {
            stages_count: Some(4),
            final_vote_for: Some(343),
            date_passing: NaiveDate::from_ymd_opt(2002, 7, 4),
            originators_count: 1,
            ..Default::default()
        };
        assert_eq!(BillAttribute::StagesCount.read(&bill), AttributeValue::Int(4));
        assert_eq!(BillAttribute::FinalVoteAgainst.read(&bill), AttributeValue::Null);
        assert_eq!(
            BillAttribute::DatePassing.read(&bill),
            AttributeValue::date(2002, 7, 4)
        );
        assert_eq!(BillAttribute::OriginatorsCount.read(&bill), AttributeValue::Int(1));
    }

    #[test]
    fn test_exact_match_is_type_sensitive() {
        assert_ne!(AttributeValue::Int(0), AttributeValue::Null);
        assert_ne!(AttributeValue::Int(1), AttributeValue::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeValue::date(2020, 3, 30).to_string(), "2020-03-30");
        assert_eq!(AttributeValue::Null.to_string(), "null");
        let failure = AssertionFailure {
            subject: "2007/T/3031".into(),
            attribute: "finalVoteFor".into(),
            expected: "343".into(),
            actual: "342".into(),
        };
        assert_eq!(
            failure.to_string(),
            "2007/T/3031: finalVoteFor expected 343, found 342"
        );
    }
}
