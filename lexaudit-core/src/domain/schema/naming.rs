// lexaudit-core/src/domain/schema/naming.rs
//
// Identifier conventions shared by column and table derivation.

use regex::Regex;
use std::sync::OnceLock;

fn re_acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap_or_else(|_| {
            // Hardcoded pattern, cannot fail. Fallback matches nothing.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

fn re_word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([a-z])([A-Z])")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

fn re_plain_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// `committeeHearingCount` -> `committee_hearing_count`, `IAText` -> `ia_text`.
///
/// Total and idempotent: the output holds no upper-case letter, so a second
/// pass finds no boundary to split.
pub fn snake_case(name: &str) -> String {
    let split = re_acronym_boundary().replace_all(name, "${1}_${2}");
    let split = re_word_boundary().replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}

/// Table backing an embedded type: snake case, naive plural.
pub fn table_name(type_name: &str) -> String {
    format!("{}s", snake_case(type_name))
}

/// Whether `ident` can be used as a bare SQL identifier.
pub fn is_plain_identifier(ident: &str) -> bool {
    re_plain_identifier().is_match(ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_camel() {
        assert_eq!(snake_case("committeeHearingCount"), "committee_hearing_count");
        assert_eq!(snake_case("finalVoteAbst"), "final_vote_abst");
        assert_eq!(snake_case("id"), "id");
    }

    #[test]
    fn test_snake_case_pascal_and_acronyms() {
        assert_eq!(snake_case("LegislativeStage"), "legislative_stage");
        assert_eq!(snake_case("IAText"), "ia_text");
        assert_eq!(snake_case("billTextURL"), "bill_text_url");
        // digits do not open a word, matching the store's naming strategy
        assert_eq!(snake_case("stage2Date"), "stage2date");
        assert_eq!(snake_case("stage2date"), "stage2date");
    }

    #[test]
    fn test_snake_case_is_idempotent() {
        for name in [
            "committeeHearingCount",
            "LegislativeStage",
            "IAText",
            "already_snake",
            "",
            "ÁrvíztűrőTükörfúrógép",
        ] {
            let once = snake_case(name);
            assert_eq!(snake_case(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_table_name() {
        assert_eq!(table_name("Committee"), "committees");
        assert_eq!(table_name("LegislativeStage"), "legislative_stages");
        assert_eq!(table_name("Originator"), "originators");
    }

    #[test]
    fn test_plain_identifier() {
        assert!(is_plain_identifier("bill_main_table"));
        assert!(is_plain_identifier("_x1"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("1abc"));
        assert!(!is_plain_identifier("name; DROP TABLE x"));
    }
}
