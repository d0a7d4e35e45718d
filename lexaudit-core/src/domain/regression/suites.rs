// lexaudit-core/src/domain/regression/suites.rs
//
// Hand-verified values of historical records. Every entry here was checked
// against the parliament's own pages once; a later mismatch means a collector
// change broke previously good data.

use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::regression::RegressionSuite;
use crate::domain::regression::assertion::{
    AttributeValue as V, BillAttribute as A, Check, ConsistencyRule,
};

pub fn suite_for(jurisdiction: Jurisdiction) -> RegressionSuite {
    let checks = match jurisdiction {
        Jurisdiction::Hungary => hungary(),
        Jurisdiction::India => india(),
        Jurisdiction::Sweden => sweden(),
        _ => Vec::new(),
    };
    RegressionSuite {
        jurisdiction,
        checks,
    }
}

fn hungary() -> Vec<Check> {
    let mut checks: Vec<Check> = [
        Check::date_passing("2002/T/65", 2002, 7, 4),
        Check::date_passing("2008/T/5827", 2008, 6, 26),
        Check::date_passing("2020/T/9475", 2020, 3, 30),
        Check::date_passing("2009/T/9981", 2009, 7, 2),
        Check::date_passing("2020/T/10309", 2020, 5, 27),
        Check::date_passing("2020/T/10310", 2020, 6, 8),
        Check::date_passing("2020/T/10311", 2020, 6, 8),
        Check::date_passing("2009/T/11083", 2009, 12, 21),
    ]
    .into_iter()
    .flatten()
    .collect();

    checks.extend([
        Check::bill(
            "2007/T/3031",
            vec![
                (A::StagesCount, V::Int(4)),
                (A::FinalVoteFor, V::Int(343)),
                (A::FinalVoteAgainst, V::Int(0)),
                (A::FinalVoteAbst, V::Int(0)),
            ],
        ),
        Check::bill(
            "2008/T/5827",
            vec![
                (A::CommitteeCount, V::Int(1)),
                (A::FinalVoteFor, V::Int(352)),
                (A::FinalVoteAgainst, V::Int(0)),
                (A::FinalVoteAbst, V::Int(0)),
            ],
        ),
        Check::bill(
            "2009/T/11083",
            vec![
                (A::CommitteeCount, V::Int(5)),
                (A::FinalVoteFor, V::Int(175)),
                (A::FinalVoteAgainst, V::Int(163)),
                (A::FinalVoteAbst, V::Int(4)),
                (A::StagesCount, V::Int(4)),
            ],
        ),
        Check::bill(
            "2009/T/9981",
            vec![
                (A::CommitteeCount, V::Int(1)),
                (A::FinalVoteFor, V::Int(347)),
                (A::FinalVoteAgainst, V::Int(14)),
                (A::FinalVoteAbst, V::Int(0)),
            ],
        ),
        Check::bill(
            "T/17427",
            vec![
                (A::CommitteeHearingCount, V::Int(1)),
                (A::OriginatorsCount, V::Int(1)),
            ],
        ),
    ]);

    checks
}

fn india() -> Vec<Check> {
    vec![
        Check::Consistency(ConsistencyRule::AmendingLawsModifiedByOthers),
        Check::Consistency(ConsistencyRule::OriginalLawsModifyingOthers),
        Check::Consistency(ConsistencyRule::RejectedBillsWithLawLinks),
        Check::Consistency(ConsistencyRule::PassedAmendingBillsNotModifyingOneLaw),
        Check::bill(
            "3 of 1958",
            vec![
                (A::ModifiedLawsCount, V::Int(0)),
                (A::AffectingLawsCount, V::Int(14)),
                (A::AffectingLawsFirstDate, V::date(1966, 8, 31)),
            ],
        ),
        Check::bill(
            "135 of 1999",
            vec![
                (A::ModifiedLawsCount, V::Int(0)),
                (A::AffectingLawsCount, V::Int(1)),
                (A::AffectingLawsFirstDate, V::date(2009, 2, 5)),
            ],
        ),
        Check::bill(
            "96 of 2006",
            vec![
                (A::ModifiedLawsCount, V::Int(1)),
                (A::AffectingLawsCount, V::Int(0)),
                (A::AffectingLawsFirstDate, V::Null),
            ],
        ),
        Check::bill(
            "116 of 2005",
            vec![
                (A::ModifiedLawsCount, V::Int(0)),
                (A::AffectingLawsCount, V::Null),
                (A::AffectingLawsFirstDate, V::Null),
            ],
        ),
        Check::bill(
            "82 of 1987",
            vec![
                (A::ModifiedLawsCount, V::Int(0)),
                (A::AffectingLawsCount, V::Int(2)),
                (A::AffectingLawsFirstDate, V::date(1994, 10, 29)),
            ],
        ),
    ]
}

const RIKSDAGEN_PROPOSITIONS: &str =
    "https://www.riksdagen.se/sv/dokument-och-lagar/dokument/proposition";

fn sweden() -> Vec<Check> {
    let page = |slug: &str, attribute: A, expected: V| {
        Check::page(
            &format!("{}/{}/", RIKSDAGEN_PROPOSITIONS, slug),
            vec![(attribute, expected)],
        )
    };

    vec![
        page(
            "budgetpropositionen-for-2023_ha031",
            A::DateIntroduction,
            V::date(2022, 11, 3),
        ),
        page(
            "kvalificerad-yrkesutbildning-som_gt0374",
            A::DateIntroduction,
            V::date(2006, 3, 16),
        ),
        page(
            "forstarkt-tilltradesforbud-vid-idrottsarrangemang_h10368",
            A::OriginalLaw,
            V::Bool(false),
        ),
        page(
            "sanktionsavgift-for-overtradelse-av-bestammelserna_h103234",
            A::OriginalLaw,
            V::Bool(false),
        ),
        page(
            "ett-likviditetsverktyg-for-fonder_ha0365",
            A::OriginalLaw,
            V::Bool(false),
        ),
        page(
            "varandringsbudget-for-2023_ha0399",
            A::OriginalLaw,
            V::Bool(false),
        ),
        page(
            "egs-andra-forenklingsdirektiv-och-den-svenska_gj0358",
            A::DateIntroduction,
            V::date(1995, 10, 19),
        ),
        page(
            "budgetpropositionen-for-2019_h6031",
            A::DateIntroduction,
            V::date(2018, 11, 9),
        ),
        page(
            "dubbelbeskattningsavtal-mellan-sverige-och_gm0382",
            A::DateIntroduction,
            V::date(1999, 3, 8),
        ),
    ]
}
