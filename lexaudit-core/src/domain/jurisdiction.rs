// lexaudit-core/src/domain/jurisdiction.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Country whose parliament a record was collected from.
/// Stored upper-case in the `country` column of every top-level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Jurisdiction {
    Australia,
    Bulgaria,
    Brazil,
    Chile,
    Colombia,
    Georgia,
    Hungary,
    India,
    Jordan,
    Poland,
    Russia,
    SouthAfrica,
    Sweden,
    Uk,
    Usa,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 15] = [
        Self::Australia,
        Self::Bulgaria,
        Self::Brazil,
        Self::Chile,
        Self::Colombia,
        Self::Georgia,
        Self::Hungary,
        Self::India,
        Self::Jordan,
        Self::Poland,
        Self::Russia,
        Self::SouthAfrica,
        Self::Sweden,
        Self::Uk,
        Self::Usa,
    ];

    /// Value of the `country` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Australia => "AUSTRALIA",
            Self::Bulgaria => "BULGARIA",
            Self::Brazil => "BRAZIL",
            Self::Chile => "CHILE",
            Self::Colombia => "COLOMBIA",
            Self::Georgia => "GEORGIA",
            Self::Hungary => "HUNGARY",
            Self::India => "INDIA",
            Self::Jordan => "JORDAN",
            Self::Poland => "POLAND",
            Self::Russia => "RUSSIA",
            Self::SouthAfrica => "SOUTH_AFRICA",
            Self::Sweden => "SWEDEN",
            Self::Uk => "UK",
            Self::Usa => "USA",
        }
    }

    /// Short code used by the collectors (HU, SW, USA...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Australia => "AU",
            Self::Bulgaria => "BG",
            Self::Brazil => "BR",
            Self::Chile => "CH",
            Self::Colombia => "CO",
            Self::Georgia => "GE",
            Self::Hungary => "HU",
            Self::India => "IN",
            Self::Jordan => "JO",
            Self::Poland => "PL",
            Self::Russia => "RU",
            Self::SouthAfrica => "SA",
            Self::Sweden => "SW",
            Self::Uk => "UK",
            Self::Usa => "USA",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|j| j.as_str() == wanted || j.code() == wanted)
            .ok_or_else(|| DomainError::UnknownJurisdiction(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_name_and_code() {
        assert_eq!("hungary".parse::<Jurisdiction>().unwrap(), Jurisdiction::Hungary);
        assert_eq!("HU".parse::<Jurisdiction>().unwrap(), Jurisdiction::Hungary);
        assert_eq!("sw".parse::<Jurisdiction>().unwrap(), Jurisdiction::Sweden);
        assert_eq!(
            "south-africa".parse::<Jurisdiction>().unwrap(),
            Jurisdiction::SouthAfrica
        );
    }

    #[test]
    fn test_unknown_jurisdiction() {
        let err = "atlantis".parse::<Jurisdiction>().unwrap_err();
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn test_serde_uses_column_value() {
        let json = serde_json::to_string(&Jurisdiction::SouthAfrica).unwrap();
        assert_eq!(json, "\"SOUTH_AFRICA\"");
        let back: Jurisdiction = serde_yaml::from_str("HUNGARY").unwrap();
        assert_eq!(back, Jurisdiction::Hungary);
    }
}
