use serde::{Deserialize, Serialize};

/// One entry of the country selector: the stored value and the text shown for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CountryOption {
    /// ISO 3166-1 alpha-2 code, the value kept in the form record
    pub value: String,
    pub label: String,
}

impl CountryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Country code to display name, in display order.
pub const COUNTRY_OPTIONS: &[(&str, &str)] = &[
    ("AR", "Argentina"),
    ("AU", "Australia"),
    ("AT", "Austria"),
    ("BD", "Bangladesh"),
    ("BE", "Belgium"),
    ("BR", "Brazil"),
    ("BG", "Bulgaria"),
    ("CA", "Canada"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("HR", "Croatia"),
    ("CZ", "Czechia"),
    ("DK", "Denmark"),
    ("EG", "Egypt"),
    ("EE", "Estonia"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("GH", "Ghana"),
    ("GR", "Greece"),
    ("HK", "Hong Kong"),
    ("HU", "Hungary"),
    ("IS", "Iceland"),
    ("IN", "India"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KR", "Korea, Republic of"),
    ("LV", "Latvia"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("MY", "Malaysia"),
    ("MX", "Mexico"),
    ("MA", "Morocco"),
    ("NL", "Netherlands"),
    ("NZ", "New Zealand"),
    ("NG", "Nigeria"),
    ("NO", "Norway"),
    ("PK", "Pakistan"),
    ("PE", "Peru"),
    ("PH", "Philippines"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SA", "Saudi Arabia"),
    ("RS", "Serbia"),
    ("SG", "Singapore"),
    ("SK", "Slovakia"),
    ("SI", "Slovenia"),
    ("ZA", "South Africa"),
    ("ES", "Spain"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("TW", "Taiwan"),
    ("TH", "Thailand"),
    ("TR", "Türkiye"),
    ("UA", "Ukraine"),
    ("AE", "United Arab Emirates"),
    ("GB", "United Kingdom"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("VN", "Viet Nam"),
];

/// All selector options built from [`COUNTRY_OPTIONS`].
pub fn country_options() -> Vec<CountryOption> {
    COUNTRY_OPTIONS
        .iter()
        .map(|(value, label)| CountryOption::new(*value, *label))
        .collect()
}

/// Look up the option for a stored country code.
pub fn find_country(value: &str) -> Option<CountryOption> {
    COUNTRY_OPTIONS
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(code, label)| CountryOption::new(*code, *label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_country_codes_are_unique_alpha2() {
        let mut seen = HashSet::new();
        for (code, label) in COUNTRY_OPTIONS {
            assert_eq!(code.len(), 2, "{} is not a two letter code", code);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(!label.is_empty());
            assert!(seen.insert(*code), "duplicate code {}", code);
        }
    }

    #[test]
    fn test_find_country() {
        let us = find_country("US").unwrap();
        assert_eq!(us.label, "United States");
        assert!(find_country("XX").is_none());
        assert!(find_country("").is_none());
    }

    #[test]
    fn test_country_options_matches_table() {
        assert_eq!(country_options().len(), COUNTRY_OPTIONS.len());
    }
}
