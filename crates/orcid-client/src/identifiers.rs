//! Identifier validation and resolver links
//!
//! The feed carries external identifiers of many schemes (DOI, EID,
//! bibcode, ...). Only the DOI scheme is consumed here, recognized by
//! its `10.` registrant prefix, and resolved through doi.org.

use lazy_static::lazy_static;
use regex::Regex;

/// Canonical DOI resolver prefix.
pub const DOI_RESOLVER: &str = "https://doi.org/";

lazy_static! {
    // ORCID iD format: four hyphenated blocks, 'X' allowed as check digit
    static ref ORCID_PATTERN: Regex = Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[\dX]$").unwrap();
}

/// Resolver URL for a DOI. Callers guard against empty DOIs; the URL
/// field of a record is always derived through this, never sourced.
pub fn doi_url(doi: &str) -> String {
    format!("{}{}", DOI_RESOLVER, doi)
}

/// Validate an ORCID iD: format plus the ISO 7064 mod 11-2 check digit.
pub fn is_valid_orcid_id(id: &str) -> bool {
    if !ORCID_PATTERN.is_match(id) {
        return false;
    }

    let chars: Vec<char> = id.chars().filter(|c| *c != '-').collect();
    let mut total: u32 = 0;
    for c in &chars[..15] {
        let digit = c.to_digit(10).unwrap_or(0);
        total = (total + digit) * 2;
    }

    let result = (12 - total % 11) % 11;
    let expected = if result == 10 {
        'X'
    } else {
        char::from_digit(result, 10).unwrap_or('0')
    };

    chars[15] == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0000-0002-1825-0097")]
    #[case("0000-0003-0775-6380")]
    #[case("0000-0002-9079-593X")]
    fn accepts_valid_ids(#[case] id: &str) {
        assert!(is_valid_orcid_id(id));
    }

    #[rstest]
    #[case("0000-0002-1825-0099")] // wrong check digit
    #[case("0000-0002-1825")] // truncated
    #[case("0000-0002-1825-00971")] // too long
    #[case("0000_0002_1825_0097")] // wrong separators
    #[case("")]
    fn rejects_invalid_ids(#[case] id: &str) {
        assert!(!is_valid_orcid_id(id));
    }

    #[test]
    fn doi_url_concatenates_resolver() {
        assert_eq!(doi_url("10.1038/nature12373"), "https://doi.org/10.1038/nature12373");
    }
}
