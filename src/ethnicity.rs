use tracing::warn;

/// All defined single-letter ethnicity codes and their category labels.
/// `'Z'` is a sentinel meaning "no data" and is deliberately absent.
pub const CODED_ETHNICITIES: [(&str, &str); 17] = [
    ("A", "African-American / Black"),
    ("B", "Japanese / Japanese-American"),
    ("C", "American Indian / Alaska Native"),
    ("D", "Other"),
    ("E", "Mexican / Mexican-American / Chicano"),
    ("F", "White / Caucasian"),
    ("G", "Declined to state"),
    ("H", "Chinese / Chinese-American"),
    ("I", "Other Spanish-American / Latino"),
    ("L", "Filipino / Filipino-American"),
    ("M", "Pacific Islander"),
    ("P", "Puerto Rican"),
    ("R", "East Indian / Pakistani"),
    ("T", "Thai / Other Asian"),
    ("V", "Vietnamese"),
    ("X", "Korean / Korean-American"),
    ("Y", "Other Asian"),
];

/// Translates a raw CoE ethnicity code to its category label.
///
/// An unrecognized non-empty, non-sentinel code is a data-quality event, not
/// an error: it is logged and the record simply matches no ethnicity filter.
pub fn translate(code: &str) -> Option<&'static str> {
    match CODED_ETHNICITIES.iter().find(|(c, _)| *c == code) {
        Some((_, label)) => Some(*label),
        None => {
            if !code.is_empty() && code != "Z" {
                warn!("unrecognized ethnicity '{code}'");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_code_maps_to_a_unique_label() {
        let labels: HashSet<&str> = CODED_ETHNICITIES.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels.len(), CODED_ETHNICITIES.len());
        for (code, label) in CODED_ETHNICITIES {
            assert_eq!(translate(code), Some(label));
        }
    }

    #[test]
    fn unknown_and_sentinel_codes_yield_no_label() {
        assert_eq!(translate("Q"), None);
        assert_eq!(translate("Z"), None);
        assert_eq!(translate(""), None);
    }
}
