//! Zoning-district abbreviation table and inline annotation

use lazy_static::lazy_static;
use regex::Regex;

/// Common zoning-district abbreviations mapped to their full meaning
pub const ZONING_CODES: &[(&str, &str)] = &[
    ("R-1", "single-family residential"),
    ("R-2", "two-family residential (duplexes)"),
    ("R-3", "multi-family residential (apartments)"),
    ("R-4", "high-density residential"),
    ("C-1", "neighborhood commercial"),
    ("C-2", "general commercial"),
    ("C-3", "central business district"),
    ("M-1", "light industrial"),
    ("M-2", "heavy industrial"),
    ("A-1", "agricultural"),
    ("O-1", "office and professional"),
    ("PUD", "planned unit development"),
    ("MU", "mixed use"),
];

lazy_static! {
    /// Zone designators as they appear in ordinance text ("R-1", "PUD")
    static ref ZONE_CODE: Regex = Regex::new(r"\b([A-Z]{1,2}-\d|PUD|MU)\b").unwrap();
}

/// Look up the full meaning of a zoning abbreviation
pub fn lookup_zone_code(code: &str) -> Option<&'static str> {
    ZONING_CODES
        .iter()
        .find(|(abbrev, _)| *abbrev == code)
        .map(|(_, meaning)| *meaning)
}

/// Result of a zone-code annotation pass
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePass {
    /// Text with each known zone code followed by its meaning
    pub text: String,
    /// Distinct codes recognized, in first-encountered order
    pub matched: Vec<&'static str>,
}

/// Annotate every known zoning abbreviation with its full meaning, e.g.
/// "R-1" becomes "R-1 (single-family residential)". Unknown designators
/// are left untouched.
pub fn annotate_zone_codes(text: &str) -> ZonePass {
    let mut out = String::with_capacity(text.len());
    let mut matched: Vec<&'static str> = Vec::new();
    let mut cursor = 0;

    for m in ZONE_CODE.find_iter(text) {
        let Some((key, meaning)) = ZONING_CODES
            .iter()
            .find(|(abbrev, _)| *abbrev == m.as_str())
            .copied()
        else {
            continue;
        };
        out.push_str(&text[cursor..m.end()]);
        out.push_str(" (");
        out.push_str(meaning);
        out.push(')');
        cursor = m.end();

        if !matched.contains(&key) {
            matched.push(key);
        }
    }
    out.push_str(&text[cursor..]);

    ZonePass { text: out, matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_known_code() {
        assert_eq!(lookup_zone_code("R-1"), Some("single-family residential"));
        assert_eq!(lookup_zone_code("M-2"), Some("heavy industrial"));
        assert_eq!(lookup_zone_code("Z-9"), None);
    }

    #[test]
    fn test_annotates_zone_code() {
        let pass = annotate_zone_codes("This parcel is zoned R-1 under the ordinance.");
        assert_eq!(
            pass.text,
            "This parcel is zoned R-1 (single-family residential) under the ordinance."
        );
        assert_eq!(pass.matched, vec!["R-1"]);
    }

    #[test]
    fn test_unknown_designator_untouched() {
        let pass = annotate_zone_codes("Zoned X-7 pending review.");
        assert_eq!(pass.text, "Zoned X-7 pending review.");
        assert!(pass.matched.is_empty());
    }

    #[test]
    fn test_repeat_code_counted_once() {
        let pass = annotate_zone_codes("R-1 lots abut other R-1 lots.");
        assert_eq!(pass.matched, vec!["R-1"]);
        assert_eq!(pass.text.matches("single-family residential").count(), 2);
    }
}
