//! Municipal jargon dictionary and plain-English substitution

use lazy_static::lazy_static;

/// Jargon terms mapped to their plain-English glosses.
///
/// Matching is case-insensitive and longest-phrase-first, so multi-word
/// entries win over any shorter term they contain.
pub const MUNICIPAL_JARGON: &[(&str, &str)] = &[
    // Zoning terms
    (
        "conditional use permit",
        "special permission needed (requires application and possibly a hearing)",
    ),
    ("variance", "exception to the normal rules (hard to get)"),
    (
        "non-conforming use",
        "something that was legal before but isn't now (usually can continue)",
    ),
    (
        "setback requirements",
        "how far from property lines you must build",
    ),
    (
        "floor area ratio",
        "limits on how big your building can be compared to your lot size",
    ),
    ("density restrictions", "limits on how many units you can have"),
    ("height restrictions", "maximum height allowed for buildings"),
    (
        "lot coverage",
        "percentage of your lot that can have buildings on it",
    ),
    (
        "accessory dwelling unit",
        "small apartment or guest house on your property",
    ),
    (
        "planned unit development",
        "special development with relaxed rules",
    ),
    // Building codes
    (
        "certificate of occupancy",
        "official permission to live in or use a building",
    ),
    ("building permit", "permission to construct or renovate"),
    ("right of way", "public property (usually for roads/utilities)"),
    (
        "easement",
        "someone else has rights to use part of your property",
    ),
    ("egress requirements", "rules about exits and escape routes"),
    ("fire separation", "walls that slow down fire spread"),
    ("structural load", "how much weight a building can safely hold"),
    (
        "code compliance",
        "meets all the safety and legal requirements",
    ),
    // Administrative terms
    (
        "public hearing",
        "meeting where residents can speak for/against proposal",
    ),
    ("administrative review", "staff decides (no public hearing)"),
    (
        "discretionary permit",
        "decision depends on specific circumstances",
    ),
    ("ministerial permit", "automatic if you meet requirements"),
    ("site plan review", "detailed review of your construction plans"),
    ("environmental review", "study of environmental impact"),
    ("appeals process", "how to challenge a decision"),
    (
        "vested rights",
        "permission you already have that can't be taken away",
    ),
    // Fees and timing
    ("impact fees", "charges for effects on infrastructure"),
    ("processing time", "how long approval takes"),
    (
        "renewal requirements",
        "what you need to do to keep permits active",
    ),
    ("expiration date", "when permission runs out"),
    ("phased development", "building in stages over time"),
    // Business licensing
    ("business license", "permission to operate a business"),
    (
        "home occupation permit",
        "permission to run business from home",
    ),
    ("commercial use", "business or retail activity"),
    ("industrial use", "manufacturing or heavy business"),
    ("mixed use", "combination of residential and commercial"),
];

lazy_static! {
    /// Dictionary ordered longest term first (ties broken alphabetically)
    /// so substitution never corrupts a longer phrase by matching one of
    /// its substrings
    static ref JARGON_BY_LENGTH: Vec<(&'static str, &'static str)> = {
        let mut entries = MUNICIPAL_JARGON.to_vec();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        entries
    };
}

/// Result of one jargon substitution pass
#[derive(Debug, Clone, PartialEq)]
pub struct JargonPass {
    /// Text with jargon replaced by plain-English glosses
    pub text: String,
    /// Distinct terms resolved, in first-encountered order
    pub matched: Vec<&'static str>,
}

/// Replace every recognized jargon phrase with its plain-English gloss.
///
/// The first occurrence of each phrase keeps the original in parentheses
/// for traceability; later occurrences get the bare gloss. Matches are
/// non-overlapping and respect word boundaries.
pub fn substitute_jargon(text: &str) -> JargonPass {
    if text.is_empty() {
        return JargonPass {
            text: String::new(),
            matched: Vec::new(),
        };
    }

    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut spans: Vec<(usize, usize, &'static str, &'static str)> = Vec::new();

    for &(term, plain) in JARGON_BY_LENGTH.iter() {
        let mut from = 0;
        while let Some(rel) = lower[from..].find(term) {
            let start = from + rel;
            let end = start + term.len();
            let on_boundary = (start == 0 || !bytes[start - 1].is_ascii_alphanumeric())
                && (end == bytes.len() || !bytes[end].is_ascii_alphanumeric());
            let overlaps = spans.iter().any(|&(s, e, _, _)| start < e && s < end);
            if on_boundary && !overlaps {
                spans.push((start, end, term, plain));
                from = end;
            } else {
                from = start + 1;
            }
        }
    }

    spans.sort_by_key(|&(start, _, _, _)| start);

    let mut out = String::with_capacity(text.len());
    let mut matched: Vec<&'static str> = Vec::new();
    let mut cursor = 0;
    for (start, end, term, plain) in spans {
        out.push_str(&text[cursor..start]);
        if matched.contains(&term) {
            out.push_str(plain);
        } else {
            matched.push(term);
            out.push_str(plain);
            out.push_str(" (originally: '");
            out.push_str(term);
            out.push_str("')");
        }
        cursor = end;
    }
    out.push_str(&text[cursor..]);

    JargonPass { text: out, matched }
}
