// Phone, email, and department-name extraction
use lazy_static::lazy_static;
use regex::Regex;

use crate::jargon::substitute_jargon;
use crate::patterns::push_deduped;

lazy_static! {
    static ref PHONE: Regex =
        Regex::new(r"\(?\d{3}\)?[\s.-]?\d{3}[-.\s]\d{4}").unwrap();
    static ref EMAIL: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    // "Planning Department", "Zoning Board of Appeals"
    static ref DEPARTMENT_SUFFIX: Regex = Regex::new(
        r"(?:[A-Z][A-Za-z]+\s+)+(?:Department|Division|Office|Bureau|Commission|Board)(?:\s+of\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*)?"
    )
    .unwrap();
    // "Office of Community Development"
    static ref OFFICE_OF: Regex = Regex::new(
        r"\b(?:Department|Office|Bureau|Division)\s+of\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*"
    )
    .unwrap();
    // capitalized phrase right after a contact verb
    static ref AFTER_CONTACT_VERB: Regex = Regex::new(
        r"(?i:contact|call|visit|email)\s+(?i:the\s+)?([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)+)"
    )
    .unwrap();
}

/// Phone numbers, email addresses, and department names, in source order
pub fn extract_contacts(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();

    for m in PHONE.find_iter(text) {
        found.push((m.start(), m.as_str().to_string()));
    }
    for m in EMAIL.find_iter(text) {
        found.push((m.start(), m.as_str().to_string()));
    }
    for m in DEPARTMENT_SUFFIX.find_iter(text) {
        found.push((m.start(), m.as_str().trim().to_string()));
    }
    for m in OFFICE_OF.find_iter(text) {
        found.push((m.start(), m.as_str().trim().to_string()));
    }
    for caps in AFTER_CONTACT_VERB.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            found.push((m.start(), m.as_str().trim().to_string()));
        }
    }

    found.sort_by_key(|(start, _)| *start);

    let mut contacts = Vec::new();
    for (_, value) in found {
        push_deduped(&mut contacts, substitute_jargon(&value).text);
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_phone_number() {
        let contacts = extract_contacts("Call (555) 123-4567 for details.");
        assert!(contacts.iter().any(|c| c.contains("555) 123-4567")));
    }

    #[test]
    fn test_extracts_email() {
        let contacts = extract_contacts("Questions go to permits@springfield.gov today.");
        assert_eq!(contacts, vec!["permits@springfield.gov"]);
    }

    #[test]
    fn test_extracts_department_name() {
        let contacts = extract_contacts("Contact the Planning Department at (555) 123-4567.");
        assert!(contacts.iter().any(|c| c == "Planning Department"));
        assert!(contacts.iter().any(|c| c.contains("123-4567")));
    }

    #[test]
    fn test_extracts_office_of_form() {
        let contacts = extract_contacts("File with the Office of Community Development.");
        assert_eq!(contacts, vec!["Office of Community Development"]);
    }

    #[test]
    fn test_source_order_preserved() {
        let contacts =
            extract_contacts("Email clerk@town.gov or call the Building Division at 555-867-5309.");
        assert_eq!(contacts[0], "clerk@town.gov");
        assert!(contacts[1].contains("Building Division"));
    }

    #[test]
    fn test_no_contact_content() {
        assert!(extract_contacts("Setbacks are ten feet.").is_empty());
    }
}
