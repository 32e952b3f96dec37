// ABOUTME: Resolves a two-letter US state/territory code from a free-text job location.
// ABOUTME: Handles street-suffix noise, full state names, and the "NE" street-direction ambiguity.

use std::collections::HashSet;

/// State and territory codes with their full names, ordered by code.
pub const STATES: [(&str, &str); 56] = [
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Street suffixes that mark the end of the street part of an address.
///
/// "Ct" and "Mt" are left out; they collide with the CT and MT codes.
pub const STREET_SUFFIXES: [&str; 34] = [
    "St", "Street", "Ave", "Av", "Avenue", "Blvd", "Boulevard", "Rd", "Road", "Dr", "Drive",
    "Ln", "Lane", "Way", "Pl", "Place", "Pkwy", "Parkway", "Hwy", "Highway", "Cir", "Circle",
    "Ter", "Terrace", "Trl", "Trail", "Sq", "Square", "Court", "Plz", "Plaza", "Expy", "Fwy",
    "Freeway",
];

/// Extracts a state code from a location string.
///
/// Returns `None` for a missing or empty location, when nothing matches,
/// and when more than one candidate survives (the ambiguous case is logged).
pub fn state_code(location: Option<&str>) -> Option<&'static str> {
    let original = location?;
    if original.trim().is_empty() {
        return None;
    }

    let addr = original.replace(" in ", " ");
    let stripped: String = addr.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let remainder = after_street(&stripped);

    let tokens: HashSet<&str> = remainder.split_whitespace().collect();
    let mut candidates: Vec<&'static str> = STATES
        .iter()
        .filter(|(code, _)| tokens.contains(code))
        .map(|(code, _)| *code)
        .collect();

    if candidates.is_empty() {
        let lower = remainder.to_lowercase();
        candidates = STATES
            .iter()
            .filter(|(_, name)| lower.contains(&name.to_lowercase()))
            .map(|(code, _)| *code)
            .collect();
    }

    // NE next to a real code is a street direction, not Nebraska
    if candidates.len() > 1 {
        candidates.retain(|code| *code != "NE");
    }

    match candidates.as_slice() {
        [code] => Some(*code),
        [] => None,
        _ => {
            tracing::warn!(location = %original, candidates = ?candidates, "ambiguous state match");
            None
        }
    }
}

/// Returns the part of the address after its street suffix.
///
/// Only a single suffix truncates. With several suffixes the rightmost one
/// is reported but the whole address is kept, matching the behaviour of the
/// datasets already on disk.
fn after_street(addr: &str) -> &str {
    // ASCII lowering keeps byte offsets aligned with `addr`
    let lower = addr.to_ascii_lowercase();
    let hits: Vec<(usize, &str)> = STREET_SUFFIXES
        .iter()
        .filter_map(|sfx| {
            let needle = format!(" {} ", sfx.to_ascii_lowercase());
            lower.find(&needle).map(|idx| (idx, *sfx))
        })
        .collect();

    match hits.as_slice() {
        [] => addr,
        [(idx, sfx)] => &addr[idx + sfx.len() + 1..],
        _ => {
            let rightmost = hits.iter().max_by_key(|(idx, _)| *idx).map(|(_, sfx)| *sfx);
            tracing::debug!(
                address = %addr,
                ?rightmost,
                "multiple street suffixes, keeping full address"
            );
            addr
        }
    }
}
