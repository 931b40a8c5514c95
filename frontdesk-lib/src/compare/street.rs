//! Street address canonicalization for comparison

/// Abbreviation tokens stripped from the end of the street-name portion,
/// checked in this order.
const STREET_ABBREVIATIONS: [&str; 3] = ["straße", "strasse", "str"];

/// Canonicalizes a street address for equality comparison.
///
/// The address is split at the first ASCII digit into a name portion and a
/// house-number portion. The name loses whitespace, hyphens and periods,
/// is lowercased, and a single trailing street abbreviation is removed;
/// the house number loses the same separator characters but keeps its
/// case. The two halves are rejoined, so `"Haupt Str. 12"` and
/// `"Hauptstraße 12"` both canonicalize to `"haupt12"`.
///
/// Absent input stays absent.
pub fn sanitize_for_comparison(street: Option<&str>) -> Option<String> {
    let street = street?;

    let number_start = street
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(street.len());
    let (name_raw, number_raw) = street.split_at(number_start);

    let mut name = strip_separators(name_raw).to_lowercase();
    for abbreviation in STREET_ABBREVIATIONS {
        if let Some(stripped) = name.strip_suffix(abbreviation) {
            name.truncate(stripped.len());
        }
    }

    Some(name + &strip_separators(number_raw))
}

/// Removes whitespace, hyphen and period characters.
fn strip_separators(part: &str) -> String {
    part.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .collect()
}
