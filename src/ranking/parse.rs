use crate::domain::Listing;
use std::collections::HashSet;

/// Splits a completion into address tokens: `;`-separated, trimmed, empty
/// segments dropped, literal periods stripped.
pub fn parse_addresses(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.replace('.', ""))
        .collect()
}

/// Maps tokens onto unplaced listings by exact, case-sensitive address.
///
/// Tokens that match nothing are dropped. A listing named twice keeps its
/// first position.
pub fn match_addresses(tokens: &[String], unplaced: &[Listing]) -> Vec<Listing> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::with_capacity(tokens.len());

    for token in tokens {
        let Some(listing) = unplaced.iter().find(|l| l.address == *token) else {
            tracing::debug!(token = %token, "ranked address matched no listing");
            continue;
        };
        if seen.insert(listing.url.as_str()) {
            ordered.push(listing.clone());
        }
    }

    ordered
}
