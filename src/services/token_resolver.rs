use crate::models::{command::LookupKey, token::TokenIndexEntry};

/// Outcome of a keyed lookup against the token listing.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Single(&'a TokenIndexEntry),
    /// Several tokens share the symbol; no detail is fetched for any of them.
    Multiple(Vec<&'a TokenIndexEntry>),
    NotFound,
}

fn field(entry: &TokenIndexEntry, key: LookupKey) -> &str {
    match key {
        LookupKey::Symbol => &entry.symbol,
        LookupKey::Name => &entry.name,
    }
}

fn matches(entry: &TokenIndexEntry, key: LookupKey, value: &str) -> bool {
    field(entry, key).to_lowercase() == value.to_lowercase()
}

/// First entry whose symbol equals `symbol`, ignoring case.
pub fn find_by_symbol<'a>(
    index: &'a [TokenIndexEntry],
    symbol: &str,
) -> Option<&'a TokenIndexEntry> {
    index
        .iter()
        .find(|entry| matches(entry, LookupKey::Symbol, symbol))
}

pub fn resolve<'a>(index: &'a [TokenIndexEntry], key: LookupKey, value: &str) -> Resolution<'a> {
    if key == LookupKey::Symbol {
        let found: Vec<&TokenIndexEntry> = index
            .iter()
            .filter(|entry| matches(entry, LookupKey::Symbol, value))
            .collect();
        if found.len() > 1 {
            return Resolution::Multiple(found);
        }
    }

    match index.iter().find(|entry| matches(entry, key, value)) {
        Some(entry) => Resolution::Single(entry),
        None => Resolution::NotFound,
    }
}
