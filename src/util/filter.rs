//! Shared list-filtering predicates for the public catalogue pages.
//!
//! DESIGN
//! ======
//! Projects, skills, experience, and education all filter the same way:
//! case-insensitive substring search over a handful of text fields plus an
//! exact category match. Keeping both predicates here means the pages share
//! one set of semantics instead of four hand-rolled copies.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Sentinel category that matches every item.
pub const ALL_CATEGORY: &str = "All";

/// Case-insensitive substring match across multiple text fields.
/// A blank term matches everything.
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Exact category match. An empty selection or [`ALL_CATEGORY`] matches
/// every item.
pub fn matches_category(category: &str, selected: &str) -> bool {
    selected.is_empty() || selected == ALL_CATEGORY || category == selected
}
