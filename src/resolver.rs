//! Turns a launcher query into at most one status code result.

use crate::catalog;
use crate::types::{Query, QueryResult, ReferenceType, StatusEntry, RESULT_SCORE};

/// Shortest search text that is looked up at all.
pub const MIN_SEARCH_LEN: usize = 3;

/// Base of the MDN status code pages; the code is appended.
pub const MDN_STATUS_BASE_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/";

/// Guards that keep noisy input out of the launcher's result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverPolicy {
    /// Searches with fewer characters than this produce no result.
    pub min_search_len: usize,
    /// When set, global queries (no action keyword) produce no result.
    pub require_action_keyword: bool,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            min_search_len: MIN_SEARCH_LEN,
            require_action_keyword: true,
        }
    }
}

/// Resolves `query` with the default policy.
pub fn resolve(query: &Query, preference: ReferenceType, icon_path: &str) -> Vec<QueryResult> {
    resolve_with(&ResolverPolicy::default(), query, preference, icon_path)
}

/// Resolves `query` against the catalog.
///
/// Returns an empty vector when the policy suppresses the query or the
/// code is unknown; otherwise exactly one result.
pub fn resolve_with(
    policy: &ResolverPolicy,
    query: &Query,
    preference: ReferenceType,
    icon_path: &str,
) -> Vec<QueryResult> {
    if query.search.is_empty()
        || (policy.require_action_keyword && query.is_global())
        || query.search.chars().count() < policy.min_search_len
    {
        return Vec::new();
    }

    match catalog::lookup(&query.search) {
        Some(entry) => vec![build_result(entry, preference, icon_path)],
        None => Vec::new(),
    }
}

/// Returns the documentation URL for `entry` under `preference`.
pub fn reference_url(entry: &StatusEntry, preference: ReferenceType) -> String {
    match preference {
        ReferenceType::Rfc => entry.rfc_url.to_string(),
        ReferenceType::Mdn => format!("{}{}", MDN_STATUS_BASE_URL, entry.code),
    }
}

fn build_result(entry: &StatusEntry, preference: ReferenceType, icon_path: &str) -> QueryResult {
    QueryResult {
        title: format!("{} {}", entry.code, entry.reason_phrase),
        subtitle: entry.summary.to_string(),
        icon_path: icon_path.to_string(),
        target_url: reference_url(entry, preference),
        score: RESULT_SCORE,
    }
}
