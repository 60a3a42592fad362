//! Default search provider producing ordered filter keys.
//!
//! The list core consumes an ordered sequence of identity keys from whatever
//! search provider the shell wires in. This module ships a default provider
//! for shells that do not bring their own: multi-token fuzzy matching over
//! display titles, ranked by match score.
//!
//! The result feeds straight into
//! [`AlphabeticalAppList::set_search_results`](crate::AlphabeticalAppList::set_search_results),
//! which treats the order as advisory and re-sorts matches alphabetically
//! for presentation.

use std::sync::Arc;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::{AppKey, AppRecord};

/// Runs `query` against `apps` and returns matching keys in relevance order.
///
/// The query is split into whitespace tokens and lowercased; every token
/// must fuzzy-match the lowercased title for a record to qualify. Matches
/// are ranked by summed token score descending, ties broken by identity key
/// so repeated queries are deterministic.
///
/// An empty or whitespace-only query yields an empty ordered result — a
/// search that matched nothing — not "no filter".
///
/// # Examples
///
/// ```
/// use appdrawer::{search::search_apps, AppRecord};
///
/// let apps = vec![
///     AppRecord::new("com.example.mail/.Mail", 0, "Mail"),
///     AppRecord::new("com.example.maps/.Maps", 0, "Maps"),
/// ];
/// let results = search_apps("mai", &apps);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].component, "com.example.mail/.Mail");
/// ```
#[must_use]
pub fn search_apps(query: &str, apps: &[AppRecord]) -> Arc<Vec<AppKey>> {
    let _span = tracing::debug_span!("search_apps", query_len = query.len(), total = apps.len())
        .entered();

    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() {
        return Arc::new(Vec::new());
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, AppKey)> = apps
        .iter()
        .filter_map(|record| {
            let title_lower = record.title.to_lowercase();
            tokens
                .iter()
                .map(|token| matcher.fuzzy_match(&title_lower, token))
                .sum::<Option<i64>>()
                .map(|score| (score, record.key.clone()))
        })
        .collect();

    scored.sort_by(|(score_a, key_a), (score_b, key_b)| {
        score_b.cmp(score_a).then_with(|| key_a.cmp(key_b))
    });

    tracing::debug!(matches = scored.len(), "search complete");

    Arc::new(scored.into_iter().map(|(_, key)| key).collect())
}
