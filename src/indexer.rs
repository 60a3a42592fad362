//! Locale-aware section label computation with per-title memoization.
//!
//! The [`SectionIndexer`] maps a display title to the fast-scroll section
//! label it files under: the uppercased first letter for alphabetic titles,
//! `#` for titles starting with a digit, and `∙` for everything else.
//!
//! Labels are cached per distinct title string. Titles are effectively
//! immutable per identity key, so entries are never invalidated individually;
//! only a locale change clears the cache, because label computation depends
//! on the active display locale.

use std::collections::HashMap;

use crate::domain::DisplayLocale;

/// Section label for titles that start with a digit.
const NUMERIC_SECTION: &str = "#";

/// Section label for empty titles and titles that start with a symbol.
const SYMBOL_SECTION: &str = "∙";

/// Computes and caches section labels for display titles.
///
/// # Examples
///
/// ```
/// use appdrawer::{DisplayLocale, SectionIndexer};
///
/// let mut indexer = SectionIndexer::new(DisplayLocale::default());
/// assert_eq!(indexer.label_for("maps"), "M");
/// assert_eq!(indexer.label_for("7zip"), "#");
/// assert_eq!(indexer.label_for("→launch"), "∙");
/// ```
#[derive(Debug, Clone)]
pub struct SectionIndexer {
    locale: DisplayLocale,
    cache: HashMap<String, String>,
}

impl SectionIndexer {
    /// Creates an indexer for the given display locale with an empty cache.
    #[must_use]
    pub fn new(locale: DisplayLocale) -> Self {
        Self {
            locale,
            cache: HashMap::new(),
        }
    }

    /// Returns the active display locale.
    #[must_use]
    pub fn locale(&self) -> &DisplayLocale {
        &self.locale
    }

    /// Returns the cached section label for `title`, computing and caching
    /// it on first sight.
    pub fn label_for(&mut self, title: &str) -> String {
        if let Some(label) = self.cache.get(title) {
            return label.clone();
        }
        let label = Self::compute_label(title);
        self.cache.insert(title.to_string(), label.clone());
        label
    }

    /// Replaces the active locale and clears the label cache.
    ///
    /// Label computation is locale-dependent, so stale entries would be a
    /// correctness bug after a locale switch. Callers that own a list should
    /// go through the list's own locale hook, which also re-sorts.
    pub fn on_locale_changed(&mut self, locale: DisplayLocale) {
        tracing::debug!(
            cached_titles = self.cache.len(),
            language = locale.language(),
            "locale changed, clearing section cache"
        );
        self.locale = locale;
        self.cache.clear();
    }

    /// Number of distinct titles currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn compute_label(title: &str) -> String {
        match title.trim_start().chars().next() {
            Some(c) if c.is_numeric() => NUMERIC_SECTION.to_string(),
            Some(c) if c.is_alphabetic() => c.to_uppercase().collect(),
            _ => SYMBOL_SECTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexer() -> SectionIndexer {
        SectionIndexer::new(DisplayLocale::default())
    }

    #[test]
    fn uppercases_leading_letter() {
        let mut idx = indexer();
        assert_eq!(idx.label_for("calendar"), "C");
        assert_eq!(idx.label_for("Calendar"), "C");
        assert_eq!(idx.label_for("émile"), "É");
    }

    #[test]
    fn digits_file_under_hash() {
        let mut idx = indexer();
        assert_eq!(idx.label_for("7zip"), "#");
        assert_eq!(idx.label_for("１Password"), "#");
    }

    #[test]
    fn symbols_and_empty_file_under_dot() {
        let mut idx = indexer();
        assert_eq!(idx.label_for(""), "∙");
        assert_eq!(idx.label_for("   "), "∙");
        assert_eq!(idx.label_for("→launch"), "∙");
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        let mut idx = indexer();
        assert_eq!(idx.label_for("  maps"), "M");
    }

    #[test]
    fn labels_are_cached_per_title() {
        let mut idx = indexer();
        idx.label_for("Maps");
        idx.label_for("Maps");
        idx.label_for("Mail");
        assert_eq!(idx.cached_len(), 2);
    }

    #[test]
    fn locale_change_clears_cache() {
        let mut idx = indexer();
        idx.label_for("Maps");
        idx.on_locale_changed(DisplayLocale::from_tag("zh-CN").unwrap());
        assert_eq!(idx.cached_len(), 0);
        assert!(idx.locale().requires_section_sorting());
    }
}
