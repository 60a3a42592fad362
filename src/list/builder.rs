//! The alphabetically sorted application list core.
//!
//! [`AlphabeticalAppList`] owns the canonical application set, the active
//! search filter, and the derived presentation state: the flat item sequence
//! and the fast-scroll section markers. Every mutation discards and rebuilds
//! the derived state in full; the rebuild is pure and total, so consumers
//! never observe a partially updated sequence.
//!
//! # Rebuild pipeline
//!
//! 1. Sort the canonical set by the ordering policy.
//! 2. For grouping locales, regroup the sorted sequence by section label
//!    (labels ordered by the section-label comparator).
//! 3. Select the source: the full sequence, or the resolved and re-sorted
//!    filter subset.
//! 4. Emit the flat sequence: leading search divider, app entries with
//!    section markers opened on label changes, then the empty-search or
//!    market tail when a filter is active.
//! 5. Walk the sequence assigning row/column indices when a positive column
//!    count is configured.
//! 6. Distribute fast-scroll touch fractions under the active strategy.
//! 7. Notify the observer exactly once.
//!
//! # Threading
//!
//! Single-threaded by contract: all mutators and the rebuild they trigger run
//! synchronously on the thread that owns the list. External producers marshal
//! their calls onto that thread before invoking mutators.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{AppKey, AppRecord, DisplayLocale};
use crate::indexer::SectionIndexer;
use crate::ordering::{compare_records, compare_section_labels};
use crate::DrawerContext;

use super::fastscroll::{distribute, FastScrollDistribution};
use super::items::{AppEntry, PresentationItem, SectionMarker};
use super::notifier::ListObserver;

/// The alphabetically sorted, sectioned, filterable application list.
///
/// # Examples
///
/// ```
/// use appdrawer::{AlphabeticalAppList, AppRecord, DrawerContext};
///
/// let mut list = AlphabeticalAppList::new(&DrawerContext::default());
/// list.replace_all(vec![
///     AppRecord::new("com.example.mail/.Mail", 0, "Mail"),
///     AppRecord::new("com.example.maps/.Maps", 0, "Maps"),
/// ]);
///
/// assert_eq!(list.app_count(), 2);
/// // Leading divider plus the two entries, one "M" section.
/// assert_eq!(list.items().len(), 3);
/// assert_eq!(list.sections().len(), 1);
/// ```
pub struct AlphabeticalAppList {
    /// Canonical set: identity key to record.
    records: HashMap<AppKey, AppRecord>,

    /// Canonical records sorted (and, for grouping locales, regrouped) by
    /// the ordering policy. Rebuilt by `on_apps_updated`.
    apps: Vec<AppRecord>,

    /// Records visible under the current filter, in presentation order.
    filtered: Vec<AppRecord>,

    /// The flat presentation sequence.
    items: Vec<PresentationItem>,

    /// Fast-scroll section markers in section order.
    sections: Vec<SectionMarker>,

    /// Ordered search results, or `None` when no filter is active.
    search_results: Option<Arc<Vec<AppKey>>>,

    indexer: SectionIndexer,
    distribution: FastScrollDistribution,
    column_count: usize,
    row_count: usize,
    observer: Option<Box<dyn ListObserver>>,
}

impl AlphabeticalAppList {
    /// Creates an empty list for the given context.
    ///
    /// The presentation sequence stays empty until the first mutation; no
    /// notification fires during construction.
    #[must_use]
    pub fn new(ctx: &DrawerContext) -> Self {
        Self {
            records: HashMap::new(),
            apps: Vec::new(),
            filtered: Vec::new(),
            items: Vec::new(),
            sections: Vec::new(),
            search_results: None,
            indexer: SectionIndexer::new(ctx.locale.clone()),
            distribution: ctx.distribution,
            column_count: 0,
            row_count: 0,
            observer: None,
        }
    }

    /// Installs the observer notified once per rebuild.
    pub fn set_observer(&mut self, observer: Box<dyn ListObserver>) {
        self.observer = Some(observer);
    }

    /// Replaces the whole canonical set with `records`, then rebuilds.
    pub fn replace_all(&mut self, records: Vec<AppRecord>) {
        self.records.clear();
        self.merge(records);
    }

    /// Upserts `records` into the canonical set by identity key, then
    /// rebuilds.
    ///
    /// Duplicate keys within the batch are last-write-wins. An empty batch
    /// still rebuilds and notifies; callers rely on the notification for
    /// refresh.
    pub fn merge(&mut self, records: Vec<AppRecord>) {
        for record in records {
            self.records.insert(record.key.clone(), record);
        }
        self.on_apps_updated();
    }

    /// Removes records by identity key, ignoring absent keys, then rebuilds.
    pub fn remove(&mut self, keys: &[AppKey]) {
        for key in keys {
            self.records.remove(key);
        }
        self.on_apps_updated();
    }

    /// Sets the ordered search results, or clears filtering with `None`.
    ///
    /// A reference-identical filter (same `Arc`, or `None` twice) is a no-op:
    /// no rebuild, no notification, returns `false`. Otherwise the filter is
    /// replaced and the list rebuilt; the return value reports whether the
    /// filter *content* actually changed, so callers can skip redundant
    /// downstream work after a reference-only change.
    pub fn set_search_results(&mut self, results: Option<Arc<Vec<AppKey>>>) -> bool {
        match (&self.search_results, &results) {
            (None, None) => return false,
            (Some(current), Some(new)) if Arc::ptr_eq(current, new) => return false,
            _ => {}
        }

        let same_content = match (&self.search_results, &results) {
            (Some(current), Some(new)) => current == new,
            _ => false,
        };

        self.search_results = results;
        self.update_items();
        !same_content
    }

    /// Sets the number of app columns; 0 disables row/column computation.
    ///
    /// Re-runs only the item/grid/fast-scroll pass, not the canonical sort.
    pub fn set_column_count(&mut self, column_count: usize) {
        self.column_count = column_count;
        self.update_items();
    }

    /// Selects the fast-scroll distribution strategy and recomputes
    /// fractions.
    pub fn set_distribution(&mut self, distribution: FastScrollDistribution) {
        self.distribution = distribution;
        self.update_items();
    }

    /// Switches the display locale: clears the section cache, re-sorts, and
    /// rebuilds.
    ///
    /// Section labels are locale-dependent, so this is a correctness hook,
    /// not an optimization.
    pub fn on_locale_changed(&mut self, locale: DisplayLocale) {
        self.indexer.on_locale_changed(locale);
        self.on_apps_updated();
    }

    /// Total number of records in the canonical set.
    #[must_use]
    pub fn app_count(&self) -> usize {
        self.records.len()
    }

    /// Number of records visible under the current filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// The sorted working sequence of all canonical records.
    #[must_use]
    pub fn apps(&self) -> &[AppRecord] {
        &self.apps
    }

    /// The flat presentation sequence.
    #[must_use]
    pub fn items(&self) -> &[PresentationItem] {
        &self.items
    }

    /// Fast-scroll section markers with touch fractions, in section order.
    #[must_use]
    pub fn sections(&self) -> &[SectionMarker] {
        &self.sections
    }

    /// Total number of app rows; 0 when no column count is configured.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Whether a search filter is active (even one with zero results).
    #[must_use]
    pub fn has_filter(&self) -> bool {
        self.search_results.is_some()
    }

    /// Whether an active filter matched nothing.
    #[must_use]
    pub fn has_no_filtered_results(&self) -> bool {
        self.has_filter() && self.filtered.is_empty()
    }

    /// Re-sorts the canonical set and rebuilds the presentation sequence.
    fn on_apps_updated(&mut self) {
        self.apps = self.records.values().cloned().collect();
        self.apps.sort_by(compare_records);

        if self.indexer.locale().requires_section_sorting() {
            self.coalesce_sections();
        } else {
            // Warm the label cache so the emit pass below hits it.
            for record in &self.apps {
                self.indexer.label_for(&record.title);
            }
        }

        self.update_items();
    }

    /// Regroups the title-sorted sequence by section label.
    ///
    /// Two-phase sort: the title sort above fixes the order within a
    /// section, then label order (section-label comparator) fixes the order
    /// of the sections themselves, overriding raw title order across section
    /// boundaries.
    fn coalesce_sections(&mut self) {
        let mut groups: Vec<(String, Vec<AppRecord>)> = Vec::new();
        for record in std::mem::take(&mut self.apps) {
            let label = self.indexer.label_for(&record.title);
            match groups.iter_mut().find(|(name, _)| *name == label) {
                Some((_, members)) => members.push(record),
                None => groups.push((label, vec![record])),
            }
        }
        groups.sort_by(|(a, _), (b, _)| compare_section_labels(a, b));
        self.apps = groups.into_iter().flat_map(|(_, members)| members).collect();
    }

    /// Rebuilds the presentation sequence and notifies the observer once.
    fn update_items(&mut self) {
        self.refill_items();
        if let Some(observer) = &self.observer {
            observer.on_list_changed();
        }
    }

    /// Resolves the filter against the canonical set, dropping unresolvable
    /// keys silently, and re-sorts the subset by the ordering policy.
    ///
    /// Filter order is advisory for relevance; alphabetical order wins for
    /// presentation.
    fn source_records(&self) -> Vec<AppRecord> {
        match &self.search_results {
            None => self.apps.clone(),
            Some(keys) => {
                let mut resolved: Vec<AppRecord> = keys
                    .iter()
                    .filter_map(|key| self.records.get(key).cloned())
                    .collect();
                resolved.sort_by(compare_records);
                resolved
            }
        }
    }

    fn refill_items(&mut self) {
        let _span = tracing::debug_span!(
            "refill_items",
            total = self.records.len(),
            has_filter = self.search_results.is_some(),
            columns = self.column_count
        )
        .entered();

        self.filtered.clear();
        self.items.clear();
        self.sections.clear();

        let mut position = 0usize;
        let mut app_index = 0usize;
        let mut last_section: Option<String> = None;

        self.items.push(PresentationItem::SearchDivider { position });
        position += 1;

        for record in self.source_records() {
            let section = self.indexer.label_for(&record.title);

            // Open a new fast-scroll section when the label changes; its
            // representative is the first entry emitted under it.
            if last_section.as_deref() != Some(section.as_str()) {
                last_section = Some(section.clone());
                self.sections
                    .push(SectionMarker::new(section.clone(), position));
            }

            self.items.push(PresentationItem::App(AppEntry {
                position,
                section,
                record: record.clone(),
                app_index,
                row_index: 0,
                column_index: 0,
            }));
            self.filtered.push(record);
            position += 1;
            app_index += 1;
        }

        if self.has_filter() {
            if self.has_no_filtered_results() {
                self.items
                    .push(PresentationItem::EmptySearchPlaceholder { position });
            } else {
                self.items.push(PresentationItem::MarketDivider { position });
            }
            position += 1;
            self.items.push(PresentationItem::MarketSearchEntry { position });
        }

        self.compute_grid();
        distribute(
            self.distribution,
            &mut self.sections,
            &self.items,
            self.column_count,
            self.row_count,
        );

        tracing::debug!(
            items = self.items.len(),
            sections = self.sections.len(),
            rows = self.row_count,
            "presentation rebuilt"
        );
    }

    /// Assigns row and column indices to app entries.
    ///
    /// The running app counter resets at every divider item, so rows never
    /// straddle a divider.
    fn compute_grid(&mut self) {
        self.row_count = 0;
        if self.column_count == 0 {
            return;
        }

        let mut apps_in_section = 0usize;
        let mut apps_in_row = 0usize;
        let mut row_index = 0usize;
        let mut row_started = false;
        let columns = self.column_count;

        for item in &mut self.items {
            match item {
                PresentationItem::App(entry) => {
                    if apps_in_section % columns == 0 {
                        apps_in_row = 0;
                        if row_started {
                            row_index += 1;
                        } else {
                            row_started = true;
                        }
                    }
                    entry.row_index = row_index;
                    entry.column_index = apps_in_row;
                    apps_in_section += 1;
                    apps_in_row += 1;
                }
                other if other.is_divider() => {
                    apps_in_section = 0;
                }
                _ => {}
            }
        }

        if row_started {
            self.row_count = row_index + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(component: &str, title: &str) -> AppRecord {
        AppRecord::new(component, 0, title)
    }

    fn list_with(records: Vec<AppRecord>) -> AlphabeticalAppList {
        let mut list = AlphabeticalAppList::new(&DrawerContext::default());
        list.replace_all(records);
        list
    }

    fn titles(list: &AlphabeticalAppList) -> Vec<String> {
        list.items()
            .iter()
            .filter_map(PresentationItem::as_app)
            .map(|entry| entry.record.title.clone())
            .collect()
    }

    #[test]
    fn empty_list_has_only_the_search_divider() {
        let list = list_with(vec![]);
        assert_eq!(list.items().len(), 1);
        assert!(matches!(
            list.items()[0],
            PresentationItem::SearchDivider { position: 0 }
        ));
        assert!(list.sections().is_empty());
    }

    #[test]
    fn merge_upserts_by_key_last_write_wins() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        list.merge(vec![
            rec("com.a/.A", "Renamed Once"),
            rec("com.a/.A", "Renamed Twice"),
        ]);
        assert_eq!(list.app_count(), 1);
        assert_eq!(titles(&list), vec!["Renamed Twice"]);
    }

    #[test]
    fn remove_ignores_absent_keys() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        list.remove(&[AppKey::new("com.ghost/.G", 0)]);
        assert_eq!(list.app_count(), 1);
    }

    #[test]
    fn positions_are_strictly_increasing() {
        let list = list_with(vec![
            rec("com.a/.A", "Alpha"),
            rec("com.b/.B", "Bravo"),
            rec("com.c/.C", "Charlie"),
        ]);
        for (i, item) in list.items().iter().enumerate() {
            assert_eq!(item.position(), i);
        }
    }

    #[test]
    fn app_index_counts_apps_only() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha"), rec("com.b/.B", "Bravo")]);
        list.set_search_results(Some(Arc::new(vec![
            AppKey::new("com.a/.A", 0),
            AppKey::new("com.b/.B", 0),
        ])));
        let indices: Vec<usize> = list
            .items()
            .iter()
            .filter_map(PresentationItem::as_app)
            .map(|entry| entry.app_index)
            .collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn section_markers_point_at_first_entry_of_their_section() {
        let list = list_with(vec![
            rec("com.a/.A", "Alpha"),
            rec("com.a2/.A", "Anchor"),
            rec("com.b/.B", "Bravo"),
        ]);
        let sections = list.sections();
        assert_eq!(sections.len(), 2);
        for marker in sections {
            let entry = list.items()[marker.item_position].as_app().unwrap();
            assert_eq!(entry.section, marker.name);
            // No earlier app entry carries the same label.
            for item in &list.items()[..marker.item_position] {
                if let Some(earlier) = item.as_app() {
                    assert_ne!(earlier.section, marker.name);
                }
            }
        }
    }

    #[test]
    fn unresolvable_filter_keys_are_dropped_silently() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        list.set_search_results(Some(Arc::new(vec![
            AppKey::new("com.gone/.G", 0),
            AppKey::new("com.a/.A", 0),
        ])));
        assert_eq!(list.filtered_count(), 1);
        assert!(!list.has_no_filtered_results());
    }

    #[test]
    fn filter_order_is_advisory_presentation_stays_alphabetical() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha"), rec("com.z/.Z", "Zulu")]);
        // Relevance order puts Zulu first; presentation must not.
        list.set_search_results(Some(Arc::new(vec![
            AppKey::new("com.z/.Z", 0),
            AppKey::new("com.a/.A", 0),
        ])));
        assert_eq!(titles(&list), vec!["Alpha", "Zulu"]);
    }

    #[test]
    fn same_reference_filter_is_a_no_op() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        let results = Arc::new(vec![AppKey::new("com.a/.A", 0)]);
        assert!(list.set_search_results(Some(Arc::clone(&results))));
        let items_before = list.items().to_vec();
        assert!(!list.set_search_results(Some(Arc::clone(&results))));
        assert_eq!(list.items(), &items_before[..]);
    }

    #[test]
    fn equal_content_new_reference_rebuilds_but_reports_unchanged() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        assert!(list.set_search_results(Some(Arc::new(vec![AppKey::new("com.a/.A", 0)]))));
        let changed = list.set_search_results(Some(Arc::new(vec![AppKey::new("com.a/.A", 0)])));
        assert!(!changed);
    }

    #[test]
    fn clearing_an_absent_filter_reports_unchanged() {
        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        assert!(!list.set_search_results(None));
    }

    #[test]
    fn grouping_locale_orders_sections_by_label() {
        let mut list = AlphabeticalAppList::new(&DrawerContext {
            locale: DisplayLocale::from_tag("zh-CN").unwrap(),
            distribution: FastScrollDistribution::default(),
        });
        // "!bang" sorts first by raw collation, but its symbol section must
        // come after the alphanumeric sections once labels are regrouped.
        list.replace_all(vec![
            rec("com.sym/.S", "!bang"),
            rec("com.b/.B", "Bravo"),
            rec("com.seven/.S", "7zip"),
        ]);
        let labels: Vec<&str> = list.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(labels, vec!["#", "B", "∙"]);
        assert_eq!(titles(&list), vec!["7zip", "Bravo", "!bang"]);
    }

    #[test]
    fn locale_change_resorts_and_notifies() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut list = list_with(vec![rec("com.a/.A", "Alpha")]);
        let fired = Rc::new(Cell::new(0usize));
        let observed = Rc::clone(&fired);
        list.set_observer(Box::new(move || observed.set(observed.get() + 1)));
        list.on_locale_changed(DisplayLocale::from_tag("zh-CN").unwrap());
        assert_eq!(fired.get(), 1);
        assert_eq!(titles(&list), vec!["Alpha"]);
    }
}
