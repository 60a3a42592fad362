//! Appdrawer: the alphabetical application list core of a launcher shell.
//!
//! This crate turns an unordered, mutable collection of installed-application
//! records into a stable, sectioned, alphabetically fast-scrollable,
//! optionally search-filtered presentation list. It is recomputed in full on
//! every mutation: application install/update/remove deltas, search filter
//! changes, and grid column-count changes.
//!
//! Everything around the core — icon loading, drag-and-drop, rendering,
//! persistence — is an external collaborator whose only relevant surface is
//! the data it pushes in or reads out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  External collaborators                             │
//! │  - app registry (install/update/remove deltas)      │
//! │  - search provider (ordered identity keys)          │
//! │  - layout collaborator (column count)               │
//! └─────────────────────────────────────────────────────┘
//!                        │ mutators
//! ┌─────────────────────────────────────────────────────┐
//! │  List Builder (list/builder)                        │  ← canonical set
//! │  - merge / remove / replace_all                     │  ← rebuild pipeline
//! │  - set_search_results / set_column_count            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Ordering      │   │ SectionIndexer│   │ Fast-Scroll   │
//! │ (ordering)    │   │ (indexer)     │   │ (fastscroll)  │
//! │ - title order │   │ - label cache │   │ - touch       │
//! │ - label order │   │ - locale hook │   │   fractions   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │ one callback per rebuild
//! ┌─────────────────────────────────────────────────────┐
//! │  Change Notifier (list/notifier)                    │  → display layer
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Records, identity keys, locales, errors
//! - [`indexer`]: Locale-aware section labels with per-title memoization
//! - [`ordering`]: Record and section-label comparators
//! - [`list`]: The list builder, presentation items, fast-scroll, notifier
//! - [`search`]: Default fuzzy search provider
//! - [`observability`]: Tracing subscriber setup for embedders
//!
//! # Threading
//!
//! The core is single-threaded and cooperative: mutators and the rebuild
//! they trigger run synchronously on the owning thread, and no operation
//! suspends or blocks. Producers on other threads must marshal their calls
//! onto that thread; embedders that must share a list across threads wrap
//! the whole mutate-then-notify sequence in one exclusive lock.
//!
//! # Example
//!
//! ```
//! use appdrawer::{search, AlphabeticalAppList, AppRecord, DrawerContext};
//!
//! let ctx = DrawerContext::default();
//! let mut list = AlphabeticalAppList::new(&ctx);
//!
//! list.replace_all(vec![
//!     AppRecord::new("com.example.mail/.Mail", 0, "Mail"),
//!     AppRecord::new("com.example.maps/.Maps", 0, "Maps"),
//!     AppRecord::new("com.example.files/.Files", 0, "Files"),
//! ]);
//! list.set_column_count(4);
//!
//! let results = search::search_apps("ma", list.apps());
//! list.set_search_results(Some(results));
//! assert!(list.has_filter());
//! assert_eq!(list.filtered_count(), 2);
//! ```

pub mod domain;
pub mod indexer;
pub mod list;
pub mod observability;
pub mod ordering;
pub mod search;

pub use domain::{AppKey, AppRecord, DisplayLocale, DrawerError, Result};
pub use indexer::SectionIndexer;
pub use list::{
    AlphabeticalAppList, AppEntry, FastScrollDistribution, ListObserver, PresentationItem,
    SectionMarker,
};

/// Explicitly constructed context shared by list components.
///
/// Replaces any process-wide singleton app-state holder: a shell constructs
/// one context and passes it by reference to every component that needs it.
/// The context carries the active display locale and the fast-scroll
/// distribution strategy the list starts with; both can be changed later
/// through the list's own hooks.
///
/// # Examples
///
/// ```
/// use appdrawer::{DisplayLocale, DrawerContext, FastScrollDistribution};
///
/// let ctx = DrawerContext {
///     locale: DisplayLocale::from_tag("zh-CN").unwrap(),
///     distribution: FastScrollDistribution::BySectionCount,
/// };
/// assert!(ctx.locale.requires_section_sorting());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DrawerContext {
    /// Active display locale, driving collation and section labels.
    pub locale: DisplayLocale,

    /// Fast-scroll distribution strategy the list starts with.
    pub distribution: FastScrollDistribution,
}

impl DrawerContext {
    /// Creates a context for the given locale with the default distribution.
    #[must_use]
    pub fn new(locale: DisplayLocale) -> Self {
        Self {
            locale,
            distribution: FastScrollDistribution::default(),
        }
    }
}
