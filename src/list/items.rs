//! Presentation item and section marker types.
//!
//! The flat presentation sequence the display layer renders is a list of
//! [`PresentationItem`] values: structural markers (dividers, placeholders)
//! interleaved with [`AppEntry`] items. The set of variants is closed by
//! design; downstream rendering switches exhaustively over the tag instead of
//! subclassing an open item type.

use serde::{Deserialize, Serialize};

use crate::domain::AppRecord;

/// One application entry in the flat presentation sequence.
///
/// Besides the record itself, an entry carries every index the grid layer
/// needs: its absolute position, its app-only linear index (excluding
/// structural items), and — when a positive column count is configured — the
/// row and in-row column it lands on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Absolute position in the flat sequence.
    pub position: usize,

    /// Section label this entry files under.
    pub section: String,

    /// The application record.
    pub record: AppRecord,

    /// Linear index counting app entries only.
    pub app_index: usize,

    /// Grid row, meaningful only when a positive column count is set.
    pub row_index: usize,

    /// Index within the row, meaningful only when a positive column count
    /// is set.
    pub column_index: usize,
}

/// One item of the flat presentation sequence.
///
/// Every variant carries its absolute position so consumers can address the
/// sequence without re-counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PresentationItem {
    /// The leading divider below the search field. Always at position 0.
    SearchDivider { position: usize },

    /// An application entry.
    App(AppEntry),

    /// Shown instead of results when an active filter matched nothing.
    EmptySearchPlaceholder { position: usize },

    /// Divider between filtered results and the market search entry.
    MarketDivider { position: usize },

    /// The trailing "search the market" entry under an active filter.
    MarketSearchEntry { position: usize },
}

impl PresentationItem {
    /// Absolute position of this item in the flat sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::SearchDivider { position }
            | Self::EmptySearchPlaceholder { position }
            | Self::MarketDivider { position }
            | Self::MarketSearchEntry { position } => *position,
            Self::App(entry) => entry.position,
        }
    }

    /// Whether this item is a divider that resets the per-section grid
    /// counter.
    #[must_use]
    pub fn is_divider(&self) -> bool {
        matches!(
            self,
            Self::SearchDivider { .. } | Self::MarketDivider { .. }
        )
    }

    /// Returns the app entry if this item is one.
    #[must_use]
    pub fn as_app(&self) -> Option<&AppEntry> {
        match self {
            Self::App(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Fast-scroll marker for one section of the presentation sequence.
///
/// References the first app entry of its section by flat-sequence position
/// and carries the touch fraction in `[0, 1)` that maps a scrollbar touch to
/// this section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMarker {
    /// Section label.
    pub name: String,

    /// Flat-sequence position of the first [`AppEntry`] bearing this label.
    pub item_position: usize,

    /// Touch fraction assigned by the active distribution strategy.
    pub touch_fraction: f32,
}

impl SectionMarker {
    pub(crate) fn new(name: String, item_position: usize) -> Self {
        Self {
            name,
            item_position,
            touch_fraction: 0.0,
        }
    }
}
