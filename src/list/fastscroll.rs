//! Fast-scroll touch fraction distribution.
//!
//! Annotates section markers with the touch fraction in `[0, 1)` that a
//! vertical scrollbar touch at that fraction should jump to. Exactly one of
//! two strategies is active at a time, selected by [`FastScrollDistribution`]
//! rather than a compile-time constant.

use super::items::{PresentationItem, SectionMarker};

/// Strategy for assigning touch fractions to sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FastScrollDistribution {
    /// Fractions proportional to the representative entry's grid position:
    /// `row_index / row_count + column_index * (1 / row_count) / columns`.
    ///
    /// Requires a positive column count; with column computation disabled
    /// the fractions stay at 0.
    ByRowsFraction,

    /// Equal-width consecutive fractions in section order: section `i` of
    /// `N` gets `i / N`. Works regardless of column count.
    #[default]
    BySectionCount,
}

/// Assigns touch fractions to `sections` under the given strategy.
///
/// Representatives that are not app entries are assigned fraction 0 and, for
/// by-section-count, do not advance the cumulative fraction.
pub(crate) fn distribute(
    mode: FastScrollDistribution,
    sections: &mut [SectionMarker],
    items: &[PresentationItem],
    column_count: usize,
    row_count: usize,
) {
    match mode {
        FastScrollDistribution::ByRowsFraction => {
            if column_count == 0 || row_count == 0 {
                return;
            }
            let row_fraction = 1.0 / row_count as f32;
            for info in sections.iter_mut() {
                let Some(entry) = items[info.item_position].as_app() else {
                    info.touch_fraction = 0.0;
                    continue;
                };
                let sub_row_fraction =
                    entry.column_index as f32 * (row_fraction / column_count as f32);
                info.touch_fraction = entry.row_index as f32 * row_fraction + sub_row_fraction;
            }
        }
        FastScrollDistribution::BySectionCount => {
            if sections.is_empty() {
                return;
            }
            let per_section = 1.0 / sections.len() as f32;
            let mut cumulative = 0.0;
            for info in sections.iter_mut() {
                if items[info.item_position].as_app().is_none() {
                    info.touch_fraction = 0.0;
                    continue;
                }
                info.touch_fraction = cumulative;
                cumulative += per_section;
            }
        }
    }
}
