// Sequential restore
// Sorts pages back into ascending position order

use crate::models::page::DayPage;

/// Arrange pages in ascending position order.
///
/// Positions are relabeled from the visual order immediately before any
/// rearrangement, so after a booklet pass this restores the reading
/// sequence. Labels altered by other means still sort ascending; the sort
/// is stable, keyed purely on the numeric label.
pub(super) fn arrange(mut pages: Vec<DayPage>) -> Vec<DayPage> {
    pages.sort_by_key(|page| page.position);
    pages
}
