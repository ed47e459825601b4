//! Content schedule ordering

use crate::types::ScheduledContentItem;

/// Ascending calendar order. Items sharing a date keep their relative input
/// order; the sort is stable, so a same-day lineup is never reshuffled
/// between render passes.
pub fn sort_by_date(items: &[ScheduledContentItem]) -> Vec<ScheduledContentItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.date);
    sorted
}
