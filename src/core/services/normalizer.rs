//! Push coalescing
//!
//! Consecutive pushes to the same repository collapse into one event whose
//! size is the total commit count. Order is never changed.

use crate::core::models::{Event, EventKind};

/// Merge runs of adjacent same-repository push events
///
/// Single left-to-right pass with no lookahead. A run never spans a non-push
/// event or a different repository; all fields other than the commit count are
/// taken from the first event of the run. Counts saturate at `u64::MAX`.
#[must_use]
pub fn coalesce(events: Vec<Event>) -> Vec<Event> {
    let mut out: Vec<Event> = Vec::with_capacity(events.len());

    for event in events {
        if let EventKind::Push { size } = event.kind
            && let Some(last) = out.last_mut()
            && last.repo == event.repo
            && let EventKind::Push { size: total } = &mut last.kind
        {
            *total = total.saturating_add(size);
            continue;
        }
        out.push(event);
    }

    out
}
