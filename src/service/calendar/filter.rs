use crate::models::EarningsEvent;

/// Batch-level importance gate.
///
/// One event rated 4 or higher anywhere in the batch makes every event
/// visible, low-importance ones included. Only when no such event exists does
/// the restrictive branch apply, keeping events rated exactly 3 and dropping
/// the rest (unrated included). The existence check runs over the whole batch
/// before any per-event decision, not day by day.
pub fn apply(events: Vec<EarningsEvent>) -> Vec<EarningsEvent> {
    let has_high_importance = events.iter().any(|e| e.importance.is_some_and(|i| i >= 4));
    if has_high_importance {
        return events;
    }

    events
        .into_iter()
        .filter(|e| e.importance == Some(3))
        .collect()
}

/// True when the restrictive branch was taken and left something visible: no
/// event rated 4+, at least one rated exactly 3. Drives the dashboard's
/// "high importance only" banner.
pub fn high_importance_only<'a, I>(events: I) -> bool
where
    I: IntoIterator<Item = &'a EarningsEvent>,
{
    let mut has_high = false;
    let mut has_three = false;
    for event in events {
        match event.importance {
            Some(i) if i >= 4 => has_high = true,
            Some(3) => has_three = true,
            _ => {}
        }
    }
    !has_high && has_three
}
