use super::types::Event;

/// Sorts events by stored date, oldest first.
///
/// Events on the same date keep insertion order. Ids are assigned in
/// increasing order, so they break the tie.
pub fn sort_events_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
}
