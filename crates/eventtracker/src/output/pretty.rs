//! Pretty output formatting.

use eventtracker_core::events::Event;

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!("{}\n  ID: {}\n  Date: {}", event.title, event.id, event.date);
    if let Some(time) = &event.time {
        output.push_str(&format!("\n  Time: {}", time));
    }
    if let Some(desc) = &event.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if event.notifications_enabled {
        output.push_str("\n  Notifications: on");
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventtracker_core::events::EventId;

    fn sample(id: i64, title: &str) -> Event {
        Event {
            id: EventId(id),
            title: title.to_string(),
            description: None,
            date: "2024-01-15".to_string(),
            time: None,
            notifications_enabled: false,
        }
    }

    #[test]
    fn test_format_event_minimal() {
        assert_eq!(
            format_event(&sample(3, "Meeting")),
            "Meeting\n  ID: 3\n  Date: 2024-01-15"
        );
    }

    #[test]
    fn test_format_event_with_optional_fields() {
        let event = Event {
            description: Some("Quarterly review".to_string()),
            time: Some("10:00".to_string()),
            notifications_enabled: true,
            ..sample(1, "Meeting")
        };

        let output = format_event(&event);
        assert!(output.contains("Time: 10:00"));
        assert!(output.contains("Description: Quarterly review"));
        assert!(output.contains("Notifications: on"));
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events(&[]), "No events found.");
    }

    #[test]
    fn test_format_events_header() {
        let output = format_events(&[sample(1, "A"), sample(2, "B")]);
        assert!(output.starts_with("EVENTS (2)\n"));
        assert!(output.find("A\n").unwrap() < output.find("B\n").unwrap());
    }
}
