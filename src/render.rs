//! Text rendering of the view state, for terminal front ends

use std::fmt::Write;

use crate::draft::{Draft, EditSession, Field};
use crate::event::Event;
use crate::notification::{Notification, NotificationStatus};
use crate::state::ViewState;

/// Format an event date the way a US locale displays short dates, e.g. `6/1/2024`
pub fn format_date(event: &Event) -> String {
    match event.calendar_date() {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// One block per event, numbered from 1
pub fn render_event_list(events: &[Event]) -> String {
    if events.is_empty() {
        return "  (no events)\n".to_string();
    }

    let mut out = String::new();
    for (index, event) in events.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, event.name().to_uppercase());
        let _ = writeln!(out, "     {}", event.description());
        let _ = writeln!(out, "     {}", format_date(event));
    }
    out
}

fn render_form(title: &str, draft: &Draft) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    for field in Field::ALL.iter() {
        let _ = writeln!(out, "  {:<12} {}", format!("{}:", field.label()), draft.get(*field));
    }
    out
}

pub fn render_new_form(draft: &Draft) -> String {
    render_form("Add New Event", draft)
}

pub fn render_edit_form(session: &EditSession) -> String {
    render_form(&format!("Edit Event (#{})", session.id()), &session.draft)
}

pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.status() {
        NotificationStatus::Success => "✓",
        NotificationStatus::Error => "✗",
    };
    format!("[{}] {}", marker, notification)
}

/// The whole page: heading, event list, the "new event" form and the "edit event" form when editing
pub fn render_view(state: &ViewState) -> String {
    let mut out = String::from("Event Manager\n\n");
    out.push_str(&render_event_list(state.events()));
    out.push('\n');
    out.push_str(&render_new_form(state.new_draft()));
    if let Some(session) = state.editing() {
        out.push('\n');
        out.push_str(&render_edit_form(session));
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventAttributes, EventId};

    fn launch() -> Event {
        Event::new(
            EventId::from(7u64),
            EventAttributes { name: "Launch".into(), description: "Product launch".into(), date: "2024-06-01".into() },
        )
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(&launch()), "6/1/2024");

        let undated = Event::new(EventId::from(8u64), EventAttributes::default());
        assert_eq!(format_date(&undated), "Invalid Date");
    }

    #[test]
    fn event_list() {
        let text = render_event_list(&[launch()]);
        assert_eq!(text, "  1. LAUNCH\n     Product launch\n     6/1/2024\n");
        assert_eq!(render_event_list(&[]), "  (no events)\n");
    }

    #[test]
    fn edit_form_only_when_editing() {
        let mut state = ViewState::new();
        state.set_events(vec![launch()]);
        assert!(render_view(&state).contains("Add New Event"));
        assert!(!render_view(&state).contains("Edit Event"));

        state.begin_edit(&launch());
        let text = render_view(&state);
        assert!(text.contains("Edit Event (#7)"));
        assert!(text.contains("  Description: Product launch"));
    }

    #[test]
    fn notifications() {
        let text = render_notification(&Notification::error("Error fetching events", "timed out"));
        assert_eq!(text, "[✗] Error fetching events: timed out");
    }
}
