//! The in-memory state a front end displays
//!
//! Every function of this module is a pure state transition: nothing here talks to a server.

use crate::draft::{Draft, EditSession, Field};
use crate::event::{Event, EventId};
use crate::notification::Notification;

/// Everything that is displayed: the event list, both forms and the pending notifications
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    events: Vec<Event>,
    new_draft: Draft,
    editing: Option<EditSession>,
    notifications: Vec<Notification>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last collection that has been successfully fetched
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Replace the whole collection
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn find_event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    pub fn new_draft(&self) -> &Draft {
        &self.new_draft
    }

    pub fn set_new_field<S: ToString>(&mut self, field: Field, value: S) {
        self.new_draft.set(field, value);
    }

    pub fn clear_new_draft(&mut self) {
        self.new_draft = Draft::default();
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Start editing an event. Any unsaved edit of another (or the same) event is discarded
    pub fn begin_edit(&mut self, event: &Event) {
        if let Some(previous) = &self.editing {
            log::debug!("Discarding the unsaved edit of event {}", previous.id());
        }
        self.editing = Some(EditSession::from(event));
    }

    /// Change a field of the edited event. This does nothing when no event is being edited
    pub fn set_edit_field<S: ToString>(&mut self, field: Field, value: S) {
        match &mut self.editing {
            Some(session) => session.draft.set(field, value),
            None => log::warn!("Not editing any event, ignoring the change of its {}", field),
        }
    }

    /// Leave edit mode, discarding the edited values
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Leave edit mode after the edited values have been saved
    pub fn finish_edit(&mut self) {
        self.editing = None;
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Returns the pending notifications, and forget about them
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
