//! This module binds a remote [`EventSource`] to the [`ViewState`] a front end displays
//!
//! Every change made to the remote source is followed by a full reload of the collection, so that the displayed list
//! always reflects what the server actually stores.

use std::error::Error;

use crate::traits::EventSource;
use crate::draft::{Draft, Field};
use crate::event::{Event, EventId};
use crate::notification::{Notification, NotificationSender};
use crate::state::ViewState;

static LOAD_ERROR: &str = "Error fetching events";
static CREATE_SUCCESS: &str = "Event created";
static CREATE_ERROR: &str = "Error creating event";
static UPDATE_SUCCESS: &str = "Event updated";
static UPDATE_ERROR: &str = "Error updating event";
static DELETE_SUCCESS: &str = "Event deleted";
static DELETE_ERROR: &str = "Error deleting event";


/// The view-model of the event manager.
///
/// No function of the controller ever returns an error: failures are logged, and reported as [`Notification`]s.
/// Functions that talk to the server return whether their request was successful.
///
/// Operations borrow the controller mutably, so that an operation (and the reload it triggers) is always
/// finished before the next one starts.
pub struct Controller<S: EventSource> {
    source: S,
    state: ViewState,
    feedback_channel: Option<NotificationSender>,
}

impl<S: EventSource> Controller<S> {
    /// Create a controller. This does not fetch anything yet, see [`Self::load`]
    pub fn new(source: S) -> Self {
        Self { source, state: ViewState::new(), feedback_channel: None }
    }

    /// Create a controller that will also send every notification to the given channel
    pub fn new_with_feedback_channel(source: S, channel: NotificationSender) -> Self {
        Self { source, state: ViewState::new(), feedback_channel: Some(channel) }
    }

    /// Returns the remote source.
    ///
    /// Apart from tests, there are very few reasons to access it directly.
    pub fn source(&self) -> &S { &self.source }

    pub fn state(&self) -> &ViewState { &self.state }

    /// Shortcut to the events of the current state
    pub fn events(&self) -> &[Event] { self.state.events() }

    /// Returns the notifications that have not been displayed yet
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.state.take_notifications()
    }

    /// Fetch the whole collection and replace the local one.
    ///
    /// In case of failure, the local collection is left untouched.
    pub async fn load(&mut self) -> bool {
        match self.source.get_events().await {
            Err(err) => {
                self.notify_error(LOAD_ERROR, err);
                false
            },
            Ok(events) => {
                log::debug!("Fetched {} events", events.len());
                self.state.set_events(events);
                true
            },
        }
    }

    /// Change a field of the "new event" form
    pub fn set_new_field<V: ToString>(&mut self, field: Field, value: V) {
        self.state.set_new_field(field, value);
    }

    /// Send the "new event" form to the server
    pub async fn create(&mut self) -> bool {
        let draft = self.state.new_draft().clone();
        self.create_from(&draft).await
    }

    /// Ask the server to create an event from the given draft.
    ///
    /// On success, the "new event" form is cleared. On failure, it is kept so that the user can try again.
    pub async fn create_from(&mut self, draft: &Draft) -> bool {
        match self.source.create_event(draft).await {
            Err(err) => {
                self.notify_error(CREATE_ERROR, err);
                false
            },
            Ok(()) => {
                self.load().await;
                self.state.clear_new_draft();
                self.notify(Notification::success(CREATE_SUCCESS));
                true
            },
        }
    }

    /// Enter edit mode for this event. Any unsaved edit is silently discarded
    pub fn begin_edit(&mut self, event: &Event) {
        self.state.begin_edit(event);
    }

    /// Enter edit mode for the event with this ID, if it is known
    pub fn begin_edit_by_id(&mut self, id: &EventId) -> bool {
        match self.state.find_event(id).cloned() {
            None => {
                log::warn!("No event with ID {} to edit", id);
                false
            },
            Some(event) => {
                self.state.begin_edit(&event);
                true
            },
        }
    }

    /// Change a field of the "edit event" form
    pub fn set_edit_field<V: ToString>(&mut self, field: Field, value: V) {
        self.state.set_edit_field(field, value);
    }

    /// Leave edit mode without saving anything
    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Send the "edit event" form to the server
    pub async fn update(&mut self) -> bool {
        let session = match self.state.editing() {
            None => {
                log::warn!("Not editing any event, there is nothing to update");
                return false;
            },
            Some(session) => session.clone(),
        };
        self.update_event(session.id(), &session.draft).await
    }

    /// Ask the server to replace the fields of an event.
    ///
    /// On success, edit mode is left. On failure, the edited values are kept.
    pub async fn update_event(&mut self, id: &EventId, draft: &Draft) -> bool {
        match self.source.update_event(id, draft).await {
            Err(err) => {
                self.notify_error(UPDATE_ERROR, err);
                false
            },
            Ok(()) => {
                self.load().await;
                self.state.finish_edit();
                self.notify(Notification::success(UPDATE_SUCCESS));
                true
            },
        }
    }

    /// Ask the server to delete an event
    pub async fn delete(&mut self, id: &EventId) -> bool {
        match self.source.delete_event(id).await {
            Err(err) => {
                self.notify_error(DELETE_ERROR, err);
                false
            },
            Ok(()) => {
                self.load().await;
                self.notify(Notification::success(DELETE_SUCCESS));
                true
            },
        }
    }

    fn notify_error(&mut self, title: &str, err: Box<dyn Error>) {
        self.notify(Notification::error(title, &*err));
    }

    fn notify(&mut self, notification: Notification) {
        if notification.is_error() {
            log::error!("{}", notification);
        } else {
            log::info!("{}", notification);
        }

        if let Some(sender) = &self.feedback_channel {
            // Nobody may be listening anymore, this is fine
            let _ = sender.send(Some(notification.clone()));
        }
        self.state.notify(notification);
    }
}
