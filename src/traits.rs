use std::error::Error;

use async_trait::async_trait;

use crate::draft::Draft;
use crate::event::{Event, EventId};

/// A remote collection of events (usually a REST server)
///
/// Every function may fail, e.g. in case of network errors or unexpected replies. \
/// Sources only report failures, they never retry.
#[async_trait]
pub trait EventSource {
    /// Returns the whole collection of events, in the order the source returned them
    async fn get_events(&self) -> Result<Vec<Event>, Box<dyn Error>>;
    /// Ask the source to create a new event. The source is responsible for assigning it an ID
    async fn create_event(&self, draft: &Draft) -> Result<(), Box<dyn Error>>;
    /// Replace the fields of an existing event
    async fn update_event(&self, id: &EventId, draft: &Draft) -> Result<(), Box<dyn Error>>;
    /// Delete an event
    async fn delete_event(&self, id: &EventId) -> Result<(), Box<dyn Error>>;
}
