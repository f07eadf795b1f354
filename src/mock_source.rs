//! An in-memory event source, that behaves like the REST server
//!
//! It is used to test the controller without any network, and can be made to fail using a [`MockBehaviour`].

use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::traits::EventSource;
use crate::draft::Draft;
use crate::event::{Event, EventAttributes, EventId};
use crate::mock_behaviour::MockBehaviour;


#[derive(Debug)]
struct MockData {
    events: Vec<Event>,
    last_id: u64,
}

/// A server mock, that stores its events in memory.
///
/// Like the actual server, it assigns increasing numeric IDs to the events it creates, and lists them in creation order.
#[derive(Debug)]
pub struct MockSource {
    data: Mutex<MockData>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(MockData { events: Vec::new(), last_id: 0 }),
            mock_behaviour: None,
        }
    }

    /// Create a source whose operations may fail, depending on `behaviour`
    pub fn with_behaviour(behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            mock_behaviour: Some(behaviour),
            ..Self::new()
        }
    }

    /// Directly insert an event, as if another client had created it.
    /// This is not subject to the mock behaviour
    pub fn insert(&self, draft: Draft) -> Result<EventId, Box<dyn Error>> {
        let mut data = self.data()?;
        data.last_id += 1;
        let id = EventId::from(data.last_id);
        data.events.push(Event::new(id.clone(), EventAttributes::from(draft)));
        Ok(id)
    }

    /// A snapshot of the stored events. This is not subject to the mock behaviour
    pub fn snapshot(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        Ok(self.data()?.events.clone())
    }

    fn data(&self) -> Result<MutexGuard<'_, MockData>, Box<dyn Error>> {
        self.data.lock().map_err(|_| "The mocked data is poisoned".into())
    }

    fn check<F>(&self, can: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut MockBehaviour) -> Result<(), Box<dyn Error>>,
    {
        match &self.mock_behaviour {
            None => Ok(()),
            Some(behaviour) => {
                let mut behaviour = behaviour.lock().map_err(|_| "The mock behaviour is poisoned")?;
                can(&mut behaviour)
            },
        }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSource for MockSource {
    async fn get_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        self.check(MockBehaviour::can_get_events)?;
        self.snapshot()
    }

    async fn create_event(&self, draft: &Draft) -> Result<(), Box<dyn Error>> {
        self.check(MockBehaviour::can_create_event)?;
        self.insert(draft.clone())?;
        Ok(())
    }

    async fn update_event(&self, id: &EventId, draft: &Draft) -> Result<(), Box<dyn Error>> {
        self.check(MockBehaviour::can_update_event)?;
        let mut data = self.data()?;
        match data.events.iter_mut().find(|event| event.id() == id) {
            None => Err(format!("Unexpected HTTP status code 404 Not Found (no event {})", id).into()),
            Some(event) => {
                *event = Event::new(id.clone(), EventAttributes::from(draft.clone()));
                Ok(())
            },
        }
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), Box<dyn Error>> {
        self.check(MockBehaviour::can_delete_event)?;
        let mut data = self.data()?;
        let count_before = data.events.len();
        data.events.retain(|event| event.id() != id);
        if data.events.len() == count_before {
            return Err(format!("Unexpected HTTP status code 404 Not Found (no event {})", id).into());
        }
        Ok(())
    }
}
