//! Drafts are the unsaved, client-local copies of an event's editable fields

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};

/// The editable fields of an event, before the server has accepted them.
///
/// Every field may be empty, nothing is validated client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub date: String,
}

impl Draft {
    pub fn new<S: ToString, T: ToString, U: ToString>(name: S, description: T, date: U) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Date => &self.date,
        }
    }

    pub fn set<S: ToString>(&mut self, field: Field, value: S) {
        let value = value.to_string();
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Date => self.date = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.date.is_empty()
    }
}

impl From<&Event> for Draft {
    fn from(event: &Event) -> Self {
        let attributes = event.attributes();
        Self {
            name: attributes.name.clone(),
            description: attributes.description.clone(),
            date: attributes.date.clone(),
        }
    }
}


/// A field of a [`Draft`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Date,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::Date];

    /// The label this field has in forms
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Date => "Date",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "description" => Ok(Field::Description),
            "date" => Ok(Field::Date),
            other => Err(format!("Unknown field {:?} (expected name, description or date)", other)),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}


/// The event currently being edited: which one, and its edited fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    id: EventId,
    pub draft: Draft,
}

impl EditSession {
    pub fn new(id: EventId, draft: Draft) -> Self {
        Self { id, draft }
    }

    /// The ID of the edited event. It cannot be changed during a session
    pub fn id(&self) -> &EventId {
        &self.id
    }
}

impl From<&Event> for EditSession {
    fn from(event: &Event) -> Self {
        Self::new(event.id().clone(), Draft::from(event))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventAttributes;

    #[test]
    fn fields_from_str() {
        assert_eq!("name".parse::<Field>(), Ok(Field::Name));
        assert_eq!("Description".parse::<Field>(), Ok(Field::Description));
        assert_eq!("DATE".parse::<Field>(), Ok(Field::Date));
        assert!("location".parse::<Field>().is_err());
    }

    #[test]
    fn set_and_get() {
        let mut draft = Draft::default();
        assert!(draft.is_empty());
        draft.set(Field::Date, "2024-06-01");
        assert_eq!(draft.get(Field::Date), "2024-06-01");
        assert_eq!(draft.get(Field::Name), "");
        assert!(!draft.is_empty());
    }

    #[test]
    fn edit_session_keeps_the_id() {
        let event = Event::new(
            EventId::from(3u64),
            EventAttributes { name: "Launch".into(), description: "Product launch".into(), date: "2024-06-01".into() },
        );
        let mut session = EditSession::from(&event);
        session.draft.set(Field::Name, "Relaunch");
        assert_eq!(session.id(), &EventId::from(3u64));
        assert_eq!(session.draft, Draft::new("Relaunch", "Product launch", "2024-06-01"));
    }
}
