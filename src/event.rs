//! Events, as they are stored by the server

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{self, Visitor};
use chrono::{DateTime, NaiveDate};

use crate::draft::Draft;

/// An event, as returned by the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    attributes: EventAttributes,
}

impl Event {
    pub fn new(id: EventId, attributes: EventAttributes) -> Self {
        Self { id, attributes }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn attributes(&self) -> &EventAttributes {
        &self.attributes
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn description(&self) -> &str {
        &self.attributes.description
    }

    /// The date, as it was sent by the server (usually `YYYY-MM-DD`)
    pub fn date(&self) -> &str {
        &self.attributes.date
    }

    /// The date as a calendar date, or `None` if the server sent something that is not a date
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.attributes.date)
    }

    /// Returns whether this event has the same fields as the given draft
    pub fn matches(&self, draft: &Draft) -> bool {
        self.attributes.name == draft.name
            && self.attributes.description == draft.description
            && self.attributes.date == draft.date
    }
}


/// The editable fields of an [`Event`]
///
/// Any other attribute the server may send (creation date, etc.) is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttributes {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

impl From<Draft> for EventAttributes {
    fn from(draft: Draft) -> Self {
        Self { name: draft.name, description: draft.description, date: draft.date }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses either a plain ISO date or a full RFC 3339 timestamp
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.naive_utc().date())
}



/// The identifier of an event.
///
/// It is assigned by the server, and opaque to this crate. The server may send it either as a JSON number or as a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId {
    content: String,
}

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for EventId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for EventId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl From<u64> for EventId {
    fn from(value: u64) -> Self {
        Self { content: value.to_string() }
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}

struct EventIdVisitor;

impl<'de> Visitor<'de> for EventIdVisitor {
    type Value = EventId;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "an event ID, as a number or a string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<EventId, E> {
        Ok(EventId::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<EventId, E> {
        Ok(EventId::from(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<EventId, E> {
        Ok(EventId::from(value))
    }
}

/// Used to support serde
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<EventId, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EventIdVisitor)
    }
}
