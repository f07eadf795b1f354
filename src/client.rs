//! This module provides a client to connect to the REST server that stores the events

use std::error::Error;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::traits::EventSource;
use crate::config::EVENTS_PATH;
use crate::draft::Draft;
use crate::event::{Event, EventId};


/// What the server sends back when listing events
#[derive(Deserialize)]
struct Collection {
    data: Vec<Event>,
}

/// What the server expects when creating or updating an event
#[derive(Serialize)]
struct Payload<'a> {
    data: &'a Draft,
}


/// An event source that fetches its data from a REST server
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, Box<dyn Error>> {
        let base_url = Url::parse(base_url.as_ref())?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the server set in [`crate::config::BASE_URL`]
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        Self::new(crate::config::base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL of the whole collection, e.g. `http://localhost:1337/api/events`
    pub fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path().trim_end_matches('/'), EVENTS_PATH);
        url.set_path(&path);
        url
    }

    /// The URL of a single event, e.g. `http://localhost:1337/api/events/12`
    pub fn event_url(&self, id: &EventId) -> Result<Url, Box<dyn Error>> {
        let mut url = self.collection_url();
        url.path_segments_mut()
            .map_err(|_| format!("{} cannot be used as a base URL", self.base_url))?
            .push(id.as_str());
        Ok(url)
    }

    fn json_body(draft: &Draft) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(&Payload { data: draft })?)
    }

    /// Send a request, and decode the JSON the server replied
    async fn send(&self, request: RequestBuilder) -> Result<serde_json::Value, Box<dyn Error>> {
        let response = request.send().await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {}", response.status()).into());
        }

        let text = response.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }
}

#[async_trait]
impl EventSource for Client {
    async fn get_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);

        let value = self.send(self.http.get(url)).await?;
        let collection: Collection = serde_json::from_value(value)?;
        Ok(collection.data)
    }

    async fn create_event(&self, draft: &Draft) -> Result<(), Box<dyn Error>> {
        let url = self.collection_url();
        log::debug!("POST {}", url);

        let request = self.http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(Self::json_body(draft)?);
        self.send(request).await?;
        Ok(())
    }

    async fn update_event(&self, id: &EventId, draft: &Draft) -> Result<(), Box<dyn Error>> {
        let url = self.event_url(id)?;
        log::debug!("PUT {}", url);

        let request = self.http
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(Self::json_body(draft)?);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), Box<dyn Error>> {
        let url = self.event_url(id)?;
        log::debug!("DELETE {}", url);

        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
