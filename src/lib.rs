//! This crate provides a way to manage events stored behind a REST API.
//!
//! It provides an HTTP client in the [`client`] module, that can be used as a stand-alone module.
//!
//! Because a front end needs more than a client, this crate also provides a [`Controller`](controller::Controller),
//! that keeps a view of the remote collection together with the "new event" and "edit event" drafts. \
//! After every change it makes to the server, the controller reloads the whole collection, so that its view always mirrors the server. \
//! Errors never escape the controller: they are turned into [`Notification`]s that a front end can display.

pub mod traits;

pub mod event;
pub use event::{Event, EventAttributes, EventId};
pub mod draft;
pub use draft::{Draft, EditSession, Field};
pub mod notification;
pub use notification::{Notification, NotificationStatus};
pub mod state;
pub use state::ViewState;
pub mod controller;
pub use controller::Controller;

pub mod client;
pub mod mock_behaviour;
pub mod mock_source;

pub mod config;
pub mod render;
