//! Tests of the HTTP client, against a small in-process server that mimics the REST API

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use event_manager::client::Client;
use event_manager::controller::Controller;
use event_manager::draft::{Draft, Field};
use event_manager::traits::EventSource;
use event_manager::EventId;

#[derive(Clone, Default)]
struct ServerState {
    last_id: Arc<Mutex<u64>>,
    events: Arc<Mutex<Vec<Value>>>,
}

async fn list_events(State(state): State<ServerState>) -> Json<Value> {
    let events = state.events.lock().unwrap().clone();
    Json(json!({ "data": events, "meta": { "pagination": { "total": events.len() } } }))
}

async fn create_event(State(state): State<ServerState>, Json(body): Json<Value>) -> Json<Value> {
    let mut last_id = state.last_id.lock().unwrap();
    *last_id += 1;
    let mut attributes = body["data"].clone();
    attributes["createdAt"] = json!("2024-05-01T00:00:00.000Z");
    let event = json!({ "id": *last_id, "attributes": attributes });
    state.events.lock().unwrap().push(event.clone());
    Json(json!({ "data": event }))
}

async fn update_event(State(state): State<ServerState>, Path(id): Path<u64>, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    let mut events = state.events.lock().unwrap();
    let event = events.iter_mut()
        .find(|event| event["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    event["attributes"] = body["data"].clone();
    Ok(Json(json!({ "data": event.clone() })))
}

async fn delete_event(State(state): State<ServerState>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let mut events = state.events.lock().unwrap();
    let position = events.iter()
        .position(|event| event["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    let removed = events.remove(position);
    Ok(Json(json!({ "data": removed })))
}

/// Start a server on a random port, and return its base URL
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_events_server() -> String {
    let app = Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
        .with_state(ServerState::default());
    spawn_server(app).await
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}


#[tokio::test]
async fn crud_over_http() {
    init_logger();
    let client = Client::new(spawn_events_server().await).unwrap();

    assert!(client.get_events().await.unwrap().is_empty());

    let launch = Draft::new("Launch", "Product launch", "2024-06-01");
    client.create_event(&launch).await.unwrap();
    let events = client.get_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id(), &EventId::from(1u64));
    assert!(events[0].matches(&launch));

    let relaunch = Draft::new("Relaunch", "Product launch", "2024-07-01");
    client.update_event(events[0].id(), &relaunch).await.unwrap();
    assert!(client.get_events().await.unwrap()[0].matches(&relaunch));

    client.delete_event(events[0].id()).await.unwrap();
    assert!(client.get_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_ids_are_errors() {
    init_logger();
    let client = Client::new(spawn_events_server().await).unwrap();

    let err = client.delete_event(&EventId::from(99u64)).await.unwrap_err();
    assert!(err.to_string().contains("404"));
    assert!(client.update_event(&EventId::from(99u64), &Draft::default()).await.is_err());
}

#[tokio::test]
async fn undecodable_replies_are_errors() {
    init_logger();
    let app = Router::new()
        .route("/api/events", get(|| async { "this is not JSON" }).post(|| async { "created" }))
        .route("/malformed/api/events", get(|| async { Json(json!({ "data": "nope" })) }));
    let base_url = spawn_server(app).await;

    let client = Client::new(&base_url).unwrap();
    assert!(client.get_events().await.is_err());
    assert!(client.create_event(&Draft::default()).await.is_err());

    let malformed = Client::new(format!("{}/malformed", base_url)).unwrap();
    assert!(malformed.get_events().await.is_err());
}

#[tokio::test]
async fn controller_over_http() {
    init_logger();
    let mut controller = Controller::new(Client::new(spawn_events_server().await).unwrap());
    assert!(controller.load().await);

    controller.set_new_field(Field::Name, "Launch");
    controller.set_new_field(Field::Description, "Product launch");
    controller.set_new_field(Field::Date, "2024-06-01");
    assert!(controller.create().await);
    assert_eq!(controller.events().len(), 1);
    assert_eq!(controller.events()[0].date(), "2024-06-01");

    let created = controller.events()[0].clone();
    assert!(controller.delete(created.id()).await);
    assert!(controller.events().is_empty());
}

#[tokio::test]
async fn unreachable_server() {
    init_logger();
    // Nothing listens on this port
    let mut controller = Controller::new(Client::new("http://127.0.0.1:1").unwrap());
    controller.set_new_field(Field::Name, "Launch");

    assert!(!controller.load().await);
    assert!(!controller.create().await);
    assert_eq!(controller.state().new_draft().name, "Launch");

    let titles: Vec<String> = controller.take_notifications().iter().map(|n| n.title().to_string()).collect();
    assert_eq!(titles, vec!["Error fetching events", "Error creating event"]);
}
