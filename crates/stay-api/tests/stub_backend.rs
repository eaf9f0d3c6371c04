//! End-to-end client tests against a local axum stub of the listings backend.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use stay_api::{ApiClient, ApiError, EnquiryApi};
use stay_core::entities::{EnquiryPayload, EstablishmentId};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Recorded {
    enquiries: Arc<Mutex<Vec<Value>>>,
}

async fn establishment(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    match id.as_str() {
        "42" => Ok(Json(json!({"id": 42, "name": "Seaside Cottage", "rooms": 2}))),
        "broken" => Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn establishments() -> Json<Value> {
    Json(json!([
        {"id": 42, "name": "Seaside Cottage"},
        {"id": 43, "name": "Mountain Lodge"}
    ]))
}

async fn create_enquiry(
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorded.enquiries.lock().unwrap().push(body);
    (StatusCode::OK, Json(json!({"id": "enq-1"})))
}

async fn spawn_backend() -> (SocketAddr, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/establishments/", get(establishments))
        .route("/api/establishments/:id", get(establishment))
        .route("/api/enquiries/", post(create_enquiry))
        .with_state(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });
    (addr, recorded)
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(
        &format!("http://{addr}/api"),
        ApiClient::DEFAULT_TIMEOUT,
        "stay-test",
    )
    .expect("client builds")
}

fn sample_payload() -> EnquiryPayload {
    EnquiryPayload {
        full_name: "Alice Smith".into(),
        email_address: "alice@example.com".into(),
        check_in: "2024-06-01".into(),
        check_out: "2024-06-05".into(),
        establishment_name: "Seaside Cottage".into(),
    }
}

#[tokio::test]
async fn fetches_establishment_by_id() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(addr);

    let establishment = client
        .fetch_establishment(&EstablishmentId::new("42"))
        .await
        .expect("fetch succeeds");

    assert_eq!(establishment.name, "Seaside Cottage");
    assert_eq!(establishment.id, Some(EstablishmentId::new("42")));
    assert_eq!(establishment.details.get("rooms"), Some(&json!(2)));
}

#[tokio::test]
async fn missing_establishment_is_api_error() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(addr);

    let error = client
        .fetch_establishment(&EstablishmentId::new("999"))
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Api { status: 404, .. }));

    let error = client
        .fetch_establishment(&EstablishmentId::new("broken"))
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn lists_establishments() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(addr);

    let listing = client.list_establishments().await.expect("list succeeds");
    let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Seaside Cottage", "Mountain Lodge"]);
}

#[tokio::test]
async fn posts_enquiry_body_and_returns_response_verbatim() {
    let (addr, recorded) = spawn_backend().await;
    let client = client_for(addr);

    let result = client
        .create_enquiry(&sample_payload())
        .await
        .expect("post succeeds");

    assert_eq!(result.as_value(), &json!({"id": "enq-1"}));
    let sent = recorded.enquiries.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![json!({
            "full_name": "Alice Smith",
            "email_address": "alice@example.com",
            "check_in": "2024-06-01",
            "check_out": "2024-06-05",
            "establishment_name": "Seaside Cottage",
        })]
    );
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let error = client_for(addr)
        .create_enquiry(&sample_payload())
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Http(_)));
}
