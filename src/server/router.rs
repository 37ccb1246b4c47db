//! Router assembly
//!
//! Wires the two entity route tables, the health endpoint, and the shared
//! middleware stack (request tracing, CORS, and the request-context
//! middleware that stamps the request path into JSON error bodies).

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::{self, Next};
use axum::response::{Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::entities::booking::handlers as booking_handlers;
use crate::entities::booking::service::BookingService;
use crate::entities::booking::store::BookingStore;
use crate::entities::load::handlers as load_handlers;
use crate::entities::load::service::LoadService;
use crate::entities::load::store::LoadStore;
use crate::storage::in_memory::{InMemoryBookingStore, InMemoryLoadStore};

/// Shared handler state: the two lifecycle components
#[derive(Clone)]
pub struct AppState {
    pub loads: Arc<LoadService>,
    pub bookings: Arc<BookingService>,
}

impl AppState {
    /// Wire the lifecycle components over fresh in-memory stores
    pub fn in_memory() -> Self {
        let load_store: Arc<dyn LoadStore> = Arc::new(InMemoryLoadStore::new());
        let booking_store: Arc<dyn BookingStore> = Arc::new(InMemoryBookingStore::new());

        let loads = Arc::new(LoadService::new(load_store.clone()));
        let bookings = Arc::new(BookingService::new(
            booking_store,
            load_store,
            loads.clone(),
        ));

        Self { loads, bookings }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(load_handlers::routes())
        .merge(booking_handlers::routes())
        .layer(middleware::from_fn(attach_request_path))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// Error bodies never exceed this; anything larger is not ours
const MAX_ERROR_BODY: usize = 64 * 1024;

/// Stamp the request path into JSON error bodies. The error type renders the
/// rest of the body but cannot see the request URI, so the rewrite happens
/// here, on the way out.
async fn attach_request_path(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let res = next.run(req).await;

    let status = res.status();
    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));
    if !(status.is_client_error() || status.is_server_error()) || !is_json {
        return res;
    }

    let (mut parts, body) = res.into_parts();
    let bytes = match to_bytes(body, MAX_ERROR_BODY).await {
        Ok(bytes) => bytes,
        Err(_) => return Response::from_parts(parts, Body::empty()),
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(mut body_map))
            if body_map.contains_key("status") && body_map.contains_key("error") =>
        {
            body_map.insert("path".to_string(), Value::String(path));
            match serde_json::to_vec(&body_map) {
                Ok(buf) => {
                    parts.headers.remove(CONTENT_LENGTH);
                    Response::from_parts(parts, Body::from(buf))
                }
                Err(_) => Response::from_parts(parts, Body::from(bytes)),
            }
        }
        _ => Response::from_parts(parts, Body::from(bytes)),
    }
}
