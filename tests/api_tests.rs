//! End-to-end tests for the loadboard HTTP API
//!
//! These tests exercise the complete flow from HTTP request to response:
//! routing, validation, the lifecycle rules, the cross-entity status
//! transitions, and the error body contract.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use loadboard::server::{AppState, build_router};

fn create_test_server() -> TestServer {
    let app = build_router(AppState::in_memory());
    TestServer::new(app)
}

fn load_payload() -> Value {
    json!({
        "shipperId": "shipper-1",
        "facility": {
            "loadingPoint": "Delhi",
            "unloadingPoint": "Mumbai",
            "loadingDate": "2026-03-01T08:00:00Z",
            "unloadingDate": "2026-03-03T18:00:00Z"
        },
        "productType": "Electronics",
        "truckType": "Container",
        "noOfTrucks": 2,
        "weight": 500.0,
        "comment": "handle with care"
    })
}

fn booking_payload(load_id: &str) -> Value {
    json!({
        "loadId": load_id,
        "transporterId": "transporter-1",
        "proposedRate": 15000.0
    })
}

async fn post_load(server: &TestServer) -> Value {
    let response = server.post("/load").json(&load_payload()).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn post_booking(server: &TestServer, load_id: &str) -> Value {
    let response = server.post("/booking").json(&booking_payload(load_id)).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

// =============================================================================
// Health
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

// =============================================================================
// Load CRUD
// =============================================================================

mod load_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_load_assigns_id_timestamp_and_posted_status() {
        let server = create_test_server();

        let body = post_load(&server).await;

        assert_eq!(body["status"], "POSTED");
        assert_eq!(body["shipperId"], "shipper-1");
        assert_eq!(body["noOfTrucks"], 2);
        assert_eq!(body["facility"]["loadingPoint"], "Delhi");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body["datePosted"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_create_load_ignores_caller_supplied_status_and_id() {
        let server = create_test_server();

        let mut payload = load_payload();
        payload["id"] = json!("11111111-1111-1111-1111-111111111111");
        payload["status"] = json!("CANCELLED");

        let response = server.post("/load").json(&payload).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["status"], "POSTED");
        assert_ne!(body["id"], "11111111-1111-1111-1111-111111111111");
    }

    #[tokio::test]
    async fn test_create_load_validation_lists_every_violation() {
        let server = create_test_server();

        let response = server
            .post("/load")
            .json(&json!({
                "shipperId": " ",
                "facility": {
                    "loadingPoint": "Delhi",
                    "unloadingPoint": "Mumbai",
                    "loadingDate": "2026-03-01T08:00:00Z",
                    "unloadingDate": "2026-03-03T18:00:00Z"
                },
                "productType": "Electronics",
                "truckType": "Container",
                "noOfTrucks": 0,
                "weight": -1
            }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["path"], "/load");

        let errors: Vec<String> = serde_json::from_value(body["errors"].clone()).unwrap();
        assert_eq!(
            errors,
            vec![
                "Shipper ID is required",
                "Number of trucks must be at least 1",
                "Weight must be positive",
            ]
        );

        // nothing was persisted
        let loads: Vec<Value> = server.get("/load").await.json();
        assert!(loads.is_empty());
    }

    #[tokio::test]
    async fn test_create_load_missing_facility_reports_sub_record() {
        let server = create_test_server();

        let mut payload = load_payload();
        payload.as_object_mut().unwrap().remove("facility");

        let response = server.post("/load").json(&payload).await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["errors"], json!(["Facility details are required"]));
    }

    #[tokio::test]
    async fn test_get_load_round_trips() {
        let server = create_test_server();
        let created = post_load(&server).await;

        let response = server
            .get(&format!("/load/{}", created["id"].as_str().unwrap()))
            .await;
        response.assert_status_ok();

        let fetched: Value = response.json();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_load_returns_error_body() {
        let server = create_test_server();
        let missing = "7f2f54a8-0000-0000-0000-000000000000";

        let response = server.get(&format!("/load/{}", missing)).await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(
            body["message"],
            format!("Load not found with id: '{}'", missing)
        );
        assert_eq!(body["path"], format!("/load/{}", missing));
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_list_loads_honors_single_filter_priority() {
        let server = create_test_server();
        post_load(&server).await;

        let mut other = load_payload();
        other["shipperId"] = json!("shipper-2");
        other["truckType"] = json!("Flatbed");
        server.post("/load").json(&other).await.assert_status(StatusCode::CREATED);

        // both params supplied: shipperId wins, truckType is ignored
        let loads: Vec<Value> = server
            .get("/load")
            .add_query_param("shipperId", "shipper-1")
            .add_query_param("truckType", "Flatbed")
            .await
            .json();

        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0]["shipperId"], "shipper-1");
        assert_eq!(loads[0]["truckType"], "Container");
    }

    #[tokio::test]
    async fn test_list_loads_by_status() {
        let server = create_test_server();
        let created = post_load(&server).await;
        post_load(&server).await;

        let id = created["id"].as_str().unwrap();
        server
            .patch(&format!("/load/{}/status", id))
            .add_query_param("status", "CANCELLED")
            .await
            .assert_status_ok();

        let cancelled: Vec<Value> = server
            .get("/load")
            .add_query_param("status", "CANCELLED")
            .await
            .json();

        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_update_load_preserves_status_and_posted_timestamp() {
        let server = create_test_server();
        let created = post_load(&server).await;
        let id = created["id"].as_str().unwrap();

        server
            .patch(&format!("/load/{}/status", id))
            .add_query_param("status", "BOOKED")
            .await
            .assert_status_ok();

        let mut update = load_payload();
        update["shipperId"] = json!("shipper-9");
        update["weight"] = json!(750.0);

        let response = server.put(&format!("/load/{}", id)).json(&update).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["shipperId"], "shipper-9");
        assert_eq!(body["weight"], 750.0);
        assert_eq!(body["status"], "BOOKED");
        assert_eq!(body["datePosted"], created["datePosted"]);
    }

    #[tokio::test]
    async fn test_update_missing_load_is_not_found() {
        let server = create_test_server();

        let response = server
            .put("/load/7f2f54a8-0000-0000-0000-000000000000")
            .json(&load_payload())
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_load_returns_no_content() {
        let server = create_test_server();
        let created = post_load(&server).await;
        let id = created["id"].as_str().unwrap();

        server
            .delete(&format!("/load/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/load/{}", id))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_load_status_accepts_any_domain_value() {
        let server = create_test_server();
        let created = post_load(&server).await;
        let id = created["id"].as_str().unwrap();

        for status in ["CANCELLED", "BOOKED", "POSTED"] {
            let response = server
                .patch(&format!("/load/{}/status", id))
                .add_query_param("status", status)
                .await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body["status"], status);
        }
    }

    #[tokio::test]
    async fn test_update_load_status_rejects_out_of_domain_value() {
        let server = create_test_server();
        let created = post_load(&server).await;
        let id = created["id"].as_str().unwrap();

        let response = server
            .patch(&format!("/load/{}/status", id))
            .add_query_param("status", "SHIPPED")
            .await;
        response.assert_status_bad_request();
    }
}

// =============================================================================
// Booking CRUD and cross-entity transitions
// =============================================================================

mod booking_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_booking_is_pending_and_books_the_load() {
        let server = create_test_server();
        let load = post_load(&server).await;
        let load_id = load["id"].as_str().unwrap();

        let booking = post_booking(&server, load_id).await;

        assert_eq!(booking["status"], "PENDING");
        assert_eq!(booking["loadId"], load["id"]);
        assert!(booking["id"].as_str().is_some());
        assert!(booking["requestedAt"].as_str().is_some());
        // embedded load reflects the side effect
        assert_eq!(booking["load"]["status"], "BOOKED");

        let fetched: Value = server.get(&format!("/load/{}", load_id)).await.json();
        assert_eq!(fetched["status"], "BOOKED");
    }

    #[tokio::test]
    async fn test_create_booking_against_missing_load_is_not_found() {
        let server = create_test_server();

        let response = server
            .post("/booking")
            .json(&booking_payload("7f2f54a8-0000-0000-0000-000000000000"))
            .await;
        response.assert_status_not_found();

        let bookings: Vec<Value> = server.get("/booking").await.json();
        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn test_create_booking_against_cancelled_load_is_rejected() {
        let server = create_test_server();
        let load = post_load(&server).await;
        let load_id = load["id"].as_str().unwrap();

        server
            .patch(&format!("/load/{}/status", load_id))
            .add_query_param("status", "CANCELLED")
            .await
            .assert_status_ok();

        let response = server.post("/booking").json(&booking_payload(load_id)).await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["message"], "Cannot create booking for a cancelled load");
        assert_eq!(body["path"], "/booking");

        // no booking was persisted and the load is untouched
        let bookings: Vec<Value> = server.get("/booking").await.json();
        assert!(bookings.is_empty());
        let fetched: Value = server.get(&format!("/load/{}", load_id)).await.json();
        assert_eq!(fetched["status"], "CANCELLED");
    }

    #[tokio::test]
    async fn test_create_booking_validation_lists_every_violation() {
        let server = create_test_server();

        let response = server
            .post("/booking")
            .json(&json!({ "transporterId": "", "proposedRate": -5 }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        let errors: Vec<String> = serde_json::from_value(body["errors"].clone()).unwrap();
        assert_eq!(
            errors,
            vec![
                "Load ID is required",
                "Transporter ID is required",
                "Proposed rate must be positive",
            ]
        );
    }

    #[tokio::test]
    async fn test_list_bookings_by_load_requires_existing_load() {
        let server = create_test_server();

        let response = server
            .get("/booking")
            .add_query_param("loadId", "7f2f54a8-0000-0000-0000-000000000000")
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_bookings_by_transporter() {
        let server = create_test_server();
        let load_a = post_load(&server).await;
        let load_b = post_load(&server).await;
        post_booking(&server, load_a["id"].as_str().unwrap()).await;

        let mut other = booking_payload(load_b["id"].as_str().unwrap());
        other["transporterId"] = json!("transporter-2");
        server
            .post("/booking")
            .json(&other)
            .await
            .assert_status(StatusCode::CREATED);

        let bookings: Vec<Value> = server
            .get("/booking")
            .add_query_param("transporterId", "transporter-2")
            .await
            .json();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0]["transporterId"], "transporter-2");
    }

    #[tokio::test]
    async fn test_get_booking_embeds_load_while_resolvable() {
        let server = create_test_server();
        let load = post_load(&server).await;
        let load_id = load["id"].as_str().unwrap();
        let booking = post_booking(&server, load_id).await;
        let booking_id = booking["id"].as_str().unwrap();

        let fetched: Value = server.get(&format!("/booking/{}", booking_id)).await.json();
        assert_eq!(fetched["load"]["id"], load["id"]);

        // deleting the load performs no cascade; the join just stops resolving
        server
            .delete(&format!("/load/{}", load_id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let fetched: Value = server.get(&format!("/booking/{}", booking_id)).await.json();
        assert!(fetched.get("load").is_none());
    }

    #[tokio::test]
    async fn test_update_booking_revalidates_new_load_reference() {
        let server = create_test_server();
        let load = post_load(&server).await;
        let booking = post_booking(&server, load["id"].as_str().unwrap()).await;

        let response = server
            .put(&format!("/booking/{}", booking["id"].as_str().unwrap()))
            .json(&booking_payload("7f2f54a8-0000-0000-0000-000000000000"))
            .await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Load not found")
        );
    }

    #[tokio::test]
    async fn test_update_booking_keeps_status_and_requested_at() {
        let server = create_test_server();
        let load = post_load(&server).await;
        let created = post_booking(&server, load["id"].as_str().unwrap()).await;
        let booking_id = created["id"].as_str().unwrap();

        server
            .patch(&format!("/booking/{}/status", booking_id))
            .add_query_param("status", "ACCEPTED")
            .await
            .assert_status_ok();

        let mut update = booking_payload(load["id"].as_str().unwrap());
        update["proposedRate"] = json!(18000.0);

        let response = server
            .put(&format!("/booking/{}", booking_id))
            .json(&update)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["proposedRate"], 18000.0);
        assert_eq!(body["status"], "ACCEPTED");
        assert_eq!(body["requestedAt"], created["requestedAt"]);
    }

    #[tokio::test]
    async fn test_update_booking_status_accepts_any_domain_value() {
        let server = create_test_server();
        let load = post_load(&server).await;
        let booking = post_booking(&server, load["id"].as_str().unwrap()).await;
        let booking_id = booking["id"].as_str().unwrap();

        for status in ["REJECTED", "ACCEPTED", "PENDING"] {
            let response = server
                .patch(&format!("/booking/{}/status", booking_id))
                .add_query_param("status", status)
                .await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body["status"], status);
        }
    }

    #[tokio::test]
    async fn test_delete_missing_booking_is_not_found() {
        let server = create_test_server();

        server
            .delete("/booking/7f2f54a8-0000-0000-0000-000000000000")
            .await
            .assert_status_not_found();
    }
}

// =============================================================================
// Lifecycle scenario
// =============================================================================

mod lifecycle_scenario {
    use super::*;

    /// The full marketplace walk: two bookings against one load, then one of
    /// them is withdrawn, cancelling the entire load while the sibling
    /// booking survives.
    #[tokio::test]
    async fn test_two_bookings_then_delete_one_cancels_the_load() {
        let server = create_test_server();

        let load = post_load(&server).await;
        let load_id = load["id"].as_str().unwrap();
        assert_eq!(load["status"], "POSTED");

        // first booking books the load
        let b1 = post_booking(&server, load_id).await;
        let fetched: Value = server.get(&format!("/load/{}", load_id)).await.json();
        assert_eq!(fetched["status"], "BOOKED");

        // second booking re-triggers the transition idempotently
        let mut second = booking_payload(load_id);
        second["transporterId"] = json!("transporter-2");
        let b2: Value = {
            let response = server.post("/booking").json(&second).await;
            response.assert_status(StatusCode::CREATED);
            response.json()
        };
        let fetched: Value = server.get(&format!("/load/{}", load_id)).await.json();
        assert_eq!(fetched["status"], "BOOKED");

        // deleting B1 cancels the entire load
        server
            .delete(&format!("/booking/{}", b1["id"].as_str().unwrap()))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let fetched: Value = server.get(&format!("/load/{}", load_id)).await.json();
        assert_eq!(fetched["status"], "CANCELLED");

        // B2 is unaffected, still pending
        let sibling: Value = server
            .get(&format!("/booking/{}", b2["id"].as_str().unwrap()))
            .await
            .json();
        assert_eq!(sibling["status"], "PENDING");
        assert_eq!(sibling["load"]["status"], "CANCELLED");
    }
}
