//! End-to-end workflow tests against a scripted carrier.
//!
//! Covers the example scenario (order 42, tracker T1) plus the failure
//! modes at each pipeline step.

use parcel_gateway::carrier::{AuthRequest, MockCarrier};
use parcel_gateway::gateway::error::{Step, TrackError};
use parcel_gateway::gateway::types::TrackOrderRequest;
use parcel_gateway::run_track_order;
use parcel_gateway::token_store::{MemoryTokenStore, TokenRecord, TokenStore};

fn request(order_id: i64, postal_code: Option<&str>) -> TrackOrderRequest {
    TrackOrderRequest {
        auth: AuthRequest {
            user_id: "u1".to_string(),
            key: "k1".to_string(),
            account_numbers: vec!["05868468".to_string()],
            order_id,
        },
        postal_code: postal_code.map(str::to_string),
    }
}

#[tokio::test]
async fn example_scenario_order_42() {
    let carrier = MockCarrier::new()
        .with_auth(200, r#"{"accessToken":"A","refreshToken":"R"}"#)
        .with_labels(200, r#"[{"trackerCode":"T1"}]"#)
        .with_track(200, r#"{"status":"in_transit"}"#);
    let store = MemoryTokenStore::new();

    let response = run_track_order(&carrier, &store, request(42, None))
        .await
        .unwrap();

    // Combined response
    assert_eq!(response.order_id, "42");
    assert_eq!(response.tracker_code, "T1");
    assert!(response.tokens_stored);
    assert_eq!(response.token_store_key, "42");
    assert_eq!(
        response.track_trace,
        serde_json::json!({"status": "in_transit"})
    );

    // Track-trace key was the bare tracker code
    assert_eq!(carrier.track_requests(), vec!["T1".to_string()]);

    // Subsequent lookup returns exactly the stored record
    assert_eq!(
        store.get("42"),
        Some(TokenRecord {
            access_token: "A".to_string(),
            refresh_token: "R".to_string(),
            access_token_expiration: None,
            refresh_token_expiration: None,
        })
    );
}

#[tokio::test]
async fn postal_code_extends_the_lookup_key() {
    let carrier = MockCarrier::new()
        .with_auth(200, r#"{"accessToken":"A","refreshToken":"R"}"#)
        .with_labels(200, r#"[{"trackerCode":"3SDEVC123456789"}]"#)
        .with_track(200, r#"{"status":"delivered"}"#);
    let store = MemoryTokenStore::new();

    run_track_order(&carrier, &store, request(7, Some("1234AB")))
        .await
        .unwrap();

    assert_eq!(
        carrier.track_requests(),
        vec!["3SDEVC123456789+1234AB".to_string()]
    );
}

#[tokio::test]
async fn failed_authentication_propagates_status_and_writes_nothing() {
    let carrier = MockCarrier::new().with_auth(403, r#"{"message":"invalid key"}"#);
    let store = MemoryTokenStore::new();

    let err = run_track_order(&carrier, &store, request(42, None))
        .await
        .unwrap_err();

    match err {
        TrackError::Upstream { step, status, body } => {
            assert_eq!(step, Step::Authenticate);
            assert_eq!(status, 403);
            assert!(body.contains("invalid key"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    assert!(store.get("42").is_none());
}

#[tokio::test]
async fn labels_failure_keeps_the_token_record() {
    let carrier = MockCarrier::new()
        .with_auth(200, r#"{"accessToken":"A","refreshToken":"R"}"#)
        .with_labels(200, "[]");
    let store = MemoryTokenStore::new();

    let err = run_track_order(&carrier, &store, request(42, None))
        .await
        .unwrap_err();

    assert!(matches!(err, TrackError::NotFound(_)));
    // Tokens from step 1 stay available for direct lookup
    assert_eq!(store.get("42").unwrap().access_token, "A");
}

#[tokio::test]
async fn labels_call_uses_the_fresh_access_token() {
    let carrier = MockCarrier::new()
        .with_auth(200, r#"{"accessToken":"fresh-token","refreshToken":"R"}"#)
        .with_labels(200, r#"[{"trackerCode":"T1"}]"#)
        .with_track(200, "{}");
    let store = MemoryTokenStore::new();

    run_track_order(&carrier, &store, request(42, None))
        .await
        .unwrap();

    assert_eq!(
        carrier.label_requests(),
        vec![("42".to_string(), "fresh-token".to_string())]
    );
}

#[tokio::test]
async fn carrier_outage_is_reported_as_network_failure() {
    let carrier = MockCarrier::new();
    let store = MemoryTokenStore::new();

    let err = run_track_order(&carrier, &store, request(42, None))
        .await
        .unwrap_err();

    assert!(matches!(err, TrackError::Network(_)));
}

#[tokio::test]
async fn repeated_runs_for_one_order_keep_only_the_latest_tokens() {
    let store = MemoryTokenStore::new();

    for tokens in ["first", "second", "third"] {
        let carrier = MockCarrier::new()
            .with_auth(
                200,
                &format!(r#"{{"accessToken":"{tokens}","refreshToken":"R"}}"#),
            )
            .with_labels(200, r#"[{"trackerCode":"T1"}]"#)
            .with_track(200, "{}");
        run_track_order(&carrier, &store, request(42, None))
            .await
            .unwrap();
    }

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("42").unwrap().access_token, "third");
}

#[tokio::test]
async fn concurrent_runs_for_one_order_leave_a_single_record() {
    use std::sync::Arc;

    let store = Arc::new(MemoryTokenStore::new());

    let mut handles = vec![];
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let carrier = MockCarrier::new()
                .with_auth(
                    200,
                    &format!(r#"{{"accessToken":"A{i}","refreshToken":"R{i}"}}"#),
                )
                .with_labels(200, r#"[{"trackerCode":"T1"}]"#)
                .with_track(200, "{}");
            run_track_order(&carrier, store.as_ref(), request(42, None))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Last write wins; no merging, no error
    assert_eq!(store.len(), 1);
    let record = store.get("42").unwrap();
    assert!(record.access_token.starts_with("A"));
    assert_eq!(
        record.refresh_token.trim_start_matches("R"),
        record.access_token.trim_start_matches("A")
    );
}
