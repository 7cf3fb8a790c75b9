
// This test simulates the full rotation against an echoing settings server:
//  - chunks are delivered strictly in order, one at a time
//  - a failing update is survived under the continue-on-error policy
//  - the halt policy propagates the first failure
//  - loop mode restarts the sequence after the last chunk

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::patch;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::credential::Credential;
use crate::driver::{FailurePolicy, Rotation};
use crate::tests::common::spawn_axum;
use crate::updater::{StatusUpdater, UpdateError};

const SETTINGS_PATH: &str = "/api/v6/users/@me/settings";

/// Settings endpoint that echoes the submitted text and records it.
fn echo_router(received: Arc<Mutex<Vec<String>>>) -> Router {
    Router::new().route(
        SETTINGS_PATH,
        patch(move |Json(body): Json<Value>| {
            let received = received.clone();
            async move {
                let text = body["custom_status"]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                received.lock().unwrap().push(text.clone());
                (StatusCode::OK, Json(json!({"custom_status": {"text": text}})))
            }
        }),
    )
}

fn rotation(addr: std::net::SocketAddr, chunk_length: usize, policy: FailurePolicy) -> Rotation {
    let endpoint = format!("http://{}{}", addr, SETTINGS_PATH);
    Rotation {
        updater: StatusUpdater::new(Some(endpoint), None).expect("build updater"),
        chunk_length,
        interval: Duration::ZERO,
        repeat: false,
        policy,
    }
}

#[tokio::test]
async fn single_pass_delivers_chunks_in_order() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let (handle, addr) = spawn_axum(echo_router(received.clone())).await;

    let credential = Credential::new("mfa.test-token");
    rotation(addr, 5, FailurePolicy::Continue)
        .run(&credential, "hello world")
        .await
        .expect("rotation should succeed");

    assert_eq!(*received.lock().unwrap(), vec!["hello", "worl", "d"]);

    handle.abort();
}

#[tokio::test]
async fn continue_policy_survives_a_rejected_update() {
    // First request gets 401, the rest echo normally.
    let received = Arc::new(Mutex::new(Vec::<String>::new()));
    let received_clone = received.clone();
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let router = Router::new().route(
        SETTINGS_PATH,
        patch(move |Json(body): Json<Value>| {
            let received = received_clone.clone();
            let counter = counter_clone.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"message": "401: Unauthorized", "code": 0})),
                    );
                }
                let text = body["custom_status"]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                received.lock().unwrap().push(text.clone());
                (StatusCode::OK, Json(json!({"custom_status": {"text": text}})))
            }
        }),
    );
    let (handle, addr) = spawn_axum(router).await;

    let credential = Credential::new("mfa.test-token");
    rotation(addr, 4, FailurePolicy::Continue)
        .run(&credential, "abcdefghij")
        .await
        .expect("one rejection must not abort the rotation");

    // "abcd" was rejected; "efgh" and "ij" still went through.
    assert_eq!(counter.load(Ordering::SeqCst), 3);
    assert_eq!(*received.lock().unwrap(), vec!["efgh", "ij"]);

    handle.abort();
}

#[tokio::test]
async fn halt_policy_propagates_the_first_failure() {
    let router = Router::new().route(
        SETTINGS_PATH,
        patch(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "401: Unauthorized", "code": 0})),
            )
        }),
    );
    let (handle, addr) = spawn_axum(router).await;

    let credential = Credential::new("mfa.test-token");
    let err = rotation(addr, 4, FailurePolicy::Halt)
        .run(&credential, "abcdefghij")
        .await
        .unwrap_err();

    match err.downcast_ref::<UpdateError>() {
        Some(UpdateError::Rejected(status)) => assert_eq!(status.as_u16(), 401),
        other => panic!("expected Rejected, got {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn loop_mode_restarts_the_sequence() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let (handle, addr) = spawn_axum(echo_router(received.clone())).await;

    let mut rotation = rotation(addr, 5, FailurePolicy::Continue);
    rotation.repeat = true;
    rotation.interval = Duration::from_millis(5);

    let credential = Credential::new("mfa.test-token");
    let runner = tokio::spawn(async move {
        let _ = rotation.run(&credential, "hello").await;
    });

    // One chunk per pass; more than one delivery proves the restart.
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if received.lock().unwrap().len() >= 3 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("loop mode should keep delivering chunks");

    runner.abort();
    assert!(received.lock().unwrap().iter().all(|t| t == "hello"));

    handle.abort();
}
