//! Integration tests for the authenticated HTTP client against an in-process API.
//!
//! Run with: `cargo test -p carelink-client --test client_tests`

mod common;

use carelink_client::api;
use carelink_client::{guarded, ApiError, Session};
use chrono::NaiveDate;
use common::{mint_token, spawn_mock_api};
use pretty_assertions::assert_eq;
use shared_types::{Gender, NewInfant, NewParent, Role, SignInRequest};

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let mock = spawn_mock_api().await;
    let session = Session::in_memory();
    session.sign_in("abc123");
    let client = mock.client(session);

    let parents = api::list_parents(&client).await.unwrap();

    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0].full_name(), "Grace Mensah");
    let seen = mock.last_request();
    assert_eq!(seen.path, "/api/parents");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    api::list_parents(&client).await.unwrap();

    assert_eq!(mock.last_request().authorization, None);
}

#[tokio::test]
async fn relative_paths_without_leading_slash_resolve() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    let health = api::health(&client).await.unwrap();

    assert!(health.is_up());
    assert_eq!(mock.last_request().path, "/actuator/health");
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_body() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    let err = api::get_infant(&client, 99).await.unwrap_err();

    match &err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(*status, 404);
            let body = body.as_ref().expect("error body parsed");
            assert_eq!(body.best_message(), Some("Infant 99 not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.friendly_message(), "Infant 99 not found");
}

#[tokio::test]
async fn unauthorized_is_not_interpreted() {
    let mock = spawn_mock_api().await;
    let session = Session::in_memory();
    session.sign_in("stale");
    let client = mock.client(session.clone());

    let err = api::sign_in(
        &client,
        &SignInRequest {
            email: "abena@clinic.org".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(err.is_unauthorized());
    // No redirect, no refresh: the existing token is left alone.
    assert_eq!(session.token().as_deref(), Some("stale"));
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn sign_in_stores_token_and_claims_decode() {
    let mock = spawn_mock_api().await;
    let session = Session::in_memory();
    let client = mock.client(session.clone());

    let response = api::sign_in(
        &client,
        &SignInRequest {
            email: "abena@clinic.org".to_string(),
            password: "correct-horse".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(session.token().as_deref(), Some(response.token.as_str()));
    let claims = session.active_claims_now().expect("fresh session is active");
    assert_eq!(claims.role, Role::HealthWorker);
    assert_eq!(claims.display_name(), "abena");

    api::sign_out(&client);
    assert!(session.active_claims_now().is_none());
}

#[tokio::test]
async fn expired_credential_is_no_session_but_still_sent() {
    let mock = spawn_mock_api().await;
    let token = mint_token("SUPER_ADMIN", -60);
    let session = Session::in_memory();
    session.sign_in(&token);
    let client = mock.client(session.clone());

    assert!(session.active_claims_now().is_none());
    assert_eq!(session.claims().unwrap().role, Role::SuperAdmin);

    api::recent_logs(&client).await.unwrap();
    assert_eq!(
        mock.last_request().authorization,
        Some(format!("Bearer {token}"))
    );
}

#[tokio::test]
async fn memory_usage_queries_heap_and_non_heap_separately() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    let usage = api::memory_usage(&client).await.unwrap();

    assert_eq!(usage.heap_bytes, 268_435_456.0);
    assert_eq!(usage.non_heap_bytes, 67_108_864.0);
    let mut queries: Vec<_> = mock
        .requests()
        .into_iter()
        .map(|r| (r.path, r.query.unwrap_or_default()))
        .collect();
    queries.sort();
    assert_eq!(
        queries,
        vec![
            ("/actuator/metrics/jvm.memory.used".to_string(), "tag=area%3Aheap".to_string()),
            ("/actuator/metrics/jvm.memory.used".to_string(), "tag=area%3Anonheap".to_string()),
        ]
    );
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    api::delete_parent(&client, 2).await.unwrap();

    let seen = mock.last_request();
    assert_eq!(seen.method, "DELETE");
    assert_eq!(seen.path, "/api/parents/2");
}

#[tokio::test]
async fn updates_put_to_the_record_path() {
    let mock = spawn_mock_api().await;
    let session = Session::in_memory();
    session.sign_in("abc123");
    let client = mock.client(session);

    let parent = NewParent {
        first_name: "Grace".to_string(),
        last_name: "Mensah-Boateng".to_string(),
        ..Default::default()
    };
    let saved = api::update_parent(&client, 1, &parent).await.unwrap();
    assert_eq!(saved.id, 1);
    assert_eq!(saved.last_name, "Mensah-Boateng");
    let seen = mock.last_request();
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.path, "/api/parents/1");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer abc123"));

    let infant = NewInfant {
        first_name: "Kofi".to_string(),
        last_name: "Mensah".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        gender: Some(Gender::Male),
        birth_weight: Some(3.2),
        parent_id: 1,
    };
    let saved = api::update_infant(&client, 7, &infant).await.unwrap();
    assert_eq!(saved.id, 7);
    assert_eq!(saved.gender, Some(Gender::Male));
    assert_eq!(mock.last_request().path, "/api/infants/7");
}

#[tokio::test]
async fn infant_delete_accepts_empty_body() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    api::delete_infant(&client, 7).await.unwrap();

    let seen = mock.last_request();
    assert_eq!(seen.method, "DELETE");
    assert_eq!(seen.path, "/api/infants/7");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    let err = client
        .get::<Vec<serde_json::Value>>("/api/broken")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn cancelled_request_resolves_to_cancelled() {
    let mock = spawn_mock_api().await;
    let client = mock.client(Session::in_memory());

    let (request, guard) =
        guarded(async move { client.get::<Vec<serde_json::Value>>("/api/slow").await });
    let handle = tokio::spawn(request);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    drop(guard);

    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .expect("cancellation is prompt")
        .unwrap();
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

#[tokio::test]
async fn transport_failure_is_surfaced() {
    let client = carelink_client::ApiClient::new("http://127.0.0.1:9", Session::in_memory());

    let err = api::list_facilities(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.status(), None);
}
