use httpmock::prelude::*;
use sasa_desk::domain::model::NewConsultation;
use sasa_desk::domain::ports::{ConsultationStore, StoreSettings};
use sasa_desk::{AppError, SupabaseStore};

fn settings(server: &MockServer) -> StoreSettings {
    StoreSettings {
        url: server.base_url(),
        anon_key: "anon-key-123".to_string(),
        table: "consultations".to_string(),
    }
}

fn request() -> NewConsultation {
    NewConsultation {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone_number: "+91 98765 43210".to_string(),
        country_of_choice: Some("Germany".to_string()),
        level_of_education: Some("Master's".to_string()),
        selected_service: Some("Complete A-Z EU Support".to_string()),
        service_price: Some("INR 25,000".to_string()),
        additional_comments: None,
    }
}

#[tokio::test]
async fn test_insert_posts_one_row_and_returns_stored_record() {
    let server = MockServer::start_async().await;

    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/consultations")
                .header("apikey", "anon-key-123")
                .header("authorization", "Bearer anon-key-123")
                .header("prefer", "return=representation")
                .json_body(serde_json::json!([{
                    "full_name": "Asha Rao",
                    "email": "asha@example.com",
                    "phone_number": "+91 98765 43210",
                    "country_of_choice": "Germany",
                    "level_of_education": "Master's",
                    "selected_service": "Complete A-Z EU Support",
                    "service_price": "INR 25,000"
                }]));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{
                    "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                    "full_name": "Asha Rao",
                    "email": "asha@example.com",
                    "phone_number": "+91 98765 43210",
                    "country_of_choice": "Germany",
                    "level_of_education": "Master's",
                    "selected_service": "Complete A-Z EU Support",
                    "service_price": "INR 25,000",
                    "additional_comments": null,
                    "created_at": "2024-12-15T10:00:00.000000+00:00",
                    "updated_at": "2024-12-15T10:00:00.000000+00:00"
                }]));
        })
        .await;

    let store = SupabaseStore::new(&settings(&server));
    let stored = store.insert(&request()).await.unwrap();

    insert_mock.assert_async().await;
    assert_eq!(
        stored.id.to_string(),
        "0f8fad5b-d9cb-469f-a165-70867728950e"
    );
    assert_eq!(stored.request, request());
    assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn test_store_error_is_surfaced_verbatim() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/consultations");
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "code": "23502",
                    "details": "Failing row contains (...).",
                    "hint": null,
                    "message": "null value in column \"email\" of relation \"consultations\" violates not-null constraint"
                }));
        })
        .await;

    let store = SupabaseStore::new(&settings(&server));
    let err = store.insert(&request()).await.unwrap_err();

    match err {
        AppError::StoreError {
            status,
            code,
            message,
            details,
            hint,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("23502"));
            assert_eq!(
                message,
                "null value in column \"email\" of relation \"consultations\" violates not-null constraint"
            );
            assert_eq!(details.as_deref(), Some("Failing row contains (...)."));
            assert_eq!(hint, None);
        }
        other => panic!("expected store error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_message() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/consultations");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let store = SupabaseStore::new(&settings(&server));
    let err = store.insert(&request()).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::StoreError { status: 503, ref message, .. } if message == "upstream unavailable"
    ));
}

#[tokio::test]
async fn test_empty_representation_is_an_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/consultations");
            then.status(201).json_body(serde_json::json!([]));
        })
        .await;

    let store = SupabaseStore::new(&settings(&server));
    assert!(store.insert(&request()).await.is_err());
}

#[tokio::test]
async fn test_unreachable_store_is_an_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let store = SupabaseStore::new(&StoreSettings {
        url: format!("http://127.0.0.1:{}", port),
        anon_key: "anon".to_string(),
        table: "consultations".to_string(),
    });
    let err = store.insert(&request()).await.unwrap_err();
    assert!(matches!(err, AppError::HttpError(_)));
}

#[tokio::test]
async fn test_integer_id_and_naive_timestamps_are_accepted() {
    let server = MockServer::start_async().await;

    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/consultations");
            then.status(201).json_body(serde_json::json!([{
                "id": 42,
                "full_name": "Asha Rao",
                "email": "asha@example.com",
                "phone_number": "+91 98765 43210",
                "country_of_choice": "Germany",
                "level_of_education": "Master's",
                "selected_service": "Complete A-Z EU Support",
                "service_price": "INR 25,000",
                "additional_comments": null,
                "created_at": "2024-12-15T10:00:00.123456",
                "updated_at": "2024-12-15T10:00:00.123456"
            }]));
        })
        .await;

    let store = SupabaseStore::new(&settings(&server));
    let stored = store.insert(&request()).await.unwrap();

    insert_mock.assert_hits_async(1).await;
    assert_eq!(stored.id.to_string(), "42");
    assert_eq!(stored.request, request());
}

#[tokio::test]
async fn test_unreadable_success_body_is_a_store_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/consultations");
            then.status(201).json_body(serde_json::json!([{
                "id": {"composite": true},
                "full_name": "Asha Rao"
            }]));
        })
        .await;

    let store = SupabaseStore::new(&settings(&server));
    let err = store.insert(&request()).await.unwrap_err();

    match err {
        AppError::StoreError { status, message, .. } => {
            assert_eq!(status, 201);
            assert!(message.contains("may already be stored"));
        }
        other => panic!("expected store error, got {other:?}"),
    }
}
