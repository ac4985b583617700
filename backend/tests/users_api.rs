//! End-to-end tests for the user API through the full actix application.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::web;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use user_service::domain::TRACE_ID_HEADER;
use user_service::inbound::http::build_app;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::persistence::StoreUserRepository;

const UNKNOWN_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(StoreUserRepository::in_memory())))
}

async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(build_app(state)).await
}

async fn send<S>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

fn user_payload() -> Value {
    json!({ "username": "John Doe", "age": 30, "hobbies": ["reading", "gaming"] })
}

fn error_message(body: &Value) -> &str {
    body.get("error")
        .and_then(Value::as_str)
        .expect("error body has message")
}

#[rstest]
#[actix_web::test]
async fn full_lifecycle(state: web::Data<HttpState>) {
    let app = init_app(state).await;

    let (status, body) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = send(
        &app,
        TestRequest::post().uri("/api/users").set_json(user_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("created user has id")
        .to_owned();
    assert_eq!(created.get("username"), Some(&json!("John Doe")));

    let (status, fetched) = send(&app, TestRequest::get().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let replacement = json!({ "username": "Jane Doe", "age": 28, "hobbies": ["chess"] });
    let (status, updated) = send(
        &app,
        TestRequest::put()
            .uri(&format!("/api/users/{id}"))
            .set_json(&replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({ "id": id, "username": "Jane Doe", "age": 28, "hobbies": ["chess"] })
    );

    let (status, listed) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));

    let (status, body) = send(&app, TestRequest::delete().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, TestRequest::get().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), format!("User with id - [{id}] not found"));

    let (status, _) = send(&app, TestRequest::delete().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case(json!({}), 3)]
#[case(json!({ "username": "Ada" }), 2)]
#[case(json!({ "username": "Ada", "age": 3, "hobbies": [1] }), 1)]
#[case(json!("not an object"), 3)]
#[actix_web::test]
async fn invalid_payload_is_rejected_with_every_violation(
    state: web::Data<HttpState>,
    #[case] payload: Value,
    #[case] violations: usize,
) {
    let app = init_app(state).await;
    let (status, body) = send(
        &app,
        TestRequest::post().uri("/api/users").set_json(&payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "User input validation failed");
    let errors = body
        .get("errors")
        .and_then(Value::as_array)
        .expect("errors list");
    assert_eq!(errors.len(), violations);

    let (_, listed) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_client_error(state: web::Data<HttpState>) {
    let app = init_app(state).await;
    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"username\":"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("malformed_body")));
}

#[rstest]
#[case("/api/users/123")]
#[case("/api/users/not-a-uuid")]
#[case("/api/users/")]
#[case("/api/users/3fa85f64-5717-0562-b3fc-2c963f66afa6")]
#[case("/api/users/123e4567-e89b-12d3-a456-426614174000")]
#[case("/api/users/3fa85f64-5717-4562-03fc-2c963f66afa6")]
#[case("/api/users/00000000-0000-0000-0000-000000000000")]
#[actix_web::test]
async fn malformed_identifier_is_a_client_error(
    state: web::Data<HttpState>,
    #[case] uri: &str,
) {
    let app = init_app(state).await;
    for request in [
        TestRequest::get().uri(uri),
        TestRequest::put().uri(uri).set_json(user_payload()),
        TestRequest::delete().uri(uri),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.get("code"), Some(&json!("invalid_identifier")));
    }
}

#[rstest]
#[actix_web::test]
async fn updating_missing_user_does_not_create_it(state: web::Data<HttpState>) {
    let app = init_app(state).await;
    let (status, _) = send(
        &app,
        TestRequest::put()
            .uri(&format!("/api/users/{UNKNOWN_ID}"))
            .set_json(user_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case(TestRequest::patch().uri("/api/users"), "/api/users", "PATCH")]
#[case(TestRequest::get().uri("/api/unknown?x=1"), "/api/unknown?x=1", "GET")]
#[case(TestRequest::post().uri("/api/users/extra/segment"), "/api/users/extra/segment", "POST")]
#[case(TestRequest::get().uri("/health"), "/health", "GET")]
#[actix_web::test]
async fn unmatched_routes_are_not_found(
    state: web::Data<HttpState>,
    #[case] request: TestRequest,
    #[case] path: &str,
    #[case] method: &str,
) {
    let app = init_app(state).await;
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&body),
        format!("Not Found with Path - [{path}], method - [{method}]")
    );
}

#[rstest]
#[actix_web::test]
async fn error_trace_id_matches_response_header(state: web::Data<HttpState>) {
    let app = init_app(state).await;
    let response = test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/users/{UNKNOWN_ID}"))
            .to_request(),
    )
    .await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(header.as_str()));
}

#[rstest]
#[actix_web::test]
async fn concurrent_creates_are_all_kept(state: web::Data<HttpState>) {
    let app = init_app(state).await;
    let requests = (0..16).map(|n| {
        let payload = json!({ "username": format!("user-{n}"), "age": n, "hobbies": [] });
        send(&app, TestRequest::post().uri("/api/users").set_json(payload))
    });
    let results = futures_util::future::join_all(requests).await;
    assert!(results.iter().all(|(status, _)| *status == StatusCode::CREATED));

    let (_, listed) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(16));
}

#[rstest]
#[actix_web::test]
async fn single_user_round_trip(state: web::Data<HttpState>) {
    let app = init_app(state).await;

    let (status, created) = send(
        &app,
        TestRequest::post().uri("/api/users").set_json(user_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id is a string").to_owned();

    let (_, listed) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let (status, updated) = send(
        &app,
        TestRequest::put()
            .uri(&format!("/api/users/{id}"))
            .set_json(json!({ "username": "John", "age": 69, "hobbies": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["age"], json!(69));

    let (status, _) = send(&app, TestRequest::delete().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, TestRequest::get().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
