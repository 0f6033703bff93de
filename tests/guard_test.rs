//! Access Guard and stateless-route tests
//!
//! These run the real router end to end over a lazy pool: every path
//! exercised here rejects or answers before any query would run, so no
//! database is needed.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use common::{
    assert_message, authed_json_request, authed_request, body_json, json_request, test_app_without_db,
    test_keys,
};

#[tokio::test]
async fn missing_bearer_token_is_unauthorized() {
    let app = test_app_without_db();

    let request = Request::builder()
        .method("GET")
        .uri("/projects")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_message(
        response,
        StatusCode::UNAUTHORIZED,
        "No autorizado: Token no proporcionado",
    )
    .await;
}

#[tokio::test]
async fn non_bearer_authorization_is_unauthorized() {
    let app = test_app_without_db();

    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_forbidden() {
    let app = test_app_without_db();

    let response = app
        .oneshot(authed_request("GET", "/pricing", "not.a.jwt"))
        .await
        .unwrap();

    assert_message(
        response,
        StatusCode::FORBIDDEN,
        "No autorizado: Token inválido o expirado",
    )
    .await;
}

#[tokio::test]
async fn refresh_token_rejected_as_access_token() {
    let app = test_app_without_db();
    let keys = test_keys();

    // Well-formed and well-signed, but with the refresh key.
    let refresh_token = keys.issue_refresh(Uuid::new_v4()).unwrap();
    let response = app
        .oneshot(authed_request("GET", "/pricing", &refresh_token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_access_token_reaches_pricing_catalog() {
    let app = test_app_without_db();
    let keys = test_keys();

    let token = keys.issue_access(Uuid::new_v4()).unwrap();
    let response = app
        .oneshot(authed_request("GET", "/pricing", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let plans = json.as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0]["id"], "startup");
    assert_eq!(plans[1]["id"], "business");
    assert_eq!(plans[2]["id"], "enterprise");
}

#[tokio::test]
async fn pricing_select_requires_plan_id() {
    let app = test_app_without_db();
    let token = test_keys().issue_access(Uuid::new_v4()).unwrap();

    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/pricing/select",
            &token,
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_message(response, StatusCode::BAD_REQUEST, "El planId es requerido").await;
}

#[tokio::test]
async fn pricing_select_unknown_plan_is_not_found() {
    let app = test_app_without_db();
    let token = test_keys().issue_access(Uuid::new_v4()).unwrap();

    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/pricing/select",
            &token,
            serde_json::json!({"planId": "nope"}),
        ))
        .await
        .unwrap();

    assert_message(response, StatusCode::NOT_FOUND, "Plan no encontrado").await;
}

#[tokio::test]
async fn pricing_select_known_plan_succeeds() {
    let app = test_app_without_db();
    let token = test_keys().issue_access(Uuid::new_v4()).unwrap();

    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/pricing/select",
            &token,
            serde_json::json!({"planId": "business"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Plan seleccionado exitosamente: business");
}

#[tokio::test]
async fn refresh_without_cookie_is_unauthorized() {
    let app = test_app_without_db();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/refresh")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_cookie_is_idempotent_no_content() {
    let app = test_app_without_db();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/logout")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn logout_with_forged_cookie_still_no_content() {
    let app = test_app_without_db();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/logout")
        .header(header::COOKIE, "refreshToken=forged.token.value")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn register_rejects_weak_password_before_touching_store() {
    let app = test_app_without_db();

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            serde_json::json!({"nombre": "Ana", "email": "a@x.com", "password": "password"}),
        ))
        .await
        .unwrap();

    assert_message(
        response,
        StatusCode::BAD_REQUEST,
        "La contraseña debe contener al menos una mayúscula, una minúscula y un número",
    )
    .await;
}

#[tokio::test]
async fn login_rejects_malformed_email_before_touching_store() {
    let app = test_app_without_db();

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({"email": "not-an-email", "password": "Passw0rd"}),
        ))
        .await
        .unwrap();

    assert_message(response, StatusCode::BAD_REQUEST, "Debe ser un email válido").await;
}
