use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Sends a request through the full router and decodes the JSON body.
///
/// An empty body decodes to `Value::Null`.
async fn send(
    db: &DatabaseConnection,
    allow_anonymous_orders: bool,
    request: Request<Body>,
) -> (StatusCode, Value) {
    let response = router()
        .with_state(AppState::new(db.clone(), allow_anonymous_orders))
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
