//! Test helper utilities for webserver API tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use commission::{DataProviderError, InMemoryDataProvider, MockDataProvider};
use serde_json::Value;
use shared::User;
use tower::ServiceExt;
use webserver::{WebServer, USER_ROLE_HEADER};

/// Router over the demo network
pub fn demo_router() -> Router {
    WebServer::new(InMemoryDataProvider::demo()).build_router()
}

/// Router whose provider knows `user-123` but fails every other query
pub fn broken_backend_router() -> Router {
    let mut provider = MockDataProvider::new();
    provider
        .expect_find_user_by_id()
        .returning(|id| Ok(Some(User::new(id.as_str(), "John Doe"))));
    provider.expect_find_sale_by_id().returning(|_| Err(backend_down()));
    provider.expect_find_sales_by_user().returning(|_, _| Err(backend_down()));
    provider.expect_list_all_sales().returning(|| Err(backend_down()));
    provider.expect_find_direct_referrals().returning(|_| Err(backend_down()));

    WebServer::new(provider).build_router()
}

fn backend_down() -> DataProviderError {
    DataProviderError::Unavailable {
        message: "backend down".to_string(),
    }
}

/// Issue a GET and decode the JSON body
pub async fn get_json(router: Router, uri: &str, role: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(role) = role {
        request = request.header(USER_ROLE_HEADER, role);
    }

    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

/// Assert the `{ statusCode, error, message }` error shape
pub fn assert_error_body(body: &Value, status: StatusCode, message: &str) {
    assert_eq!(body["statusCode"], status.as_u16());
    assert_eq!(body["error"], status.canonical_reason().unwrap());
    assert_eq!(body["message"], message);
}

pub fn number(value: &Value) -> f64 {
    value.as_f64().unwrap_or_else(|| panic!("not a number: {value}"))
}
