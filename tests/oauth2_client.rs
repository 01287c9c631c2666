//! local-api 클라이언트 통합 테스트
//!
//! 임의 포트에 토큰 엔드포인트와 헤더 에코 엔드포인트를 가진 서버를 띄우고,
//! 실제 HTTP 왕복으로 Authorization 헤더 전파를 확인합니다.

mod common;

use std::sync::atomic::Ordering;

use common::{start_local_api, LocalApi};
use users_microservice::clients::{LocalApiClient, Server, ServiceClient};
use users_microservice::config::ClientAuthorization;
use users_microservice::core::errors::AppError;

fn local_api_client(api: &LocalApi, token_path: &str) -> LocalApiClient {
    let authorization = ClientAuthorization {
        access_token_uri: format!("http://127.0.0.1:{}{}", api.port, token_path),
        client_id: "internal".to_string(),
        client_secret: "internal".to_string(),
        scope: Some("web-app".to_string()),
    };

    LocalApiClient::new(ServiceClient::with_oauth2(
        "local-api",
        vec![Server::new("127.0.0.1", api.port)],
        authorization,
    ))
}

#[actix_web::test]
async fn test_headers_request_carries_bearer_token() {
    let api = start_local_api();
    let client = local_api_client(&api, "/oauth/token");

    let headers = client.get_headers().await.unwrap();

    assert_eq!(headers.get("authorization").map(String::as_str), Some("Bearer test-token"));

    api.handle.stop(true).await;
}

#[actix_web::test]
async fn test_token_is_fetched_once_and_reused() {
    let api = start_local_api();
    let client = local_api_client(&api, "/oauth/token");

    client.get_headers().await.unwrap();
    let headers = client.get_headers().await.unwrap();

    assert!(headers.contains_key("authorization"));
    assert_eq!(api.token_calls.load(Ordering::SeqCst), 1);

    api.handle.stop(true).await;
}

#[actix_web::test]
async fn test_token_endpoint_failure_is_reported() {
    let api = start_local_api();
    let client = local_api_client(&api, "/missing/token");

    let result = client.get_headers().await;

    assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    assert_eq!(api.token_calls.load(Ordering::SeqCst), 0);

    api.handle.stop(true).await;
}
