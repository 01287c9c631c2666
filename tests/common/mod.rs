//! 통합 테스트용 local-api 서버
//!
//! 임의 포트에 토큰 엔드포인트(`POST /oauth/token`)와 헤더 에코 엔드포인트
//! (`GET /headers`)를 띄웁니다.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

/// `internal:internal` 클라이언트 인증
const BASIC_INTERNAL: &str = "Basic aW50ZXJuYWw6aW50ZXJuYWw=";

async fn issue_token(
    calls: web::Data<AtomicUsize>,
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    calls.fetch_add(1, Ordering::SeqCst);

    let basic = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if basic != Some(BASIC_INTERNAL) {
        return HttpResponse::Unauthorized().finish();
    }
    if form.get("grant_type").map(String::as_str) != Some("client_credentials") {
        return HttpResponse::BadRequest().json(json!({ "error": "unsupported_grant_type" }));
    }

    HttpResponse::Ok().json(json!({
        "access_token": "test-token",
        "token_type": "bearer",
        "expires_in": 3600,
        "scope": form.get("scope"),
    }))
}

async fn echo_headers(req: HttpRequest) -> HttpResponse {
    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.to_string(), v.to_string())))
        .collect();

    HttpResponse::Ok().json(headers)
}

pub struct LocalApi {
    pub port: u16,
    pub token_calls: web::Data<AtomicUsize>,
    pub handle: ServerHandle,
}

/// 포트만 먼저 잡아 두고, 서버는 [`serve`]로 시작합니다.
pub fn bind_local_api() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

pub fn serve(listener: TcpListener) -> LocalApi {
    let port = listener.local_addr().unwrap().port();
    let token_calls = web::Data::new(AtomicUsize::new(0));
    let calls = token_calls.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(calls.clone())
            .route("/oauth/token", web::post().to(issue_token))
            .route("/headers", web::get().to(echo_headers))
    })
    .listen(listener)
    .unwrap()
    .workers(1)
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    LocalApi {
        port,
        token_calls,
        handle,
    }
}

pub fn start_local_api() -> LocalApi {
    let (listener, _) = bind_local_api();
    serve(listener)
}
