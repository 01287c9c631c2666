//! HTTP 라우트 등록
//!
//! 메서드 + 경로를 핸들러 함수에 명시적으로 매핑합니다. 핸들러가 쓰는
//! 리포지토리는 `main`에서 `web::Data<dyn UserRepository>`로 등록됩니다.

use crate::config::{Environment, RepositoryConfig};
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": Environment::current().as_str(),
        "features": {
            "repository": RepositoryConfig::backend().as_str(),
        }
    }))
}
