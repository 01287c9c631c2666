//! # Users Microservice
//!
//! 단일 `Users` 레코드(이름, 성)에 대한 CRUD REST API와,
//! 다른 서비스를 OAuth2 토큰으로 호출하는 로드 밸런싱 클라이언트를 제공합니다.
//!
//! ```text
//! routes ─► handlers ─► repositories ─► db (MongoDB) / 메모리
//! clients ─► load balancer + OAuth2 interceptor ─► reqwest
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod clients;
