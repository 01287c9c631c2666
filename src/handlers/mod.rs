//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 리포지토리 호출로 옮기고, 결과를 HTTP 응답으로 돌려주는 계층입니다.
//!
//! ```text
//! Client ──HTTP──► Handlers (이 모듈) ──► UserRepository ──► MongoDB / 메모리
//! ```
//!
//! 별도의 서비스 계층은 두지 않습니다. 리포지토리는 `web::Data<dyn UserRepository>`로
//! 주입되며, 에러는 [`AppError`](crate::core::errors::AppError)의 `ResponseError`
//! 구현을 통해 상태 코드와 alert 헤더로 변환됩니다.

pub mod users;
