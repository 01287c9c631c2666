//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **alert 헤더**: 검증 실패 시 `X-{app}-error` 헤더로 실패 정보 전달
//!
//! 의존성은 컨테이너를 거치지 않고 `main`에서 직접 생성하여
//! `web::Data`로 핸들러에 전달합니다.

pub mod errors;
