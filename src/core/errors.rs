//! # Application Error Handling System
//!
//! 마이크로서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 반환한 에러가 그대로 HTTP 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `EntityAlert` | 400 Bad Request | 없음 (alert 헤더만 전달) |
//! | `NotFound` | 404 Not Found | 없음 |
//! | `DatabaseError` | 500 Internal Server Error | `{"error": ...}` |
//! | `ExternalServiceError` | 500 Internal Server Error | `{"error": ...}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": ...}` |
//!
//! 400/404 응답은 본문을 비워 두고, 클라이언트(UI)가 해석하는
//! `X-{app}-error` / `X-{app}-params` 헤더로만 실패 정보를 전달합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_user(repo: &dyn UserRepository, id: i64) -> AppResult<User> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("Users {} not found", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::utils::header_util;

/// 애플리케이션 전역 에러 타입
///
/// 리포지토리, 핸들러, 서비스 간 클라이언트에서 발생하는 모든 에러를 포괄합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연결 실패, 쿼리 실행 오류, 시퀀스 할당 실패 등을 나타냅니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 엔티티 검증 실패 (400 Bad Request)
    ///
    /// 요청 자체가 리소스 규칙과 맞지 않을 때 사용합니다.
    /// 예: 새로 생성할 레코드에 이미 `id`가 지정된 경우.
    /// 응답 본문 없이 failure alert 헤더만 내려갑니다.
    #[error("Validation error [{entity_name}.{error_key}]: {message}")]
    EntityAlert {
        entity_name: String,
        error_key: String,
        message: String,
    },

    /// 리소스 찾을 수 없음 에러 (404 Not Found, 빈 본문)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    ///
    /// 토큰 엔드포인트, 다른 마이크로서비스 호출 실패 시 발생합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 엔티티 검증 실패 에러를 생성합니다.
    pub fn entity_alert(entity_name: &str, error_key: &str, message: &str) -> Self {
        AppError::EntityAlert {
            entity_name: entity_name.to_string(),
            error_key: error_key.to_string(),
            message: message.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityAlert { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 400/404는 본문 없이, 나머지는 `{"error": "..."}` JSON 본문과 함께 응답합니다.
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::EntityAlert {
                entity_name,
                error_key,
                message,
            } => {
                let mut builder = HttpResponse::BadRequest();
                header_util::create_failure_alert(entity_name, error_key, message)
                    .apply_to(&mut builder);
                builder.finish()
            }
            AppError::NotFound(_) => HttpResponse::NotFound().finish(),
            _ => {
                log::error!("요청 처리 실패: {}", self);
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let options = ClientOptions::parse(&uri).await
///     .context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
