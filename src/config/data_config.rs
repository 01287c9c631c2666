//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 애플리케이션 이름, 실행 환경, 저장소 백엔드와
//! MongoDB 연결 정보를 환경 변수에서 읽어옵니다.

use std::env;
use std::fmt;
use std::str::FromStr;

use actix_web::http::header::HeaderName;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로부터 현재 환경을 결정합니다. (기본값: production)
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 애플리케이션 식별 설정
///
/// alert 헤더 이름(`X-{name}-alert`)과 헬스체크 응답에 사용됩니다.
pub struct ApplicationConfig;

impl ApplicationConfig {
    pub const DEFAULT_NAME: &'static str = "microserviceApp";

    /// `APP_NAME`이 헤더 이름에 쓸 수 없는 값이면 기본값을 사용합니다.
    pub fn name() -> String {
        Self::resolve_name(env::var("APP_NAME").ok())
    }

    pub fn resolve_name(raw: Option<String>) -> String {
        raw.filter(|name| Self::is_valid_name(name))
            .unwrap_or_else(|| Self::DEFAULT_NAME.to_string())
    }

    /// `X-{name}-params` 형태의 헤더 이름으로 쓸 수 있는지 검사합니다.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && HeaderName::try_from(format!("X-{}-params", name)).is_ok()
    }

    /// 시작 시 한 번 호출하여 잘못된 `APP_NAME`을 알립니다.
    pub fn check() {
        if let Ok(raw) = env::var("APP_NAME") {
            if !Self::is_valid_name(&raw) {
                log::warn!(
                    "APP_NAME '{}' cannot be used in alert header names, using '{}'",
                    raw,
                    Self::DEFAULT_NAME
                );
            }
        }
    }
}

/// 사용자 리포지토리 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryBackend {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (재시작 시 데이터 소멸)
    Memory,
}

impl RepositoryBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryBackend::MongoDb => "mongodb",
            RepositoryBackend::Memory => "memory",
        }
    }
}

impl fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(RepositoryBackend::MongoDb),
            "memory" | "in-memory" | "inmemory" => Ok(RepositoryBackend::Memory),
            other => Err(format!("Unsupported repository backend: {}", other)),
        }
    }
}

pub struct RepositoryConfig;

impl RepositoryConfig {
    /// `REPOSITORY_BACKEND` 값을 읽습니다. 잘못된 값이면 경고 후 MongoDB를 사용합니다.
    pub fn backend() -> RepositoryBackend {
        match env::var("REPOSITORY_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("{}. 기본값 mongodb 사용", e);
                RepositoryBackend::MongoDb
            }),
            Err(_) => RepositoryBackend::MongoDb,
        }
    }
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "microservice".to_string())
    }
}
