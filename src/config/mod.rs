//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드되고,
//! 각 설정 구조체는 호출 시점의 환경 변수를 기본값과 함께 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 저장소 백엔드, MongoDB 설정
//! - [`client_config`] - OAuth2 클라이언트 인증, 서비스별 정적 서버 목록
//!
//! ## 환경 변수 요약
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export APP_NAME="microserviceApp"
//! export REPOSITORY_BACKEND="mongodb"     # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="microservice"
//! ```

pub mod data_config;
pub mod client_config;

pub use data_config::*;
pub use client_config::*;
