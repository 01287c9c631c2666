//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`header_util`] - REST 응답에 붙이는 alert 헤더 생성

pub mod header_util;
