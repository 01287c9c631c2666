//! # Domain Entities Module
//!
//! 저장소 문서와 1:1로 대응되는 도메인 엔티티를 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통해 MongoDB 문서로 변환
//! - **정수 식별자**: `_id` 필드에 리포지토리가 할당한 `i64` 시퀀스 값 저장
//!
//! HTTP 표현은 [`crate::domain::dto`]에서 별도로 정의합니다.

pub mod users;
