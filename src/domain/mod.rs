//! # Domain Layer
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 저장소 문서와 매핑되는 엔티티
//! └── dto/          ← HTTP 요청/응답 표현
//! ```

pub mod entities;
pub mod dto;
