//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 직렬화 구조체입니다.
//! 엔티티와 필드 구성은 같지만, JSON 필드명(camelCase)과 저장소 필드명
//! (`_id`, snake_case)이 다르기 때문에 분리해 둡니다.

pub mod users;
