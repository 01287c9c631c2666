//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 trait 객체로 다루며, 구현체 선택과 생성은 `main`에서
//! 명시적으로 수행합니다.

pub mod users;
