//! # 사용자 리포지토리 인터페이스
//!
//! 핸들러는 이 trait에만 의존하며, 실제 저장소 구현은 `main`에서
//! 설정(`REPOSITORY_BACKEND`)에 따라 선택되어 `web::Data<dyn UserRepository>`로
//! 주입됩니다.
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`](super::MongoUserRepository) | MongoDB `users` 컬렉션 | 운영 |
//! | [`InMemoryUserRepository`](super::InMemoryUserRepository) | 프로세스 메모리 | 로컬 실행, 테스트 |
//!
//! ## `save` 동작 규칙
//!
//! - `id == None` → 새 식별자를 할당하고 삽입
//! - `id == Some(x)`이고 `x`가 저장되어 있음 → 문서 전체 교체 (부분 수정 아님)
//! - `id == Some(x)`이고 `x`가 없음 → 새 식별자를 할당하여 삽입
//!
//! 식별자는 단조 증가 시퀀스에서 할당되며 재사용되지 않습니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 저장하고, 식별자가 채워진 결과를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 저장된 모든 사용자를 식별자 오름차순으로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 사용자를 삭제합니다. 실제로 삭제된 문서가 있으면 `true`.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    async fn count(&self) -> AppResult<u64>;
}
