//! 메모리 기반 사용자 리포지토리
//!
//! MongoDB 없이 서비스를 띄우거나(`REPOSITORY_BACKEND=memory`) 핸들러를
//! 테스트할 때 사용합니다. 식별자 순서가 유지되도록 `BTreeMap`에 보관합니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::repositories::users::user_repo::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<i64, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<i64, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        let id = match user.id {
            Some(id) if users.contains_key(&id) => id,
            _ => self.next_id(),
        };

        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.read()?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::default().with_first_name("AAAAA").with_last_name("AAAAA")
    }

    #[actix_web::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(sample()).await.unwrap();
        let second = repo.save(sample()).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_save_existing_replaces_whole_record() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(sample()).await.unwrap();

        let replacement = User {
            id: saved.id,
            first_name: Some("BBBBB".to_string()),
            last_name: None,
        };
        repo.save(replacement).await.unwrap();

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.first_name.as_deref(), Some("BBBBB"));
        assert_eq!(stored.last_name, None);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_save_unknown_id_inserts_with_new_id() {
        let repo = InMemoryUserRepository::new();
        repo.save(sample()).await.unwrap();

        let orphan = User {
            id: Some(99),
            ..sample()
        };
        let saved = repo.save(orphan).await.unwrap();

        assert_eq!(saved.id, Some(2));
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(sample()).await.unwrap();

        assert!(repo.delete_by_id(1).await.unwrap());
        assert!(!repo.delete_by_id(1).await.unwrap());

        let next = repo.save(sample()).await.unwrap();
        assert_ne!(next.id, saved.id);
        assert_eq!(next.id, Some(2));
    }

    #[actix_web::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        for name in ["C", "A", "B"] {
            repo.save(User::default().with_first_name(name)).await.unwrap();
        }

        let ids: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }
}
