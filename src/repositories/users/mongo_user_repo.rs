//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 사용자 문서를 저장합니다.
//!
//! ## 식별자 할당
//!
//! MongoDB의 ObjectId 대신 정수 식별자를 사용하기 위해 `counters` 컬렉션에
//! 시퀀스 문서를 두고 `$inc` + upsert로 다음 값을 원자적으로 가져옵니다.
//!
//! ```json
//! { "_id": "users", "seq": 42 }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::users::user_repo::UserRepository;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";

/// `counters` 컬렉션의 시퀀스 문서
#[derive(Debug, Serialize, Deserialize)]
struct Sequence {
    #[serde(rename = "_id")]
    name: String,
    seq: i64,
}

pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    /// 다음 사용자 식별자를 할당합니다.
    ///
    /// 시퀀스 문서가 없으면 upsert로 생성되며 첫 값은 1입니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let sequence = self
            .db
            .collection::<Sequence>(COUNTERS_COLLECTION)
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("시퀀스 할당 실패: {}", e)))?
            .ok_or_else(|| AppError::DatabaseError("시퀀스 문서를 찾을 수 없습니다".to_string()))?;

        Ok(sequence.seq)
    }

    async fn insert_new(&self, mut user: User) -> AppResult<User> {
        user.id = Some(self.next_id().await?);

        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, user: User) -> AppResult<User> {
        let Some(id) = user.id else {
            return self.insert_new(user).await;
        };

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            log::debug!("저장된 사용자 {} 없음, 새 식별자로 삽입", id);
            return self.insert_new(User { id: None, ..user }).await;
        }

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use super::*;

    static DATABASE_SEQ: AtomicUsize = AtomicUsize::new(0);

    /// 테스트마다 별도의 데이터베이스를 사용합니다.
    /// `MONGODB_URI`가 없으면 `None`을 반환하여 테스트를 건너뜁니다.
    async fn repository() -> Option<(MongoUserRepository, Arc<Database>)> {
        let Ok(uri) = env::var("MONGODB_URI") else {
            eprintln!("MONGODB_URI not set, skipping MongoDB repository test");
            return None;
        };

        let database_name = format!(
            "users_test_{}_{}_{}",
            std::process::id(),
            Utc::now().timestamp_millis(),
            DATABASE_SEQ.fetch_add(1, Ordering::SeqCst)
        );
        let db = Arc::new(Database::connect(&uri, &database_name).await.unwrap());

        Some((MongoUserRepository::new(db.clone()), db))
    }

    async fn drop_database(db: &Database) {
        db.get_database().drop().await.unwrap();
    }

    fn sample() -> User {
        User::default().with_first_name("AAAAA").with_last_name("AAAAA")
    }

    #[actix_web::test]
    async fn test_sequence_starts_at_one_and_increases() {
        let Some((repo, db)) = repository().await else { return };

        let first = repo.save(sample()).await.unwrap();
        let second = repo.save(sample()).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.count().await.unwrap(), 2);

        drop_database(&db).await;
    }

    #[actix_web::test]
    async fn test_save_existing_replaces_whole_record() {
        let Some((repo, db)) = repository().await else { return };
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

        drop_database(&db).await;
    }

    #[actix_web::test]
    async fn test_save_unknown_id_inserts_with_new_id() {
        let Some((repo, db)) = repository().await else { return };
        repo.save(sample()).await.unwrap();

        let orphan = User {
            id: Some(99),
            ..sample()
        };
        let saved = repo.save(orphan).await.unwrap();

        assert_eq!(saved.id, Some(2));
        assert!(repo.find_by_id(99).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 2);

        drop_database(&db).await;
    }

    #[actix_web::test]
    async fn test_ids_are_not_reused_after_delete() {
        let Some((repo, db)) = repository().await else { return };
        let saved = repo.save(sample()).await.unwrap();

        assert!(repo.delete_by_id(1).await.unwrap());
        assert!(!repo.delete_by_id(1).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);

        let next = repo.save(sample()).await.unwrap();
        assert_ne!(next.id, saved.id);
        assert_eq!(next.id, Some(2));

        drop_database(&db).await;
    }

    #[actix_web::test]
    async fn test_find_all_is_ordered_by_id() {
        let Some((repo, db)) = repository().await else { return };
        for name in ["C", "A", "B"] {
            repo.save(User::default().with_first_name(name)).await.unwrap();
        }

        // 삽입 순서상 마지막이지만 식별자는 가장 작은 문서
        repo.collection()
            .insert_one(User {
                id: Some(0),
                ..sample()
            })
            .await
            .unwrap();

        let ids: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![Some(0), Some(1), Some(2), Some(3)]);

        drop_database(&db).await;
    }
}
