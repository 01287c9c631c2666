//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] trait과 저장소별 구현체를 제공합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let saved = repo.save(User::default().with_first_name("AAAAA")).await?;
//! ```

pub mod user_repo;
pub mod mongo_user_repo;
pub mod memory_user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use user_repo::UserRepository;
