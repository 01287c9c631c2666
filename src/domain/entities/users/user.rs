//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티입니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 식별자는 저장 시점에 리포지토리가 할당하며, 그 전까지는 `None`입니다.
/// 한 번 할당된 식별자는 변경되지 않습니다.
///
/// 동등성은 식별자로만 판단합니다. 두 인스턴스 모두 식별자가 있고 그 값이
/// 같을 때만 같은 엔티티로 취급하며, 이름 필드는 비교에 참여하지 않습니다.
/// 식별자가 없는 엔티티는 자기 자신과도 같지 않으므로 `Eq`는 구현하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 이름 (`first_name` 컬럼)
    #[serde(default)]
    pub first_name: Option<String>,
    /// 성 (`last_name` 컬럼)
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Users{{id={}, firstName='{}', lastName='{}'}}",
            self.id.map_or_else(|| "null".to_string(), |id| id.to_string()),
            self.first_name.as_deref().unwrap_or("null"),
            self.last_name.as_deref().unwrap_or("null"),
        )
    }
}
