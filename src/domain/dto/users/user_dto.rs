//! 사용자 요청/응답 DTO
//!
//! `/api/users` 엔드포인트가 주고받는 JSON 표현입니다.
//!
//! ```json
//! { "id": 1, "firstName": "AAAAA", "lastName": "AAAAA" }
//! ```
//!
//! 모든 필드는 `null`을 허용하며, 응답에서도 `null` 값을 생략하지 않습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
        } = user;

        Self {
            id,
            first_name,
            last_name,
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        let UserDto {
            id,
            first_name,
            last_name,
        } = dto;

        Self {
            id,
            first_name,
            last_name,
        }
    }
}
