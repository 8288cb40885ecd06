//! 사용자 응답 DTO
//!
//! 저장된 엔티티를 외부에 노출하는 형태입니다. 엔티티와 분리해 두어
//! 저장 구조가 바뀌어도 API 계약은 유지됩니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::users::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            login,
            first_name,
            last_name,
        } = user;

        Self {
            id,
            login,
            first_name,
            last_name,
        }
    }
}
