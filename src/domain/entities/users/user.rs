//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 엔티티입니다.
//! 식별자(`id`)만이 동등성 키이며, 한 번 할당된 식별자는 바뀌지 않습니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 로그인 패턴과 이름 필드의 유효성은 스토어가 아니라 경계(핸들러/서비스)에서
/// 보장됩니다. 스토어는 전달받은 레코드를 그대로 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// 서버가 생성한 새 식별자로 사용자를 만듭니다.
    pub fn new(login: String, first_name: String, last_name: String) -> Self {
        Self::with_id(Uuid::new_v4(), login, first_name, last_name)
    }

    /// 호출자가 지정한 식별자로 사용자를 만듭니다 (PUT을 통한 생성).
    pub fn with_id(id: Uuid, login: String, first_name: String, last_name: String) -> Self {
        Self {
            id,
            login,
            first_name,
            last_name,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}
