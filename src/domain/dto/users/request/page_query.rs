//! 사용자 목록 조회 쿼리 파라미터
//!
//! `GET /users?pageNumber=&pageSize=`의 원시 값입니다. 범위 정규화는
//! [`PageRequest`](crate::services::pagination::PageRequest)가 담당하므로
//! 여기서는 음수나 0도 그대로 받아들입니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPageQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}
