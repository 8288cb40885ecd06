//! `X-Pagination` 헤더 페이로드
//!
//! ```json
//! {
//!   "previousPageLink": null,
//!   "nextPageLink": "http://localhost:8080/users?pageNumber=2&pageSize=10",
//!   "totalCount": 25,
//!   "pageSize": 10,
//!   "currentPage": 1,
//!   "totalPages": 3
//! }
//! ```

use serde::{Deserialize, Serialize};

pub const PAGINATION_HEADER: &str = "X-Pagination";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
}
