//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 일관된 형태로 전달하는 DTO들입니다.
//!
//! - [`UserResponse`] - 단건/목록 조회에 쓰이는 사용자 표현
//! - [`PaginationMetadata`] - 목록 응답의 `X-Pagination` 헤더 내용

pub mod pagination_metadata;
pub mod user_response;

pub use pagination_metadata::{PaginationMetadata, PAGINATION_HEADER};
pub use user_response::UserResponse;
