//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하는 DTO들입니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (actix 추출기, 실패 시 400)
//! 2. **형식 검증**: `validator` 규칙 (실패 시 422)
//!
//! - [`UserFieldsDto`] - 생성/전체 수정/패치 작업 사본이 공유하는 필드 집합
//! - [`PatchOperation`] - JSON Patch 연산
//! - [`UserPageQuery`] - 목록 조회 쿼리

pub mod page_query;
pub mod patch_request;
pub mod user_fields;

pub use page_query::UserPageQuery;
pub use patch_request::{PatchDocument, PatchOp, PatchOperation};
pub use user_fields::{UserFieldsDto, UserForCreationDto, UserForUpdateDto};
