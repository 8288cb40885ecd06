//! # User Data Transfer Objects Module
//!
//! 사용자 리소스 API의 요청/응답 데이터 구조를 정의합니다.
//! DTO는 경계에서만 쓰이며 저장 엔티티([`User`](crate::domain::entities::users::User))와
//! 구분됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── user_fields.rs         # 생성/수정 본문 + 검증 규칙
//! │   ├── patch_request.rs       # JSON Patch 연산
//! │   └── page_query.rs          # 목록 쿼리 파라미터
//! └── response/
//!     ├── user_response.rs       # 사용자 응답
//!     └── pagination_metadata.rs # X-Pagination 헤더
//! ```

pub mod request;
pub mod response;
