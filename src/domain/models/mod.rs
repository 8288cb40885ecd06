//! # Domain Models
//!
//! 엔티티도 DTO도 아닌, 요청 처리 중에만 존재하는 도메인 값 객체들입니다.
//!
//! - [`Page`] - 페이지 단위로 잘라낸 컬렉션과 위치 메타데이터
//! - [`FieldErrors`] - 필드별 검증 메시지 집합

pub mod field_errors;
pub mod page;

pub use field_errors::FieldErrors;
pub use page::Page;
