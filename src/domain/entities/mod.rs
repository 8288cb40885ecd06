//! # Domain Entities
//!
//! 스토어에 저장되는 도메인 엔티티들입니다.
//! 엔티티는 경계(DTO)와 분리되어 있으며, 변경은 항상 검증된 작업 사본으로부터
//! 전체 레코드를 교체하는 방식으로만 일어납니다.

pub mod users;

pub use users::*;
