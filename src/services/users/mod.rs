//! 사용자 리소스 서비스 모듈
//!
//! 핸들러와 스토어 사이에서 검증, 패치, 페이지 계산을 조립합니다.

pub mod user_service;

pub use user_service::{UserListing, UserService};
