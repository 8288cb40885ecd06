//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! - [`errors`] - 전역 에러 타입 [`AppError`]와 HTTP 응답 매핑

pub mod errors;

pub use errors::*;
