//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고, 결과를 상태 코드와 헤더로 옮기는
//! 핸들러들을 정의합니다.
//!
//! ```text
//! Client ──▶ Handlers (이 모듈) ──▶ Services ──▶ Repositories
//! ```
//!
//! 핸들러는 `AppResult<HttpResponse>`를 반환하며, 오류는 [`AppError`](crate::core::errors::AppError)의
//! `ResponseError` 구현을 통해 HTTP 응답으로 변환됩니다.

pub mod users;
