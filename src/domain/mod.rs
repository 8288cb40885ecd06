//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 핵심 객체 (User)
//! ├── DTOs      - HTTP 경계의 요청/응답 형태
//! └── Models    - 요청 처리 중의 값 객체 (Page, FieldErrors)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use models::{FieldErrors, Page};
