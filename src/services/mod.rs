//! 비즈니스 로직 계층
//!
//! - [`users`] - 엔드포인트별 흐름을 조립하는 [`UserService`](users::UserService)
//! - [`validation`] - 필드 규칙 평가 (Validation Engine)
//! - [`patch`] - JSON Patch 적용 (Patch Engine)
//! - [`pagination`] - 페이지 정규화와 이전/다음 계산 (Pagination Calculator)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserStore;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let user = service.create_user(request).await?;
//! ```

pub mod pagination;
pub mod patch;
pub mod users;
pub mod validation;
