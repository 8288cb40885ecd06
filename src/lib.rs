//! 사용자 리소스 서비스
//!
//! `/users` 하나의 REST 리소스를 제공하는 Actix-web 기반 HTTP 서비스입니다.
//! 조회, 페이지 목록, 생성, 교체(upsert), JSON Patch 부분 수정, 삭제를 지원하며
//! 저장소는 교체 가능한 `UserStore` 트레이트 뒤에 있습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 상태 코드 / 헤더 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 패치, 페이지 계산
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (in-memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_resource_service::repositories::users::InMemoryUserStore;
//! use user_resource_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let created = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
