//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`] 트레이트와 기본 구현체 [`InMemoryUserStore`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = store.find_by_id(id).await?;
//! ```

pub mod in_memory_user_store;
pub mod user_store;

pub use in_memory_user_store::InMemoryUserStore;
pub use user_store::{StoreError, StoreResult, UpsertOutcome, Upserted, UserStore};
