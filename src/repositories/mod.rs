//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 스토어는 전역 싱글톤이 아니라 명시적인 인스턴스로 생성되어 서비스에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::InMemoryUserStore;
//!
//! let store = InMemoryUserStore::new();
//! let page = store.get_page(1, 10).await?;
//! ```

pub mod users;
