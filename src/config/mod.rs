//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `main`은 `.env.<profile>` 파일을 먼저 읽은 뒤 이 모듈로 값을 조회합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 페이지네이션 한도
//! - [`web_config`] - Rate Limiting, CORS
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export DEFAULT_PAGE_SIZE="10"
//! export MAX_PAGE_SIZE="20"          # 20 이하로만 조정 가능
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```

pub mod data_config;
pub mod web_config;

pub use data_config::*;
pub use web_config::*;
