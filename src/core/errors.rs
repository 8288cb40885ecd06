//! # Application Error Handling System
//!
//! 사용자 리소스 서비스의 통합 에러 타입입니다.
//! 모든 계층(스토어, 서비스, 핸들러)의 실패는 [`AppError`]로 모이고,
//! `actix_web::ResponseError` 구현을 통해 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `NotFound` | 404 Not Found | 사용자 없음 |
//! | `BadRequest` | 400 Bad Request | 본문 누락/형식 오류, 잘못된 ID, 잘못된 쿼리 |
//! | `MalformedPatch` | 400 Bad Request | 알 수 없는 경로, 잘못된 패치 연산 |
//! | `DuplicateId` | 400 Bad Request | 명시적으로 지정한 ID 충돌 |
//! | `ValidationFailed` | 422 Unprocessable Entity | 필드 규칙 위반 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: 사용자를 찾을 수 없습니다" }
//! ```
//!
//! 검증 실패는 필드별 메시지를 함께 돌려줍니다:
//!
//! ```json
//! {
//!   "error": "Validation failed",
//!   "errors": { "login": ["로그인은 영문자 또는 숫자로 시작해야 합니다"] }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use crate::domain::models::FieldErrors;
use crate::repositories::users::StoreError;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error`를 구현하고, `ResponseError`로 HTTP 응답에 매핑됩니다.
/// 핸들러는 `Result<HttpResponse, AppError>`를 반환하기만 하면 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Malformed patch: {0}")]
    MalformedPatch(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Validation failed")]
    ValidationFailed(FieldErrors),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::MalformedPatch(_)
            | AppError::DuplicateId(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationFailed(errors) => json!({
                "error": self.to_string(),
                "errors": errors,
            }),
            _ => json!({
                "error": self.to_string()
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
            }
            StoreError::DuplicateId(id) => {
                AppError::DuplicateId(format!("이미 존재하는 사용자 ID입니다: {}", id))
            }
            StoreError::Poisoned => AppError::InternalError(err.to_string()),
        }
    }
}

/// 애플리케이션 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 컨텍스트를 붙여 `InternalError`로 바꾸는 확장 트레이트
///
/// ```rust,ignore
/// let port: u16 = raw.parse().context("PORT 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
