//! # Validation Engine
//!
//! [`UserFieldsDto`]에 선언된 `validator` 규칙을 실행하고, 결과를
//! 와이어 필드 이름(`login`, `firstName`, `lastName`) 기준의 [`FieldErrors`]로 모읍니다.
//!
//! 생성 경로와 패치 후 작업 사본 경로가 모두 [`validate_user_fields`]를 호출하므로
//! 두 경로의 규칙은 항상 같습니다. 위반은 필드별로 모두 누적됩니다.

use std::borrow::Cow;
use validator::{Validate, ValidationErrors};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserFieldsDto;
use crate::domain::models::FieldErrors;
use crate::utils::string_utils::snake_to_camel;

/// 필드 규칙을 평가합니다. 통과하면 `Ok(())`, 아니면 모든 위반을 담은 집합을 돌려줍니다.
pub fn validate_user_fields(dto: &UserFieldsDto) -> Result<(), FieldErrors> {
    dto.validate().map_err(|errors| to_field_errors(&errors))
}

/// [`validate_user_fields`]의 결과를 `AppError::ValidationFailed`로 올립니다.
pub fn ensure_valid(dto: &UserFieldsDto) -> AppResult<()> {
    validate_user_fields(dto).map_err(AppError::ValidationFailed)
}

/// `validator`의 에러 트리를 와이어 이름 기준 필드→메시지 집합으로 평탄화합니다.
pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut field_errors = FieldErrors::new();

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, violations) in fields {
        let name = snake_to_camel(&field);
        for violation in violations {
            let message = violation
                .message
                .clone()
                .unwrap_or_else(|| Cow::Owned(format!("규칙 위반: {}", violation.code)));
            field_errors.add(name.clone(), message);
        }
    }

    field_errors
}
