//! # 사용자 필드 요청 DTO
//!
//! 생성(`POST`), 전체 수정(`PUT`), 부분 수정(`PATCH`) 후 작업 사본이 모두 공유하는
//! 단일 필드 집합 `{login, firstName, lastName}`입니다.
//! 검증 규칙은 이 구조체의 `validator` 어트리뷰트 한 곳에만 선언되어 있으므로
//! 경로마다 규칙이 어긋날 수 없습니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `login` | 필수(공백 제거 후 비어있지 않음), 패턴 `^[A-Za-z0-9].*` |
//! | `firstName` | 필수 |
//! | `lastName` | 필수 |
//!
//! 누락되거나 `null`인 필드는 빈 문자열로 역직렬화되어 "필수" 규칙에서 걸립니다(400이 아니라 422).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::User;
use crate::utils::string_utils::is_valid_string;

/// 로그인 첫 글자는 영문자 또는 숫자여야 합니다.
pub static LOGIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9].*").expect("login pattern is a valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFieldsDto {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required"))]
    #[validate(regex(
        path = *LOGIN_PATTERN,
        message = "로그인은 영문자 또는 숫자로 시작해야 합니다"
    ))]
    pub login: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required"))]
    pub first_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required"))]
    pub last_name: String,
}

/// `POST /users` 요청 본문
pub type UserForCreationDto = UserFieldsDto;

/// `PUT /users/{id}` 요청 본문이자 `PATCH`의 작업 사본
pub type UserForUpdateDto = UserFieldsDto;

impl UserFieldsDto {
    pub fn new(
        login: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl From<&User> for UserFieldsDto {
    fn from(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// `null`을 누락과 같게 취급합니다.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message("필수 항목입니다".into()));
    }
    Ok(())
}
