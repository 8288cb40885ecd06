//! # Patch Engine
//!
//! JSON Patch 연산 목록을 [`UserFieldsDto`] 작업 사본에 순서대로 적용합니다.
//! 스토어와 독립적이며, 입력 사본을 소비해 새 사본을 돌려주므로 실패하면
//! 호출자가 가진 원본(그리고 저장된 엔티티)은 전혀 바뀌지 않습니다.
//!
//! ## 지원 경로
//!
//! `/login`, `/firstName`, `/lastName` (대소문자 무시). 그 외 경로는
//! 조용히 무시하지 않고 `MalformedPatch`로 실패합니다.
//!
//! ## 연산 의미
//!
//! | op | 동작 |
//! |----|------|
//! | `add`, `replace` | 필드를 `value`로 설정 (`null`이면 빈 값) |
//! | `remove` | 필드를 빈 값으로 |
//! | `test` | 필드가 `value`와 같지 않으면 실패 |

use serde_json::Value;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{PatchOp, PatchOperation, UserFieldsDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserField {
    Login,
    FirstName,
    LastName,
}

impl UserField {
    fn from_path(path: &str) -> AppResult<Self> {
        let name = path
            .strip_prefix('/')
            .ok_or_else(|| AppError::MalformedPatch(format!("경로는 '/'로 시작해야 합니다: {}", path)))?;

        match name.to_ascii_lowercase().as_str() {
            "login" => Ok(UserField::Login),
            "firstname" => Ok(UserField::FirstName),
            "lastname" => Ok(UserField::LastName),
            _ => Err(AppError::MalformedPatch(format!("알 수 없는 경로입니다: {}", path))),
        }
    }

    fn slot<'a>(&self, dto: &'a mut UserFieldsDto) -> &'a mut String {
        match self {
            UserField::Login => &mut dto.login,
            UserField::FirstName => &mut dto.first_name,
            UserField::LastName => &mut dto.last_name,
        }
    }
}

/// 연산 목록을 차례로 적용한 새 작업 사본을 돌려줍니다.
///
/// 하나라도 실패하면 전체가 실패합니다(부분 적용 없음).
pub fn apply_patch(base: UserFieldsDto, operations: &[PatchOperation]) -> AppResult<UserFieldsDto> {
    operations
        .iter()
        .try_fold(base, |mut working, operation| {
            apply_operation(&mut working, operation)?;
            Ok(working)
        })
}

fn apply_operation(working: &mut UserFieldsDto, operation: &PatchOperation) -> AppResult<()> {
    let field = UserField::from_path(&operation.path)?;
    let slot = field.slot(working);

    match operation.op {
        PatchOp::Add | PatchOp::Replace => {
            *slot = string_value(operation)?;
        }
        PatchOp::Remove => {
            slot.clear();
        }
        PatchOp::Test => {
            let expected = string_value(operation)?;
            if *slot != expected {
                return Err(AppError::MalformedPatch(format!(
                    "test 실패: {} 값이 일치하지 않습니다",
                    operation.path
                )));
            }
        }
    }

    Ok(())
}

fn string_value(operation: &PatchOperation) -> AppResult<String> {
    match &operation.value {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(Value::Null) => Ok(String::new()),
        Some(other) => Err(AppError::MalformedPatch(format!(
            "{}에는 문자열 값만 허용됩니다: {}",
            operation.path, other
        ))),
        None => Err(AppError::MalformedPatch(format!(
            "{:?} 연산에는 value가 필요합니다: {}",
            operation.op, operation.path
        ))),
    }
}
