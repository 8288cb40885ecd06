//! # JSON Patch 요청 DTO
//!
//! `PATCH /users/{id}` 본문(`application/json-patch+json`)으로 받는 연산 목록입니다.
//! RFC 6902 중 `add`, `remove`, `replace`, `test`만 지원하며,
//! 그 밖의 `op` 값은 역직렬화 단계에서 거부됩니다.
//!
//! ```json
//! [
//!   { "op": "test", "path": "/login", "value": "jdoe" },
//!   { "op": "replace", "path": "/firstName", "value": "Jane" }
//! ]
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Test,
}

/// 단일 패치 연산
///
/// `value`는 본문에 키가 없으면 `None`, 명시적인 `null`이면 `Some(Value::Null)`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

impl PatchOperation {
    pub fn new(op: PatchOp, path: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            op,
            path: path.into(),
            value,
        }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(PatchOp::Replace, path, Some(value.into()))
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(PatchOp::Remove, path, None)
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(PatchOp::Test, path, Some(value.into()))
    }
}

/// 순서가 있는 패치 문서
pub type PatchDocument = Vec<PatchOperation>;

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
