//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 공백을 제거한 뒤에도 내용이 남아 있는지 확인합니다.
///
/// # 예제
/// ```rust,ignore
/// assert!(is_valid_string("  Hello  "));
/// assert!(!is_valid_string("\t\n"));
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `snake_case` 식별자를 `camelCase`로 바꿉니다.
///
/// Rust 필드 이름(`first_name`)을 와이어 이름(`firstName`)으로 보고할 때 씁니다.
pub fn snake_to_camel(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
