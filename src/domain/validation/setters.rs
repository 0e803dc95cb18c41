//! 세터에서 사용하는 JSON 값 변환 함수
//!
//! 검증기를 통과한 값이라도 세터는 스스로 타입을 확인하고,
//! 맞지 않으면 [`InvalidArgument`]로 거부합니다.

use serde_json::Value;

use super::errors::InvalidArgument;
use crate::utils::string_utils::is_blank;

/// 검증기가 본 값을 그대로 저장합니다. 공백을 다듬지 않습니다.
pub fn string(value: &Value) -> Result<String, InvalidArgument> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| InvalidArgument::new(format!("Expected a string, got {}", value)))
}

/// `null`과 공백 문자열은 값 제거로 해석합니다.
pub fn optional_string(value: &Value) -> Result<Option<String>, InvalidArgument> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if is_blank(s) => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(InvalidArgument::new(format!("Expected a string, got {}", other))),
    }
}

pub fn integer(value: &Value) -> Result<i64, InvalidArgument> {
    value
        .as_i64()
        .ok_or_else(|| InvalidArgument::new(format!("Expected an integer, got {}", value)))
}

pub fn optional_integer(value: &Value) -> Result<Option<i64>, InvalidArgument> {
    match value {
        Value::Null => Ok(None),
        other => integer(other).map(Some),
    }
}

/// `null`은 `false`로 해석합니다.
pub fn boolean(value: &Value) -> Result<bool, InvalidArgument> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(flag) => Ok(*flag),
        other => Err(InvalidArgument::new(format!("Expected a boolean, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_keeps_submitted_text() {
        assert_eq!(string(&json!("  Paris ")).unwrap(), "  Paris ");
        assert!(string(&json!(1)).is_err());
    }

    #[test]
    fn test_optional_string_clears_on_null_or_blank() {
        assert_eq!(optional_string(&Value::Null).unwrap(), None);
        assert_eq!(optional_string(&json!("  ")).unwrap(), None);
        assert_eq!(optional_string(&json!("Lyon")).unwrap(), Some("Lyon".to_string()));
        assert_eq!(optional_string(&json!(" Lyon")).unwrap(), Some(" Lyon".to_string()));
        assert!(optional_string(&json!(false)).is_err());
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(integer(&json!(42)).unwrap(), 42);
        assert!(integer(&json!("42")).is_err());
        assert_eq!(optional_integer(&Value::Null).unwrap(), None);
        assert_eq!(optional_integer(&json!(7)).unwrap(), Some(7));
    }

    #[test]
    fn test_boolean_conversions() {
        assert!(boolean(&json!(true)).unwrap());
        assert!(!boolean(&Value::Null).unwrap());
        assert!(boolean(&json!("yes")).is_err());
    }
}
