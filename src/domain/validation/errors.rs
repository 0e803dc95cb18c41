//! 검증 에러 타입
//!
//! 클라이언트에게 그대로 직렬화되는 필드 단위 에러와,
//! 엔티티 세터가 값을 거부할 때 사용하는 `InvalidArgument`를 정의합니다.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// 필수 필드 누락 에러에 사용되는 필드 이름
pub const REQUEST_BODY_FIELD: &str = "request body";

/// 필드 단위 검증 에러
///
/// 와이어 형식은 다음 두 가지 중 하나입니다.
///
/// ```json
/// {"field": "title", "message": "...", "passedValue": "az"}
/// {"field": "request body", "message": "...", "missingFields": "title, city"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<String>,
}

impl ValidationError {
    /// 특정 필드에 대한 에러를 생성합니다. 전달된 값이 그대로 기록됩니다.
    pub fn field(field: impl Into<String>, message: impl Into<String>, passed_value: Value) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            passed_value: Some(passed_value),
            missing_fields: None,
        }
    }

    /// 필수 필드 누락 에러를 생성합니다.
    ///
    /// 메시지는 엔티티의 모든 필수 필드를 선언 순서대로 나열하고,
    /// `missingFields`에는 실제로 누락된 필드만 같은 순서로 담깁니다.
    pub fn missing_fields(required: &[&str], missing: &[&str]) -> Self {
        Self {
            field: REQUEST_BODY_FIELD.to_string(),
            message: format!(
                "The request must contain the following fields: {}",
                required.join(", ")
            ),
            passed_value: None,
            missing_fields: Some(missing.join(", ")),
        }
    }

    /// 요청 본문 전체에 대한 에러 (파싱 실패, 객체가 아닌 본문 등)
    pub fn request_body(message: impl Into<String>) -> Self {
        Self {
            field: REQUEST_BODY_FIELD.to_string(),
            message: message.into(),
            passed_value: None,
            missing_fields: None,
        }
    }
}

/// 세터가 도메인 밖의 값을 거부할 때 반환하는 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidArgument(pub String);

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_error_serializes_passed_value() {
        let error = ValidationError::field("title", "Title should not be blank", json!(""));
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"field": "title", "message": "Title should not be blank", "passedValue": ""})
        );
    }

    #[test]
    fn test_null_passed_value_is_kept() {
        let error = ValidationError::field("title", "Title should not be blank", Value::Null);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["passedValue"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("passedValue"));
    }

    #[test]
    fn test_missing_fields_shape() {
        let error = ValidationError::missing_fields(&["title", "city", "salaryMin"], &["city", "salaryMin"]);
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "field": "request body",
                "message": "The request must contain the following fields: title, city, salaryMin",
                "missingFields": "city, salaryMin"
            })
        );
    }
}
