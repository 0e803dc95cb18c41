//! 필드 제약 조건 디스크립터
//!
//! 엔티티 스키마에 선언되는 제약 조건의 태그 열거형입니다.
//! 각 제약은 JSON 값 하나를 검사하고 위반 시 사람이 읽을 수 있는 메시지를 돌려줍니다.

use regex::Regex;
use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

use crate::utils::string_utils::is_blank;

/// `Type` 제약이 요구하는 JSON 값의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

/// 필드에 선언되는 제약 조건
#[derive(Debug, Clone)]
pub enum Constraint {
    /// 값이 존재하고 비어 있지 않아야 함
    Required,
    Type(FieldType),
    /// 문자 수 기준 길이 제한
    Length { min: Option<usize>, max: Option<usize> },
    Pattern { regex: &'static Regex, message: &'static str },
    Range { min: Option<i64>, max: Option<i64> },
    Positive,
    Choice(&'static [&'static str]),
    Email,
    Url,
}

impl Constraint {
    pub fn length(min: usize, max: usize) -> Self {
        Constraint::Length { min: Some(min), max: Some(max) }
    }

    pub fn max_length(max: usize) -> Self {
        Constraint::Length { min: None, max: Some(max) }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Constraint::Required)
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Constraint::Type(_))
    }

    /// 값을 검사합니다. 위반 시 `label`을 포함한 메시지를 반환합니다.
    ///
    /// 값의 종류가 제약과 무관한 경우(예: 숫자에 대한 `Length`)는 통과로 봅니다.
    /// 종류 검사는 `Type` 제약의 책임입니다.
    pub fn check(&self, label: &str, value: &Value) -> Result<(), String> {
        match self {
            Constraint::Required => match value {
                Value::Null => Err(format!("{} should not be blank", label)),
                Value::String(s) if is_blank(s) => Err(format!("{} should not be blank", label)),
                _ => Ok(()),
            },
            Constraint::Type(field_type) => {
                if field_type.accepts(value) {
                    Ok(())
                } else {
                    Err(format!("{} must be of type {}", label, field_type.name()))
                }
            }
            Constraint::Length { min, max } => {
                let Some(s) = value.as_str() else {
                    return Ok(());
                };
                let count = s.chars().count();
                if let Some(min) = min {
                    if count < *min {
                        return Err(format!("{} must be at least {} characters long", label, min));
                    }
                }
                if let Some(max) = max {
                    if count > *max {
                        return Err(format!("{} cannot be longer than {} characters", label, max));
                    }
                }
                Ok(())
            }
            Constraint::Pattern { regex, message } => match value.as_str() {
                Some(s) if !regex.is_match(s) => Err((*message).to_string()),
                _ => Ok(()),
            },
            Constraint::Range { min, max } => {
                let Some(number) = value.as_f64() else {
                    return Ok(());
                };
                if let Some(min) = min {
                    if number < *min as f64 {
                        return Err(format!("{} must be greater than or equal to {}", label, min));
                    }
                }
                if let Some(max) = max {
                    if number > *max as f64 {
                        return Err(format!("{} must be less than or equal to {}", label, max));
                    }
                }
                Ok(())
            }
            Constraint::Positive => match value.as_f64() {
                Some(number) if number <= 0.0 => {
                    Err(format!("{} must be a positive number", label))
                }
                _ => Ok(()),
            },
            Constraint::Choice(values) => match value.as_str() {
                Some(s) if values.contains(&s) => Ok(()),
                _ => Err(choice_message(label, values)),
            },
            Constraint::Email => match value.as_str() {
                Some(s) if !s.validate_email() => {
                    Err(format!("{} must be a valid email address", label))
                }
                _ => Ok(()),
            },
            Constraint::Url => match value.as_str() {
                Some(s) if !s.validate_url() => Err(format!("{} must be a valid URL", label)),
                _ => Ok(()),
            },
        }
    }
}

/// 선택지 제약 위반 메시지
///
/// 엔티티의 열거형 세터도 같은 문구를 사용합니다.
pub fn choice_message(label: &str, values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
    format!("{} must be one of the following: {}", label, quoted.join(","))
}
