//! # Validation Pipeline
//!
//! 요청 페이로드를 엔티티로 바꾸기 전에 거치는 검증 계층입니다.
//!
//! ## 구성 요소
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`constraint`] | 제약 조건 디스크립터 (`Required`, `Type`, `Length`, `Pattern`, `Range`, `Positive`, `Choice`, `Email`, `Url`) |
//! | [`schema`] | 엔티티별 정적 규칙 테이블과 [`RuleProvider`] |
//! | [`validator`] | 필수 필드 → 필드별 검사 순서의 [`RequestValidator`] |
//! | [`builder`] | 세터 테이블을 통한 병합 [`EntityBuilder`] |
//! | [`setters`] | 세터용 JSON 값 변환 함수 |
//! | [`errors`] | 와이어 형식의 [`ValidationError`] |
//!
//! ## 처리 흐름
//!
//! ```text
//! Payload ──▶ RequestValidator ──▶ EntityBuilder ──▶ Repository
//!               │ 1. required         │ setter 호출
//!               │ 2. per-field        │ (알 수 없는 키 무시)
//!               ▼                     ▼
//!          AppError::InvalidRequest (400)
//! ```

pub mod builder;
pub mod constraint;
pub mod errors;
pub mod schema;
pub mod setters;
pub mod validator;

use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};

pub use builder::EntityBuilder;
pub use constraint::{Constraint, FieldType};
pub use errors::{InvalidArgument, ValidationError};
pub use schema::{EntitySchema, FieldDef, RuleProvider, Setter};
pub use validator::{RequestValidator, ValidationMode};

/// 요청마다 한 번 파싱되는 키-값 페이로드
///
/// `serde_json`의 `preserve_order` 기능으로 키 순서가 요청 본문 순서와 같습니다.
pub type Payload = Map<String, Value>;

/// 디코딩된 JSON 본문을 페이로드로 변환합니다. 객체가 아니면 400입니다.
pub fn payload_from_value(value: Value) -> AppResult<Payload> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::invalid(ValidationError::request_body(
            "The request body must be a JSON object",
        ))),
    }
}
