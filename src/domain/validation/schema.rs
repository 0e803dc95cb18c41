//! 엔티티 스키마와 검증 규칙 제공자
//!
//! 각 엔티티 타입은 정적으로 등록된 [`EntitySchema`]를 하나 가집니다.
//! 스키마는 필드 이름별로 순서가 있는 제약 목록과 세터 함수를 보관하며,
//! 프로세스가 살아 있는 동안 변하지 않습니다.
//!
//! ```rust,ignore
//! static SCHEMA: Lazy<EntitySchema<Contract>> = Lazy::new(|| {
//!     EntitySchema::new(vec![
//!         FieldDef::new("name", |contract, value| {
//!             contract.name = setters::string(value)?;
//!             Ok(())
//!         })
//!         .with(Constraint::Required)
//!         .with(Constraint::Type(FieldType::String))
//!         .with(Constraint::length(2, 50)),
//!     ])
//! });
//! ```

use std::collections::HashMap;

use serde_json::Value;

use super::constraint::Constraint;
use super::errors::{InvalidArgument, ValidationError};
use crate::utils::string_utils::humanize_field_name;

/// 필드 이름으로 찾아 호출되는 세터 함수
pub type Setter<E> = fn(&mut E, &Value) -> Result<(), InvalidArgument>;

/// 필드 하나의 정의: 이름, 라벨, 제약 목록, 세터
pub struct FieldDef<E> {
    name: &'static str,
    label: String,
    constraints: Vec<Constraint>,
    setter: Setter<E>,
}

impl<E> FieldDef<E> {
    pub fn new(name: &'static str, setter: Setter<E>) -> Self {
        Self {
            name,
            label: humanize_field_name(name),
            constraints: Vec::new(),
            setter,
        }
    }

    /// 제약을 추가합니다.
    ///
    /// 평가 순서는 Type, Required, 나머지(선언 순서)로 고정됩니다.
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self.constraints.sort_by_key(evaluation_rank);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 에러 메시지에 사용되는 라벨 (`salaryMin` → `Salary min`)
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_required(&self) -> bool {
        self.constraints.iter().any(Constraint::is_required)
    }

    pub fn setter(&self) -> Setter<E> {
        self.setter
    }

    /// 값을 검사하고 첫 번째 위반만 보고합니다.
    ///
    /// `null`은 필수가 아닌 필드에서 모든 제약을 통과합니다.
    pub fn check(&self, value: &Value) -> Option<ValidationError> {
        if value.is_null() && !self.is_required() {
            return None;
        }

        let violation = if value.is_null() {
            Constraint::Required.check(&self.label, value).err()
        } else {
            self.constraints
                .iter()
                .find_map(|constraint| constraint.check(&self.label, value).err())
        };

        violation.map(|message| ValidationError::field(self.name, message, value.clone()))
    }
}

fn evaluation_rank(constraint: &Constraint) -> u8 {
    match constraint {
        Constraint::Type(_) => 0,
        Constraint::Required => 1,
        _ => 2,
    }
}

/// 엔티티 타입 하나의 정적 규칙 테이블
pub struct EntitySchema<E> {
    fields: Vec<FieldDef<E>>,
    index: HashMap<&'static str, usize>,
    required: Vec<&'static str>,
}

impl<E> EntitySchema<E> {
    pub fn new(fields: Vec<FieldDef<E>>) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.name, position))
            .collect();
        let required = fields
            .iter()
            .filter(|field| field.is_required())
            .map(|field| field.name)
            .collect();

        Self { fields, index, required }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef<E>> {
        self.index.get(name).map(|&position| &self.fields[position])
    }

    pub fn fields(&self) -> &[FieldDef<E>] {
        &self.fields
    }

    pub fn setter(&self, name: &str) -> Option<Setter<E>> {
        self.field(name).map(FieldDef::setter)
    }
}

/// 검증기가 의존하는 규칙 조회 인터페이스
///
/// 순수 함수이며 어떤 상태도 변경하지 않습니다.
pub trait RuleProvider {
    /// 필수 필드 이름 (선언 순서)
    fn required_fields(&self) -> &[&'static str];

    /// 세터가 존재하는 필드인지 여부. 알 수 없는 키는 검증 대상이 아닙니다.
    fn is_settable(&self, field: &str) -> bool;

    /// 필드 하나를 검사합니다. 알 수 없는 필드는 항상 `None`입니다.
    fn check_field(&self, field: &str, value: &Value) -> Option<ValidationError>;
}

impl<E> RuleProvider for EntitySchema<E> {
    fn required_fields(&self) -> &[&'static str] {
        &self.required
    }

    fn is_settable(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    fn check_field(&self, field: &str, value: &Value) -> Option<ValidationError> {
        self.field(field).and_then(|definition| definition.check(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::constraint::FieldType;
    use serde_json::json;

    #[derive(Default)]
    struct Probe {
        code: String,
        level: i64,
    }

    fn schema() -> EntitySchema<Probe> {
        EntitySchema::new(vec![
            FieldDef::new("code", |probe: &mut Probe, value| {
                probe.code = value.as_str().unwrap_or_default().to_string();
                Ok(())
            })
            .with(Constraint::length(3, 5))
            .with(Constraint::Required)
            .with(Constraint::Type(FieldType::String)),
            FieldDef::new("level", |probe: &mut Probe, value| {
                probe.level = value.as_i64().unwrap_or_default();
                Ok(())
            })
            .with(Constraint::Type(FieldType::Integer))
            .with(Constraint::Positive),
        ])
    }

    #[test]
    fn test_required_fields_in_declaration_order() {
        assert_eq!(schema().required_fields(), &["code"]);
    }

    #[test]
    fn test_type_is_checked_before_other_constraints() {
        let error = schema().check_field("code", &json!(12)).unwrap();
        assert_eq!(error.message, "Code must be of type string");
        assert_eq!(error.passed_value, Some(json!(12)));
    }

    #[test]
    fn test_only_first_violation_is_reported() {
        let error = schema().check_field("code", &json!("  ")).unwrap();
        assert_eq!(error.message, "Code should not be blank");
    }

    #[test]
    fn test_null_passes_optional_but_not_required() {
        let schema = schema();
        assert!(schema.check_field("level", &Value::Null).is_none());
        let error = schema.check_field("code", &Value::Null).unwrap();
        assert_eq!(error.message, "Code should not be blank");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let schema = schema();
        assert!(!schema.is_settable("nickname"));
        assert!(schema.check_field("nickname", &json!(null)).is_none());
    }

    #[test]
    fn test_setter_lookup() {
        let schema = schema();
        let mut probe = Probe::default();
        (schema.setter("level").unwrap())(&mut probe, &json!(3)).unwrap();
        assert_eq!(probe.level, 3);
        assert!(schema.setter("missing").is_none());
    }
}
