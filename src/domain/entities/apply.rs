//! 지원서 엔티티
//!
//! 지원자, 이력서, 채용 공고를 외래 키로 묶고 처리 상태를 가집니다.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityMeta};
use crate::domain::validation::constraint::choice_message;
use crate::domain::validation::{
    setters, Constraint, EntitySchema, FieldDef, FieldType, InvalidArgument, Setter,
};

/// 지원서 처리 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyStatus {
    Accepted,
    Denied,
    #[default]
    Pending,
}

impl ApplyStatus {
    pub const VALUES: &'static [&'static str] = &["accepted", "denied", "pending"];

    /// 고정된 선택지 밖의 값은 `InvalidArgument`로 거부합니다.
    pub fn parse(value: &str) -> Result<Self, InvalidArgument> {
        match value {
            "accepted" => Ok(ApplyStatus::Accepted),
            "denied" => Ok(ApplyStatus::Denied),
            "pending" => Ok(ApplyStatus::Pending),
            _ => Err(InvalidArgument::new(choice_message("Status", Self::VALUES))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Apply {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub candidate_id: i64,
    pub resume_id: i64,
    pub job_offer_id: i64,
    pub status: ApplyStatus,
    pub message: Option<String>,
}

fn set_status(apply: &mut Apply, value: &Value) -> Result<(), InvalidArgument> {
    apply.status = match value {
        Value::Null => ApplyStatus::default(),
        other => ApplyStatus::parse(&setters::string(other)?)?,
    };
    Ok(())
}

static SCHEMA: Lazy<EntitySchema<Apply>> = Lazy::new(|| {
    let reference = |name: &'static str, setter: Setter<Apply>| {
        FieldDef::new(name, setter)
            .with(Constraint::Required)
            .with(Constraint::Type(FieldType::Integer))
            .with(Constraint::Positive)
    };

    EntitySchema::new(vec![
        reference("candidateId", |apply: &mut Apply, value: &Value| {
            apply.candidate_id = setters::integer(value)?;
            Ok(())
        }),
        reference("resumeId", |apply: &mut Apply, value: &Value| {
            apply.resume_id = setters::integer(value)?;
            Ok(())
        }),
        reference("jobOfferId", |apply: &mut Apply, value: &Value| {
            apply.job_offer_id = setters::integer(value)?;
            Ok(())
        }),
        FieldDef::new("status", set_status)
            .with(Constraint::Type(FieldType::String))
            .with(Constraint::Choice(ApplyStatus::VALUES)),
        FieldDef::new("message", |apply: &mut Apply, value| {
            apply.message = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::max_length(2000)),
    ])
});

impl Entity for Apply {
    const NAME: &'static str = "Apply";
    const COLLECTION: &'static str = "applies";

    fn schema() -> &'static EntitySchema<Self> {
        &SCHEMA
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::fixtures;
    use crate::domain::validation::{
        payload_from_value, EntityBuilder, RequestValidator, ValidationError,
    };
    use serde_json::json;

    #[test]
    fn test_out_of_domain_status_is_rejected() {
        let mut value = fixtures::apply();
        value["status"] = json!("archived");
        let payload = payload_from_value(value).unwrap();

        let error = RequestValidator::validate::<Apply>(&payload).unwrap_err();

        assert_eq!(
            error,
            AppError::InvalidRequest(vec![ValidationError::field(
                "status",
                "Status must be one of the following: 'accepted','denied','pending'",
                json!("archived"),
            )])
        );
    }

    #[test]
    fn test_setter_rejects_status_without_validator() {
        let payload = payload_from_value(json!({"status": "archived"})).unwrap();
        let error = EntityBuilder::build(Apply::default(), &payload).unwrap_err();

        match error {
            AppError::InvalidRequest(errors) => {
                assert_eq!(errors[0].field, "status");
                assert_eq!(errors[0].passed_value, Some(json!("archived")));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let payload = payload_from_value(fixtures::apply()).unwrap();
        let apply = EntityBuilder::build(Apply::default(), &payload).unwrap();

        assert_eq!(apply.status, ApplyStatus::Pending);
        assert_eq!(serde_json::to_value(&apply).unwrap()["status"], "pending");
    }
}
