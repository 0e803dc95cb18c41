//! 엔티티 빌더
//!
//! 검증된 페이로드를 엔티티 인스턴스에 병합하는 단일 지점입니다.
//! 생성(기본값 인스턴스)과 수정(저장소에서 읽은 인스턴스) 모두 같은 경로를 사용하므로,
//! 수정은 부분 병합이 됩니다. 페이로드에 없는 필드는 기존 값을 유지합니다.

use super::schema::EntitySchema;
use super::{Payload, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;

pub struct EntityBuilder;

impl EntityBuilder {
    /// 페이로드를 엔티티에 적용하고 같은 인스턴스를 돌려줍니다.
    ///
    /// 세터가 없는 키(알 수 없는 필드, `id` 같은 읽기 전용 필드)는 무시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 세터가 값을 거부한 경우 (첫 번째 거부에서 중단)
    pub fn build<E: Entity>(mut entity: E, payload: &Payload) -> AppResult<E> {
        Self::apply(E::schema(), &mut entity, payload)?;
        Ok(entity)
    }

    pub fn apply<E>(schema: &EntitySchema<E>, entity: &mut E, payload: &Payload) -> AppResult<()> {
        for (key, value) in payload {
            let Some(setter) = schema.setter(key) else {
                continue;
            };

            setter(entity, value).map_err(|rejection| {
                log::debug!("세터가 값을 거부함: {} = {}", key, value);
                AppError::invalid(ValidationError::field(key.as_str(), rejection.0, value.clone()))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::schema::FieldDef;
    use crate::domain::validation::{payload_from_value, InvalidArgument};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Ticket {
        title: String,
        priority: String,
    }

    fn schema() -> EntitySchema<Ticket> {
        EntitySchema::new(vec![
            FieldDef::new("title", |ticket: &mut Ticket, value| {
                ticket.title = value.as_str().unwrap_or_default().to_string();
                Ok(())
            }),
            FieldDef::new("priority", |ticket: &mut Ticket, value| {
                match value.as_str() {
                    Some(level @ ("low" | "high")) => {
                        ticket.priority = level.to_string();
                        Ok(())
                    }
                    _ => Err(InvalidArgument::new("Priority must be low or high")),
                }
            }),
        ])
    }

    #[test]
    fn test_apply_sets_known_fields_and_ignores_unknown() {
        let mut ticket = Ticket::default();
        let payload = payload_from_value(json!({"title": "Crash", "id": 9, "owner": "x"})).unwrap();

        EntityBuilder::apply(&schema(), &mut ticket, &payload).unwrap();

        assert_eq!(ticket.title, "Crash");
        assert_eq!(ticket.priority, "");
    }

    #[test]
    fn test_partial_merge_keeps_existing_values() {
        let mut ticket = Ticket { title: "Old".into(), priority: "low".into() };
        let payload = payload_from_value(json!({"priority": "high"})).unwrap();

        EntityBuilder::apply(&schema(), &mut ticket, &payload).unwrap();

        assert_eq!(ticket, Ticket { title: "Old".into(), priority: "high".into() });
    }

    #[test]
    fn test_setter_rejection_becomes_invalid_request() {
        let mut ticket = Ticket::default();
        let payload = payload_from_value(json!({"priority": "urgent"})).unwrap();

        let error = EntityBuilder::apply(&schema(), &mut ticket, &payload).unwrap_err();

        assert_eq!(
            error,
            AppError::invalid(ValidationError::field(
                "priority",
                "Priority must be low or high",
                json!("urgent")
            ))
        );
    }
}
