//! 채용 공고 엔티티

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityMeta};
use crate::domain::validation::{setters, Constraint, EntitySchema, FieldDef, FieldType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOffer {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub title: String,
    pub description: String,
    pub city: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub company_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub remote: bool,
}

static SCHEMA: Lazy<EntitySchema<JobOffer>> = Lazy::new(|| {
    EntitySchema::new(vec![
        FieldDef::new("title", |offer: &mut JobOffer, value| {
            offer.title = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(3, 255)),
        FieldDef::new("description", |offer: &mut JobOffer, value| {
            offer.description = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(100, 10_000)),
        FieldDef::new("city", |offer: &mut JobOffer, value| {
            offer.city = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 100)),
        FieldDef::new("salaryMin", |offer: &mut JobOffer, value| {
            offer.salary_min = setters::integer(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("salaryMax", |offer: &mut JobOffer, value| {
            offer.salary_max = setters::integer(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("companyId", |offer: &mut JobOffer, value| {
            offer.company_id = setters::optional_integer(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("contractId", |offer: &mut JobOffer, value| {
            offer.contract_id = setters::optional_integer(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("remote", |offer: &mut JobOffer, value| {
            offer.remote = setters::boolean(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::Boolean)),
    ])
});

impl Entity for JobOffer {
    const NAME: &'static str = "JobOffer";
    const COLLECTION: &'static str = "job_offers";

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
    use crate::domain::validation::{payload_from_value, EntityBuilder, RequestValidator};
    use serde_json::{json, Value};

    fn field_errors(value: Value) -> Vec<crate::domain::validation::ValidationError> {
        let payload = payload_from_value(value).unwrap();
        match RequestValidator::validate::<JobOffer>(&payload) {
            Err(AppError::InvalidRequest(errors)) => errors,
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_single_invalid_field_is_isolated() {
        let cases = [
            ("title", json!("az")),
            ("description", json!("too short")),
            ("city", json!("P")),
            ("salaryMin", json!(-1)),
            ("salaryMax", json!("40000")),
            ("remote", json!("yes")),
        ];

        for (field, bad_value) in cases {
            let mut value = fixtures::job_offer();
            value[field] = bad_value.clone();

            let errors = field_errors(value);
            assert_eq!(errors.len(), 1, "{}", field);
            assert_eq!(errors[0].field, field);
            assert_eq!(errors[0].passed_value, Some(bad_value));
        }
    }

    #[test]
    fn test_unknown_field_does_not_hide_other_errors() {
        let mut value = fixtures::job_offer();
        value["nickname"] = json!({"anything": true});
        value["city"] = json!("");

        let errors = field_errors(value);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "city");
        assert_eq!(errors[0].message, "City should not be blank");
    }

    #[test]
    fn test_missing_fields_listed_in_declaration_order() {
        let errors = field_errors(json!({"title": "az"}));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "The request must contain the following fields: title, description, city, salaryMin, salaryMax"
        );
        assert_eq!(
            errors[0].missing_fields.as_deref(),
            Some("description, city, salaryMin, salaryMax")
        );
    }

    #[test]
    fn test_build_from_valid_payload() {
        let mut value = fixtures::job_offer();
        value["remote"] = json!(true);
        value["unknown"] = json!(1);
        let payload = payload_from_value(value).unwrap();

        RequestValidator::validate::<JobOffer>(&payload).unwrap();
        let offer = EntityBuilder::build(JobOffer::default(), &payload).unwrap();

        assert_eq!(offer.title, "PHP developer");
        assert_eq!(offer.city, "Paris");
        assert_eq!(offer.salary_min, 30000);
        assert_eq!(offer.salary_max, 40000);
        assert!(offer.remote);
        assert_eq!(offer.id(), None);
    }
}
