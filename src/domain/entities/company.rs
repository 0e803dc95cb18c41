//! 기업 엔티티
//!
//! 기업 프로필은 사용자 계정과 별개의 엔티티이며 `userId` 외래 키로 연결됩니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::candidate::PHONE_PATTERN;
use super::social_media::{social_media_fields, HasSocialMedia};
use super::{Entity, EntityMeta, SocialMedia};
use crate::domain::validation::{setters, Constraint, EntitySchema, FieldDef, FieldType};

static SIRET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{14}$").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub user_id: i64,
    pub name: String,
    /// 14자리 사업자 식별 번호
    pub siret: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub social_media: SocialMedia,
}

impl HasSocialMedia for Company {
    fn social_media_mut(&mut self) -> &mut SocialMedia {
        &mut self.social_media
    }
}

static SCHEMA: Lazy<EntitySchema<Company>> = Lazy::new(|| {
    let mut fields = vec![
        FieldDef::new("userId", |company: &mut Company, value| {
            company.user_id = setters::integer(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("name", |company: &mut Company, value| {
            company.name = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 100)),
        FieldDef::new("siret", |company: &mut Company, value| {
            company.siret = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::Pattern {
            regex: &SIRET_PATTERN,
            message: "Siret must contain exactly 14 digits",
        }),
        FieldDef::new("description", |company: &mut Company, value| {
            company.description = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::max_length(5000)),
        FieldDef::new("city", |company: &mut Company, value| {
            company.city = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 100)),
        FieldDef::new("phone", |company: &mut Company, value| {
            company.phone = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::Pattern {
            regex: &PHONE_PATTERN,
            message: "Phone must be a valid phone number",
        }),
    ];
    fields.extend(social_media_fields::<Company>());

    EntitySchema::new(fields)
});

impl Entity for Company {
    const NAME: &'static str = "Company";
    const COLLECTION: &'static str = "companies";

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
    use crate::domain::validation::RuleProvider;
    use serde_json::json;

    #[test]
    fn test_siret_must_be_fourteen_digits() {
        let schema = Company::schema();
        assert!(schema.check_field("siret", &json!("73282932000074")).is_none());

        let error = schema.check_field("siret", &json!("7328293")).unwrap();
        assert_eq!(error.message, "Siret must contain exactly 14 digits");
        assert_eq!(error.passed_value, Some(json!("7328293")));
    }

    #[test]
    fn test_company_is_not_a_user() {
        let schema = Company::schema();
        assert!(!schema.is_settable("email"));
        assert!(!schema.is_settable("password"));
        assert!(schema.is_settable("website"));
    }
}
