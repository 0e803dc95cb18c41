//! 지원자 엔티티
//!
//! `userId`로 사용자 계정과 연결되며 소셜 미디어 값 객체를 하나 소유합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::social_media::{social_media_fields, HasSocialMedia};
use super::{Entity, EntityMeta, SocialMedia};
use crate::domain::validation::{setters, Constraint, EntitySchema, FieldDef, FieldType};

pub(crate) static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 .\-()]{6,20}$").expect("valid regex"));

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    /// YYYY-MM-DD
    pub birth_date: Option<String>,
    pub social_media: SocialMedia,
}

impl HasSocialMedia for Candidate {
    fn social_media_mut(&mut self) -> &mut SocialMedia {
        &mut self.social_media
    }
}

static SCHEMA: Lazy<EntitySchema<Candidate>> = Lazy::new(|| {
    let mut fields = vec![
        FieldDef::new("userId", |candidate: &mut Candidate, value| {
            candidate.user_id = setters::integer(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("firstName", |candidate: &mut Candidate, value| {
            candidate.first_name = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 50)),
        FieldDef::new("lastName", |candidate: &mut Candidate, value| {
            candidate.last_name = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 50)),
        FieldDef::new("phone", |candidate: &mut Candidate, value| {
            candidate.phone = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::Pattern {
            regex: &PHONE_PATTERN,
            message: "Phone must be a valid phone number",
        }),
        FieldDef::new("city", |candidate: &mut Candidate, value| {
            candidate.city = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 100)),
        FieldDef::new("birthDate", |candidate: &mut Candidate, value| {
            candidate.birth_date = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::Pattern {
            regex: &DATE_PATTERN,
            message: "Birth date must use the YYYY-MM-DD format",
        }),
    ];
    fields.extend(social_media_fields::<Candidate>());

    EntitySchema::new(fields)
});

impl Entity for Candidate {
    const NAME: &'static str = "Candidate";
    const COLLECTION: &'static str = "candidates";

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
    use crate::domain::entities::fixtures;
    use crate::domain::validation::{payload_from_value, EntityBuilder, RuleProvider};
    use serde_json::json;

    #[test]
    fn test_build_routes_social_links() {
        let mut value = fixtures::candidate();
        value["linkedin"] = json!("https://linkedin.com/in/jane");
        value["birthDate"] = json!("1990-04-12");
        let payload = payload_from_value(value).unwrap();

        let candidate = EntityBuilder::build(Candidate::default(), &payload).unwrap();

        assert_eq!(candidate.first_name, "Jane");
        assert_eq!(candidate.birth_date.as_deref(), Some("1990-04-12"));
        assert_eq!(
            candidate.social_media.linkedin.as_deref(),
            Some("https://linkedin.com/in/jane")
        );

        let serialized = serde_json::to_value(&candidate).unwrap();
        assert_eq!(serialized["socialMedia"]["linkedin"], "https://linkedin.com/in/jane");
        assert_eq!(serialized["userId"], 1);
    }

    #[test]
    fn test_social_media_present_even_when_empty() {
        let serialized = serde_json::to_value(Candidate::default()).unwrap();
        assert_eq!(serialized["socialMedia"], json!({}));
    }

    #[test]
    fn test_patterns() {
        let schema = Candidate::schema();
        assert!(schema.check_field("phone", &json!("+33 6 12 34 56 78")).is_none());
        assert!(schema.check_field("phone", &json!("call me")).is_some());
        assert_eq!(
            schema.check_field("birthDate", &json!("12/04/1990")).unwrap().message,
            "Birth date must use the YYYY-MM-DD format"
        );
    }
}
