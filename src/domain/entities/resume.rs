//! 이력서 엔티티
//!
//! 파일 자체는 업로드 엔드포인트가 저장하고, 이력서는 그 파일 이름만 참조합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityMeta};
use crate::domain::validation::{setters, Constraint, EntitySchema, FieldDef, FieldType};

static FILENAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[\w\-. ]+\.(pdf|doc|docx)$").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub candidate_id: i64,
    pub title: String,
    pub filename: String,
    pub summary: Option<String>,
}

static SCHEMA: Lazy<EntitySchema<Resume>> = Lazy::new(|| {
    EntitySchema::new(vec![
        FieldDef::new("candidateId", |resume: &mut Resume, value| {
            resume.candidate_id = setters::integer(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::Integer))
        .with(Constraint::Positive),
        FieldDef::new("title", |resume: &mut Resume, value| {
            resume.title = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::length(2, 255)),
        FieldDef::new("filename", |resume: &mut Resume, value| {
            resume.filename = setters::string(value)?;
            Ok(())
        })
        .with(Constraint::Required)
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::max_length(255))
        .with(Constraint::Pattern {
            regex: &FILENAME_PATTERN,
            message: "Filename must be a .pdf, .doc or .docx file",
        }),
        FieldDef::new("summary", |resume: &mut Resume, value| {
            resume.summary = setters::optional_string(value)?;
            Ok(())
        })
        .with(Constraint::Type(FieldType::String))
        .with(Constraint::max_length(2000)),
    ])
});

impl Entity for Resume {
    const NAME: &'static str = "Resume";
    const COLLECTION: &'static str = "resumes";

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
    fn test_filename_extension() {
        let schema = Resume::schema();
        for accepted in ["cv.pdf", "Jane Doe.DOCX", "3f2a-91.doc"] {
            assert!(schema.check_field("filename", &json!(accepted)).is_none(), "{}", accepted);
        }

        let error = schema.check_field("filename", &json!("cv.exe")).unwrap();
        assert_eq!(error.message, "Filename must be a .pdf, .doc or .docx file");
    }
}
