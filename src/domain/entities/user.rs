//! 사용자 엔티티
//!
//! 인증 주체입니다. 비밀번호는 세터에서 bcrypt로 해싱되어 저장되며
//! 응답 본문에는 포함되지 않습니다.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityMeta};
use crate::config::PasswordConfig;
use crate::domain::validation::constraint::choice_message;
use crate::domain::validation::{
    setters, Constraint, EntitySchema, FieldDef, FieldType, InvalidArgument,
};

/// 사용자 역할
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Candidate,
    Company,
    Admin,
}

impl UserRole {
    pub const VALUES: &'static [&'static str] = &["candidate", "company", "admin"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Company => "company",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InvalidArgument> {
        match value {
            "candidate" => Ok(UserRole::Candidate),
            "company" => Ok(UserRole::Company),
            "admin" => Ok(UserRole::Admin),
            _ => Err(InvalidArgument::new(choice_message("Role", Self::VALUES))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub email: String,
    /// bcrypt 해시
    pub password: String,
    pub role: UserRole,
}

impl User {
    /// 평문 비밀번호를 저장된 해시와 비교합니다.
    pub fn verify_password(&self, plain: &str) -> bool {
        match bcrypt::verify(plain, &self.password) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("비밀번호 해시 검증 실패 (user id {:?}): {}", self.meta.id, e);
                false
            }
        }
    }
}

fn set_email(user: &mut User, value: &Value) -> Result<(), InvalidArgument> {
    user.email = setters::string(value)?.to_lowercase();
    Ok(())
}

fn set_password(user: &mut User, value: &Value) -> Result<(), InvalidArgument> {
    let plain = value
        .as_str()
        .ok_or_else(|| InvalidArgument::new("Password must be a string"))?;

    user.password = bcrypt::hash(plain, PasswordConfig::bcrypt_cost()).map_err(|e| {
        log::error!("❌ 비밀번호 해싱 실패: {}", e);
        InvalidArgument::new("Password could not be processed")
    })?;
    Ok(())
}

fn set_role(user: &mut User, value: &Value) -> Result<(), InvalidArgument> {
    user.role = match value {
        Value::Null => UserRole::default(),
        other => UserRole::parse(&setters::string(other)?)?,
    };
    Ok(())
}

static SCHEMA: Lazy<EntitySchema<User>> = Lazy::new(|| {
    EntitySchema::new(vec![
        FieldDef::new("email", set_email)
            .with(Constraint::Required)
            .with(Constraint::Type(FieldType::String))
            .with(Constraint::Email),
        FieldDef::new("password", set_password)
            .with(Constraint::Required)
            .with(Constraint::Type(FieldType::String))
            .with(Constraint::length(8, 255)),
        FieldDef::new("role", set_role)
            .with(Constraint::Type(FieldType::String))
            .with(Constraint::Choice(UserRole::VALUES)),
    ])
});

impl Entity for User {
    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "users";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email"];

    fn schema() -> &'static EntitySchema<Self> {
        &SCHEMA
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn to_response(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Some(object) = value.as_object_mut() {
            object.remove("password");
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;
    use crate::domain::validation::{payload_from_value, EntityBuilder, RuleProvider};
    use serde_json::json;

    #[test]
    fn test_password_is_hashed_and_hidden() {
        let payload = payload_from_value(fixtures::user()).unwrap();
        let user = EntityBuilder::build(User::default(), &payload).unwrap();

        assert_ne!(user.password, "correct-horse");
        assert!(user.verify_password("correct-horse"));
        assert!(!user.verify_password("wrong-horse"));

        let response = user.to_response().unwrap();
        assert!(response.get("password").is_none());
        assert_eq!(response["email"], "jane@example.com");
        assert_eq!(response["role"], "candidate");
    }

    #[test]
    fn test_role_choice() {
        let error = User::schema().check_field("role", &json!("root")).unwrap();
        assert_eq!(
            error.message,
            "Role must be one of the following: 'candidate','company','admin'"
        );
        assert!(UserRole::parse("root").is_err());
        assert_eq!(UserRole::parse("company").unwrap(), UserRole::Company);
    }

    #[test]
    fn test_email_format_and_short_password() {
        let schema = User::schema();
        assert_eq!(
            schema.check_field("email", &json!("jane")).unwrap().message,
            "Email must be a valid email address"
        );
        assert_eq!(
            schema.check_field("password", &json!("short")).unwrap().message,
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_long_valid_email_has_no_length_cap() {
        let email = format!("{}@{}.{}.com", "a".repeat(60), "b".repeat(60), "c".repeat(60));
        assert!(email.len() > 180);
        assert!(User::schema().check_field("email", &json!(email)).is_none());
    }
}
