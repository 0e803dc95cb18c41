//! # Domain Entities
//!
//! 잡보드의 일곱 가지 엔티티와 공통 [`Entity`] 트레이트입니다.
//!
//! | 엔티티 | 컬렉션 | 관계 |
//! |--------|--------|------|
//! | [`User`] | `users` | 인증 주체 |
//! | [`Candidate`] | `candidates` | `userId` → User, `SocialMedia` 소유 |
//! | [`Company`] | `companies` | `userId` → User, `SocialMedia` 소유 |
//! | [`Contract`] | `contracts` | 계약 형태 (CDI, CDD, ...) |
//! | [`JobOffer`] | `job_offers` | `companyId` → Company, `contractId` → Contract |
//! | [`Resume`] | `resumes` | `candidateId` → Candidate |
//! | [`Apply`] | `applies` | `candidateId`, `resumeId`, `jobOfferId` |
//!
//! 엔티티 간 관계는 정수 외래 키로만 표현합니다. 객체 그래프를 포함하는 것은
//! `Candidate`/`Company`가 구성으로 소유하는 [`SocialMedia`] 값 객체뿐입니다.

pub mod apply;
pub mod candidate;
pub mod company;
pub mod contract;
pub mod job_offer;
pub mod resume;
pub mod social_media;
pub mod user;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::validation::EntitySchema;

pub use apply::{Apply, ApplyStatus};
pub use candidate::Candidate;
pub use company::Company;
pub use contract::Contract;
pub use job_offer::JobOffer;
pub use resume::Resume;
pub use social_media::SocialMedia;
pub use user::{User, UserRole};

/// 모든 엔티티가 공유하는 읽기 전용 메타데이터
///
/// 세터가 없으므로 페이로드로 변경할 수 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    /// 저장 시 부여되는 정수 기본 키
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// 파이프라인이 다루는 엔티티 타입
///
/// 각 구현체는 정적 스키마 테이블 하나를 가지며, 이것이 검증 규칙과 세터의 유일한 출처입니다.
pub trait Entity:
    Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// 에러 메시지에 쓰이는 타입 이름
    const NAME: &'static str;
    /// 저장소 컬렉션(테이블) 이름
    const COLLECTION: &'static str;
    /// 저장 시 중복이 허용되지 않는 필드
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn schema() -> &'static EntitySchema<Self>;

    fn meta(&self) -> &EntityMeta;

    fn meta_mut(&mut self) -> &mut EntityMeta;

    fn id(&self) -> Option<i64> {
        self.meta().id
    }

    /// 응답 본문 표현. 노출하면 안 되는 필드가 있는 엔티티는 재정의합니다.
    fn to_response(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn long_description() -> String {
        "We are looking for a PHP developer to join a small product team in Paris. \
         You will work on a Symfony codebase, write tests, review code and ship features \
         every week alongside designers and product managers."
            .to_string()
    }

    pub fn job_offer() -> Value {
        json!({
            "title": "PHP developer",
            "description": long_description(),
            "city": "Paris",
            "salaryMin": 30000,
            "salaryMax": 40000
        })
    }

    pub fn candidate() -> Value {
        json!({"userId": 1, "firstName": "Jane", "lastName": "Doe"})
    }

    pub fn company() -> Value {
        json!({"userId": 2, "name": "Acme"})
    }

    pub fn contract() -> Value {
        json!({"name": "CDI"})
    }

    pub fn resume() -> Value {
        json!({"candidateId": 1, "title": "Backend developer", "filename": "jane-doe.pdf"})
    }

    pub fn apply() -> Value {
        json!({"candidateId": 1, "resumeId": 2, "jobOfferId": 3})
    }

    pub fn user() -> Value {
        json!({"email": "jane@example.com", "password": "correct-horse"})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::validation::{payload_from_value, RequestValidator, RuleProvider};

    /// 필수 필드를 하나씩 제거했을 때 정확히 그 필드만 누락으로 보고되는지 확인합니다.
    fn assert_required_completeness<E: Entity>(valid: Value, expected_required: &[&str]) {
        let required = E::schema().required_fields();
        assert_eq!(required, expected_required, "{} required fields", E::NAME);

        let payload = payload_from_value(valid).unwrap();
        assert!(
            RequestValidator::validate::<E>(&payload).is_ok(),
            "{} fixture must be valid",
            E::NAME
        );

        for field in required {
            let mut without = payload.clone();
            without.remove(*field);

            match RequestValidator::validate::<E>(&without) {
                Err(AppError::InvalidRequest(errors)) => {
                    assert_eq!(errors.len(), 1);
                    assert_eq!(errors[0].missing_fields.as_deref(), Some(*field));
                    assert_eq!(
                        errors[0].message,
                        format!(
                            "The request must contain the following fields: {}",
                            required.join(", ")
                        )
                    );
                }
                other => panic!("{}.{}: expected missing-field error, got {:?}", E::NAME, field, other),
            }
        }
    }

    #[test]
    fn test_required_field_completeness_for_every_entity() {
        assert_required_completeness::<User>(fixtures::user(), &["email", "password"]);
        assert_required_completeness::<Candidate>(
            fixtures::candidate(),
            &["userId", "firstName", "lastName"],
        );
        assert_required_completeness::<Company>(fixtures::company(), &["userId", "name"]);
        assert_required_completeness::<Contract>(fixtures::contract(), &["name"]);
        assert_required_completeness::<JobOffer>(
            fixtures::job_offer(),
            &["title", "description", "city", "salaryMin", "salaryMax"],
        );
        assert_required_completeness::<Resume>(
            fixtures::resume(),
            &["candidateId", "title", "filename"],
        );
        assert_required_completeness::<Apply>(
            fixtures::apply(),
            &["candidateId", "resumeId", "jobOfferId"],
        );
    }

    #[test]
    fn test_meta_is_not_settable() {
        for field in ["id", "createdAt", "updatedAt"] {
            assert!(!JobOffer::schema().is_settable(field));
            assert!(!Apply::schema().is_settable(field));
        }
    }

    #[test]
    fn test_meta_serialization_skips_empty_values() {
        let value = serde_json::to_value(EntityMeta::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
