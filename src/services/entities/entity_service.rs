//! # 엔티티 서비스 구현
//!
//! 쓰기 요청 하나가 거치는 파이프라인을 엔티티 타입과 무관하게 한 곳에 모읍니다.
//!
//! ```text
//! Payload ─▶ RequestValidator ─▶ EntityBuilder ─▶ EntityRepository ─▶ Store
//!              (required → field)   (setter 테이블)   (TransactionalExecutor)
//! ```
//!
//! 어느 단계에서 실패하든 `AppError`가 수정 없이 핸들러까지 전파되고,
//! 응답 변환은 `ResponseError` 구현에서만 일어납니다.

use crate::core::errors::{AppError, AppResult};
use crate::db::Store;
use crate::domain::entities::Entity;
use crate::domain::validation::{EntityBuilder, Payload, RequestValidator, ValidationMode};
use crate::repositories::EntityRepository;

/// 엔티티 타입 하나에 대한 CRUD 비즈니스 로직 서비스
///
/// ## 수정 의미론
///
/// | 연산 | 검증 | 병합 |
/// |------|------|------|
/// | `create` | 필수 + 필드별 | 기본값 인스턴스에 적용 |
/// | `replace` (PUT) | 필수 + 필드별 | 저장된 인스턴스에 부분 병합 |
/// | `patch` (PATCH) | 필드별 | 저장된 인스턴스에 부분 병합 |
pub struct EntityService<E: Entity, S: Store> {
    repository: EntityRepository<E, S>,
}

impl<E: Entity, S: Store> Clone for EntityService<E, S> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

impl<E: Entity, S: Store> EntityService<E, S> {
    pub fn new(repository: EntityRepository<E, S>) -> Self {
        Self { repository }
    }

    /// 페이로드를 검증하고 새 엔티티를 만들어 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 필수 필드 누락, 제약 위반, 세터 거부
    /// * `AppError::DatabaseError` - 저장 실패 (트랜잭션은 이미 롤백됨)
    pub async fn create(&self, payload: &Payload) -> AppResult<E> {
        RequestValidator::validate::<E>(payload)?;
        let entity = EntityBuilder::build(E::default(), payload)?;
        self.repository.create(entity).await
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 id의 엔티티가 없음
    pub async fn get(&self, id: i64) -> AppResult<E> {
        self.repository
            .read(id)
            .await?
            .ok_or_else(|| AppError::not_found::<E>(id))
    }

    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.repository.list().await
    }

    /// 전체 검증 후 저장된 엔티티에 병합합니다 (PUT).
    pub async fn replace(&self, id: i64, payload: &Payload) -> AppResult<E> {
        self.modify(id, payload, ValidationMode::Full).await
    }

    /// 전달된 필드만 검증하고 병합합니다 (PATCH).
    pub async fn patch(&self, id: i64, payload: &Payload) -> AppResult<E> {
        self.modify(id, payload, ValidationMode::Partial).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found::<E>(id))
        }
    }

    async fn modify(&self, id: i64, payload: &Payload, mode: ValidationMode) -> AppResult<E> {
        RequestValidator::validate_with(E::schema(), payload, mode)?;

        let existing = self.get(id).await?;
        let entity = EntityBuilder::build(existing, payload)?;

        self.repository
            .update(entity)
            .await?
            .ok_or_else(|| AppError::not_found::<E>(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, TransactionalExecutor};
    use crate::domain::entities::{fixtures, Apply, ApplyStatus, JobOffer};
    use crate::domain::validation::{payload_from_value, ValidationError};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn service<E: Entity>() -> EntityService<E, MemoryStore> {
        let executor = TransactionalExecutor::new(Arc::new(MemoryStore::new()));
        EntityService::new(EntityRepository::new(executor))
    }

    fn payload(value: Value) -> Payload {
        payload_from_value(value).unwrap()
    }

    #[actix_web::test]
    async fn test_create_then_get_returns_identical_values() {
        let offers = service::<JobOffer>();

        let created = offers.create(&payload(fixtures::job_offer())).await.unwrap();
        let found = offers.get(created.id().unwrap()).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.title, "PHP developer");
        assert_eq!(found.city, "Paris");
        assert_eq!(found.salary_min, 30000);
        assert_eq!(found.salary_max, 40000);
    }

    #[actix_web::test]
    async fn test_padded_value_is_stored_as_validated() {
        let offers = service::<JobOffer>();
        let mut body = fixtures::job_offer();
        body["title"] = json!(" az ");

        let created = offers.create(&payload(body)).await.unwrap();
        let found = offers.get(created.id().unwrap()).await.unwrap();

        assert_eq!(found.title, " az ");
        let title = JobOffer::schema().field("title").unwrap();
        assert!(title.check(&json!(found.title)).is_none());
    }

    #[actix_web::test]
    async fn test_invalid_payload_is_never_persisted() {
        let offers = service::<JobOffer>();

        let error = offers.create(&payload(json!({"title": "az"}))).await.unwrap_err();

        assert!(matches!(error, AppError::InvalidRequest(_)));
        assert!(offers.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_setter_rejection_propagates_as_invalid_request() {
        let applies = service::<Apply>();
        let mut body = fixtures::apply();
        body["status"] = json!("archived");

        let error = applies.create(&payload(body)).await.unwrap_err();

        assert_eq!(
            error,
            AppError::invalid(ValidationError::field(
                "status",
                "Status must be one of the following: 'accepted','denied','pending'",
                json!("archived"),
            ))
        );
    }

    #[actix_web::test]
    async fn test_patch_merges_only_given_fields() {
        let applies = service::<Apply>();
        let created = applies.create(&payload(fixtures::apply())).await.unwrap();
        let id = created.id().unwrap();

        let patched = applies.patch(id, &payload(json!({"status": "accepted"}))).await.unwrap();

        assert_eq!(patched.status, ApplyStatus::Accepted);
        assert_eq!(patched.candidate_id, created.candidate_id);
        assert_eq!(patched.job_offer_id, created.job_offer_id);
        assert_eq!(patched.meta.created_at, created.meta.created_at);
    }

    #[actix_web::test]
    async fn test_replace_requires_every_required_field() {
        let applies = service::<Apply>();
        let created = applies.create(&payload(fixtures::apply())).await.unwrap();

        let error = applies
            .replace(created.id().unwrap(), &payload(json!({"status": "denied"})))
            .await
            .unwrap_err();

        match error {
            AppError::InvalidRequest(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].missing_fields.as_deref(), Some("candidateId, resumeId, jobOfferId"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_missing_entity_is_not_found() {
        let offers = service::<JobOffer>();

        assert_eq!(
            offers.get(42).await.unwrap_err(),
            AppError::NotFound("JobOffer with id 42 not found".to_string())
        );
        assert_eq!(
            offers.patch(42, &payload(json!({"city": "Lyon"}))).await.unwrap_err(),
            AppError::NotFound("JobOffer with id 42 not found".to_string())
        );
        assert!(matches!(offers.delete(42).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_removes_entity() {
        let offers = service::<JobOffer>();
        let created = offers.create(&payload(fixtures::job_offer())).await.unwrap();
        let id = created.id().unwrap();

        offers.delete(id).await.unwrap();

        assert!(matches!(offers.get(id).await, Err(AppError::NotFound(_))));
    }
}
