//! # 엔티티 리포지토리 구현
//!
//! 일곱 가지 엔티티가 공유하는 제네릭 데이터 액세스 계층입니다.
//! 엔티티는 JSON 레코드로 변환되어 저장소의 `E::COLLECTION` 컬렉션에 저장됩니다.
//!
//! ## 특징
//!
//! - **트랜잭션 쓰기**: 모든 상태 변경은 [`TransactionalExecutor`]의 작업 단위 안에서 수행
//! - **명시적 미발견**: 조회 결과는 `Option<E>`이며 `None`이 유일한 미발견 표현
//! - **캐싱 없음**: 요청 간에 엔티티를 메모리에 보관하지 않음

use std::marker::PhantomData;

use chrono::Utc;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::db::{Record, StorageError, Store, TransactionalExecutor};
use crate::domain::entities::Entity;

/// 엔티티 타입 하나에 대한 CRUD 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repository = EntityRepository::<JobOffer, _>::new(executor.clone());
///
/// let created = repository.create(offer).await?;
/// let found = repository.read(created.id().unwrap_or_default()).await?;
///
/// match found {
///     Some(offer) => println!("{}", offer.title),
///     None => println!("없음"),
/// }
/// ```
pub struct EntityRepository<E: Entity, S: Store> {
    executor: TransactionalExecutor<S>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, S: Store> Clone for EntityRepository<E, S> {
    fn clone(&self) -> Self {
        Self::new(self.executor.clone())
    }
}

/// 엔티티를 저장소 레코드로 변환합니다.
fn to_record<E: Entity>(entity: &E) -> Result<Record, StorageError> {
    match serde_json::to_value(entity)? {
        Value::Object(record) => Ok(record),
        other => Err(StorageError::new(format!(
            "{} serialized to a non-object value: {}",
            E::NAME,
            other
        ))),
    }
}

fn from_record<E: Entity>(record: Record) -> AppResult<E> {
    serde_json::from_value(Value::Object(record))
        .map_err(|e| AppError::from(StorageError::from(e)))
}

impl<E: Entity, S: Store> EntityRepository<E, S> {
    pub fn new(executor: TransactionalExecutor<S>) -> Self {
        Self {
            executor,
            _entity: PhantomData,
        }
    }

    /// 새 엔티티를 저장합니다.
    ///
    /// 기본 키 할당과 삽입이 같은 트랜잭션 안에서 수행되며,
    /// `createdAt`/`updatedAt`이 현재 시각으로 설정됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(E)` - `id`가 채워진 저장된 엔티티
    /// * `Err(AppError::DatabaseError)` - 유니크 필드 충돌(409) 또는 저장소 오류(500)
    pub async fn create(&self, mut entity: E) -> AppResult<E> {
        self.ensure_unique(&entity).await?;

        let now = Utc::now();
        let meta = entity.meta_mut();
        meta.id = None;
        meta.created_at = Some(now);
        meta.updated_at = Some(now);

        let created = self
            .executor
            .execute(move |store, session| {
                Box::pin(async move {
                    let id = store.next_id(session, E::COLLECTION).await?;
                    entity.meta_mut().id = Some(id);
                    store.insert(session, E::COLLECTION, id, to_record(&entity)?).await?;
                    Ok(entity)
                })
            })
            .await?;

        log::info!("✅ {} 생성 완료 (id {:?})", E::NAME, created.id());
        Ok(created)
    }

    /// 식별자로 엔티티를 조회합니다. 없으면 `None`입니다.
    pub async fn read(&self, id: i64) -> AppResult<Option<E>> {
        let record = self.executor.store().find(E::COLLECTION, id).await?;
        record.map(from_record).transpose()
    }

    /// 필드 값이 일치하는 첫 번째 엔티티를 조회합니다.
    pub async fn find_by(&self, field: &str, value: &Value) -> AppResult<Option<E>> {
        let record = self.executor.store().find_by(E::COLLECTION, field, value).await?;
        record.map(from_record).transpose()
    }

    /// 컬렉션의 모든 엔티티 (id 오름차순)
    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.executor
            .store()
            .list(E::COLLECTION)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    /// 저장된 엔티티를 교체합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(E))` - `updatedAt`이 갱신된 엔티티
    /// * `Ok(None)` - 해당 id의 레코드가 없음
    pub async fn update(&self, mut entity: E) -> AppResult<Option<E>> {
        let Some(id) = entity.id() else {
            return Err(AppError::InternalError(format!(
                "{} without id cannot be updated",
                E::NAME
            )));
        };

        self.ensure_unique(&entity).await?;
        entity.meta_mut().updated_at = Some(Utc::now());

        self.executor
            .execute(move |store, session| {
                Box::pin(async move {
                    let replaced = store
                        .replace(session, E::COLLECTION, id, to_record(&entity)?)
                        .await?;
                    Ok(replaced.then_some(entity))
                })
            })
            .await
    }

    /// 엔티티를 삭제합니다. 대상이 없으면 `false`입니다.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let deleted = self
            .executor
            .execute(move |store, session| {
                Box::pin(async move { store.remove(session, E::COLLECTION, id).await })
            })
            .await?;

        if deleted {
            log::info!("🗑️ {} 삭제 완료 (id {})", E::NAME, id);
        }
        Ok(deleted)
    }

    /// `E::UNIQUE_FIELDS` 값이 다른 레코드와 겹치지 않는지 확인합니다.
    async fn ensure_unique(&self, entity: &E) -> AppResult<()> {
        if E::UNIQUE_FIELDS.is_empty() {
            return Ok(());
        }

        let record = to_record(entity)?;
        for field in E::UNIQUE_FIELDS {
            let Some(value) = record.get(*field) else {
                continue;
            };

            if let Some(existing) = self.find_by(field, value).await? {
                if existing.id() != entity.id() {
                    log::debug!("유니크 필드 충돌: {}.{} = {}", E::NAME, field, value);
                    return Err(AppError::conflict(format!(
                        "{} with {} {} already exists",
                        E::NAME,
                        field,
                        value
                    )));
                }
            }
        }

        Ok(())
    }
}
