//! 트랜잭션 실행기
//!
//! 작업 단위(unit of work)를 begin/commit/rollback으로 감싸는 유일한 지점입니다.
//! 리포지토리는 상태를 변경할 때 반드시 이 실행기를 거칩니다.
//!
//! - 작업 단위가 성공하면 커밋합니다.
//! - 작업 단위가 `StorageError`를 반환하면 먼저 롤백하고,
//!   원래 메시지를 담은 `AppError::DatabaseError(500)`를 반환합니다.
//! - 롤백 자체가 실패하면 그 실패가 전파되며 재시도하지 않습니다.
//!
//! 세션은 작업 단위 하나에만 쓰이고 모든 종료 경로에서 커밋 또는 롤백으로 해제됩니다.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use super::{StorageError, Store};
use crate::core::errors::{AppError, AppResult};

pub struct TransactionalExecutor<S: Store> {
    store: Arc<S>,
}

impl<S: Store> Clone for TransactionalExecutor<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<S: Store> TransactionalExecutor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// 작업 단위를 하나의 트랜잭션 안에서 실행합니다.
    ///
    /// 작업 단위는 저장소와 세션을 빌려 받는 클로저입니다.
    ///
    /// ```rust,ignore
    /// executor.execute(|store, session| Box::pin(async move {
    ///     store.insert(session, "contracts", id, record).await
    /// })).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 트랜잭션 시작, 작업 단위, 커밋, 롤백 중 하나가 실패한 경우
    pub async fn execute<T, F>(&self, unit_of_work: F) -> AppResult<T>
    where
        T: Send,
        F: for<'s> FnOnce(&'s S, &'s mut S::Session) -> BoxFuture<'s, Result<T, StorageError>>,
    {
        let store = self.store.as_ref();

        let mut session = store.begin().await.map_err(|e| {
            log::error!("❌ 트랜잭션 시작 실패: {}", e);
            AppError::from(e)
        })?;

        let outcome = unit_of_work(store, &mut session).await;

        match outcome {
            Ok(value) => {
                store.commit(session).await.map_err(|e| {
                    log::error!("❌ 트랜잭션 커밋 실패: {}", e);
                    AppError::from(e)
                })?;
                Ok(value)
            }
            Err(failure) => {
                log::error!("❌ 작업 단위 실패, 롤백합니다: {}", failure);

                if let Err(rollback_failure) = store.rollback(session).await {
                    log::error!("❌ 롤백 실패: {}", rollback_failure);
                    return Err(AppError::database(format!(
                        "rollback failed: {} (original error: {})",
                        rollback_failure, failure
                    )));
                }

                Err(AppError::from(failure))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, Record};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[actix_web::test]
    async fn test_commit_on_success() {
        let store = Arc::new(MemoryStore::new());
        let executor = TransactionalExecutor::new(store.clone());

        let id = executor
            .execute(|store, session| {
                Box::pin(async move {
                    let id = store.next_id(session, "contracts").await?;
                    store
                        .insert(session, "contracts", id, record(json!({"id": id, "name": "CDD"})))
                        .await?;
                    Ok(id)
                })
            })
            .await
            .unwrap();

        assert_eq!(store.find("contracts", id).await.unwrap().unwrap()["name"], "CDD");
    }

    #[actix_web::test]
    async fn test_failure_mid_unit_rolls_back_everything() {
        let store = Arc::new(MemoryStore::new());
        let executor = TransactionalExecutor::new(store.clone());

        let result: AppResult<()> = executor
            .execute(|store, session| {
                Box::pin(async move {
                    store
                        .insert(session, "job_offers", 1, record(json!({"id": 1, "title": "PHP"})))
                        .await?;
                    // 두 번째 문장 실패
                    store
                        .insert(session, "job_offers", 1, record(json!({"id": 1, "title": "dup"})))
                        .await?;
                    Ok(())
                })
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::database("duplicate key: job_offers with id 1 already exists")
        );
        assert!(store.find("job_offers", 1).await.unwrap().is_none());
        assert!(store.list("job_offers").await.unwrap().is_empty());
    }

    /// 롤백이 항상 실패하는 저장소
    struct BrokenRollbackStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl Store for BrokenRollbackStore {
        type Session = <MemoryStore as Store>::Session;

        async fn begin(&self) -> Result<Self::Session, StorageError> {
            self.inner.begin().await
        }

        async fn commit(&self, session: Self::Session) -> Result<(), StorageError> {
            self.inner.commit(session).await
        }

        async fn rollback(&self, _session: Self::Session) -> Result<(), StorageError> {
            Err(StorageError::new("connection lost"))
        }

        async fn next_id(&self, session: &mut Self::Session, collection: &str) -> Result<i64, StorageError> {
            self.inner.next_id(session, collection).await
        }

        async fn insert(&self, session: &mut Self::Session, collection: &str, id: i64, record: Record) -> Result<(), StorageError> {
            self.inner.insert(session, collection, id, record).await
        }

        async fn replace(&self, session: &mut Self::Session, collection: &str, id: i64, record: Record) -> Result<bool, StorageError> {
            self.inner.replace(session, collection, id, record).await
        }

        async fn remove(&self, session: &mut Self::Session, collection: &str, id: i64) -> Result<bool, StorageError> {
            self.inner.remove(session, collection, id).await
        }

        async fn find(&self, collection: &str, id: i64) -> Result<Option<Record>, StorageError> {
            self.inner.find(collection, id).await
        }

        async fn find_by(&self, collection: &str, field: &str, value: &Value) -> Result<Option<Record>, StorageError> {
            self.inner.find_by(collection, field, value).await
        }

        async fn list(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
            self.inner.list(collection).await
        }

        async fn ping(&self) -> Result<(), StorageError> {
            Ok(())
        }

        fn backend_name(&self) -> &'static str {
            "broken"
        }
    }

    #[actix_web::test]
    async fn test_rollback_failure_propagates() {
        let store = Arc::new(BrokenRollbackStore { inner: MemoryStore::new() });
        let executor = TransactionalExecutor::new(store);

        let result: AppResult<()> = executor
            .execute(|_store, _session| {
                Box::pin(async move { Err(StorageError::new("constraint violation")) })
            })
            .await;

        match result.unwrap_err() {
            AppError::DatabaseError { code, message } => {
                assert_eq!(code, 500);
                assert!(message.contains("connection lost"));
                assert!(message.contains("constraint violation"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
