//! 휘발성 인메모리 저장소
//!
//! `DATABASE_BACKEND=memory`로 선택하며 테스트에서도 사용합니다.
//! 세션 안의 쓰기는 스테이징되었다가 커밋 시 한 번의 쓰기 잠금 안에서 적용되고,
//! 롤백 시 버려집니다. 커밋 전까지 다른 읽기에는 보이지 않습니다.
//! 할당된 id는 롤백되어도 재사용되지 않습니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use super::{Record, StorageError, Store};

type Collections = HashMap<String, BTreeMap<i64, Record>>;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    counters: Mutex<HashMap<String, i64>>,
}

/// 커밋 전까지 적용되지 않는 쓰기 목록
#[derive(Debug, Default)]
pub struct MemorySession {
    staged: Vec<StagedWrite>,
}

#[derive(Debug)]
enum StagedWrite {
    Put { collection: String, id: i64, record: Record },
    Delete { collection: String, id: i64 },
}

impl StagedWrite {
    fn targets(&self, collection: &str, id: i64) -> bool {
        match self {
            StagedWrite::Put { collection: c, id: i, .. }
            | StagedWrite::Delete { collection: c, id: i } => c == collection && *i == id,
        }
    }
}

fn poisoned() -> StorageError {
    StorageError::new("memory store lock poisoned")
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 세션에 스테이징된 쓰기를 반영한 존재 여부
    fn exists(&self, session: &MemorySession, collection: &str, id: i64) -> Result<bool, StorageError> {
        if let Some(last) = session.staged.iter().rev().find(|w| w.targets(collection, id)) {
            return Ok(matches!(last, StagedWrite::Put { .. }));
        }

        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections
            .get(collection)
            .is_some_and(|records| records.contains_key(&id)))
    }
}

#[async_trait]
impl Store for MemoryStore {
    type Session = MemorySession;

    async fn begin(&self) -> Result<Self::Session, StorageError> {
        Ok(MemorySession::default())
    }

    async fn commit(&self, session: Self::Session) -> Result<(), StorageError> {
        let mut collections = self.collections.write().map_err(|_| poisoned())?;

        for write in session.staged {
            match write {
                StagedWrite::Put { collection, id, record } => {
                    collections.entry(collection).or_default().insert(id, record);
                }
                StagedWrite::Delete { collection, id } => {
                    if let Some(records) = collections.get_mut(&collection) {
                        records.remove(&id);
                    }
                }
            }
        }

        Ok(())
    }

    async fn rollback(&self, session: Self::Session) -> Result<(), StorageError> {
        log::debug!("인메모리 트랜잭션 롤백: 스테이징된 쓰기 {}건 폐기", session.staged.len());
        Ok(())
    }

    async fn next_id(&self, _session: &mut Self::Session, collection: &str) -> Result<i64, StorageError> {
        let mut counters = self.counters.lock().map_err(|_| poisoned())?;
        let counter = counters.entry(collection.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    async fn insert(
        &self,
        session: &mut Self::Session,
        collection: &str,
        id: i64,
        record: Record,
    ) -> Result<(), StorageError> {
        if self.exists(session, collection, id)? {
            return Err(StorageError::new(format!(
                "duplicate key: {} with id {} already exists",
                collection, id
            )));
        }

        session.staged.push(StagedWrite::Put {
            collection: collection.to_string(),
            id,
            record,
        });
        Ok(())
    }

    async fn replace(
        &self,
        session: &mut Self::Session,
        collection: &str,
        id: i64,
        record: Record,
    ) -> Result<bool, StorageError> {
        if !self.exists(session, collection, id)? {
            return Ok(false);
        }

        session.staged.push(StagedWrite::Put {
            collection: collection.to_string(),
            id,
            record,
        });
        Ok(true)
    }

    async fn remove(
        &self,
        session: &mut Self::Session,
        collection: &str,
        id: i64,
    ) -> Result<bool, StorageError> {
        if !self.exists(session, collection, id)? {
            return Ok(false);
        }

        session.staged.push(StagedWrite::Delete {
            collection: collection.to_string(),
            id,
        });
        Ok(true)
    }

    async fn find(&self, collection: &str, id: i64) -> Result<Option<Record>, StorageError> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(&id))
            .cloned())
    }

    async fn find_by(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Record>, StorageError> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections.get(collection).and_then(|records| {
            records
                .values()
                .find(|record| record.get(field) == Some(value))
                .cloned()
        }))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections
            .get(collection)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.collections.read().map(|_| ()).map_err(|_| poisoned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
