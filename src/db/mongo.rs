//! MongoDB 저장소 구현
//!
//! 클라이언트 세션의 다중 문서 트랜잭션으로 작업 단위를 구현합니다.
//! 정수 기본 키는 `counters` 컬렉션의 `$inc` 업서트로 할당되며,
//! 삽입과 같은 트랜잭션 안에서 수행되므로 롤백 시 함께 취소됩니다.
//!
//! 레코드의 `id` 키는 문서의 `_id`로 저장되고, 읽을 때 다시 `id`로 바뀝니다.
//! 트랜잭션을 사용하려면 MongoDB가 레플리카 셋으로 구성되어 있어야 합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{
    ClientOptions, FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument,
};
use mongodb::{Client, ClientSession, Collection, IndexModel};
use serde_json::Value;

use super::{Record, StorageError, Store};
use crate::config::DatabaseConfig;

const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트는 내부적으로 연결 풀을 관리하므로 복제 비용이 낮습니다.
/// 세션은 작업 단위마다 새로 시작됩니다.
#[derive(Clone)]
pub struct MongoStore {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl MongoStore {
    /// 새 MongoDB 연결을 생성하고 ping으로 검증합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "job_board_dev")
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let store = MongoStore::connect().await?;
    /// ```
    pub async fn connect() -> Result<Self, StorageError> {
        let mongodb_uri = DatabaseConfig::mongodb_uri();
        let database_name = DatabaseConfig::database_name();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("job_board".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 사용자 이메일 유니크 인덱스를 생성합니다.
    pub async fn ensure_indexes(&self) -> Result<(), StorageError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("users_email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection("users").create_index(email_index).await?;
        info!("✅ MongoDB 인덱스 생성 완료");
        Ok(())
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.client.database(&self.database_name).collection(name)
    }
}

fn to_document(id: i64, record: &Record) -> Result<Document, StorageError> {
    let mut document = mongodb::bson::to_document(record)?;
    document.remove("id");
    document.insert("_id", id);
    Ok(document)
}

fn to_record(mut document: Document) -> Record {
    if let Some(id) = document.remove("_id") {
        document.insert("id", id);
    }

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

#[async_trait]
impl Store for MongoStore {
    type Session = ClientSession;

    async fn begin(&self) -> Result<Self::Session, StorageError> {
        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;
        Ok(session)
    }

    async fn commit(&self, mut session: Self::Session) -> Result<(), StorageError> {
        session.commit_transaction().await?;
        Ok(())
    }

    async fn rollback(&self, mut session: Self::Session) -> Result<(), StorageError> {
        session.abort_transaction().await?;
        Ok(())
    }

    async fn next_id(&self, session: &mut Self::Session, collection: &str) -> Result<i64, StorageError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .collection(COUNTERS_COLLECTION)
            .find_one_and_update(doc! { "_id": collection }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .session(&mut *session)
            .await?
            .ok_or_else(|| StorageError::new(format!("counter for {} was not created", collection)))?;

        match counter.get("seq") {
            Some(Bson::Int64(seq)) => Ok(*seq),
            Some(Bson::Int32(seq)) => Ok(i64::from(*seq)),
            other => Err(StorageError::new(format!(
                "counter for {} has an unexpected value: {:?}",
                collection, other
            ))),
        }
    }

    async fn insert(
        &self,
        session: &mut Self::Session,
        collection: &str,
        id: i64,
        record: Record,
    ) -> Result<(), StorageError> {
        let document = to_document(id, &record)?;
        self.collection(collection)
            .insert_one(document)
            .session(&mut *session)
            .await?;
        Ok(())
    }

    async fn replace(
        &self,
        session: &mut Self::Session,
        collection: &str,
        id: i64,
        record: Record,
    ) -> Result<bool, StorageError> {
        let document = to_document(id, &record)?;
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id }, document)
            .session(&mut *session)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn remove(
        &self,
        session: &mut Self::Session,
        collection: &str,
        id: i64,
    ) -> Result<bool, StorageError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .session(&mut *session)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn find(&self, collection: &str, id: i64) -> Result<Option<Record>, StorageError> {
        let document = self.collection(collection).find_one(doc! { "_id": id }).await?;
        Ok(document.map(to_record))
    }

    async fn find_by(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Record>, StorageError> {
        let mut filter = Document::new();
        filter.insert(field, mongodb::bson::to_bson(value)?);

        let document = self.collection(collection).find_one(filter).await?;
        Ok(document.map(to_record))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let documents: Vec<Document> = self
            .collection(collection)
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(to_record).collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.client
            .database(&self.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
