//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 엔티티 CRUD, 인증, 업로드 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Routes
//!
//! | 경로 | 설명 |
//! |------|------|
//! | `/api/v1/users` | 사용자 |
//! | `/api/v1/candidates` | 구직자 |
//! | `/api/v1/companies` | 회사 |
//! | `/api/v1/contracts` | 계약 형태 |
//! | `/api/v1/job-offers` | 채용 공고 |
//! | `/api/v1/resumes` | 이력서 |
//! | `/api/v1/applies` | 지원서 |
//! | `/api/v1/auth/login` | 로그인 |
//! | `/api/v1/uploads` | 파일 업로드 |
//! | `/health` | 헬스체크 |
//!
//! # Extractor Error Handling
//!
//! JSON 본문 파싱 실패는 `"request body"` 필드의 400 응답,
//! 정수가 아닌 `{id}` 경로는 404 응답으로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let store = Arc::new(MemoryStore::new());
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, store));
//! ```

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::errors::{json_error_handler, path_error_handler};
use crate::db::{Store, TransactionalExecutor};
use crate::domain::entities::{
    Apply, Candidate, Company, Contract, Entity, JobOffer, Resume, User,
};
use crate::handlers;
use crate::repositories::EntityRepository;
use crate::services::auth::{AuthService, TokenService};
use crate::services::entities::EntityService;
use crate::services::uploads::UploadService;

/// 설정 파일의 값으로 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `store` - 모든 리포지토리가 공유하는 저장소 핸들
pub fn configure_all_routes<S: Store>(cfg: &mut web::ServiceConfig, store: Arc<S>) {
    configure_routes(cfg, store, TokenService::from_config(), UploadService::from_config());
}

/// 명시적으로 전달된 협력자로 모든 라우트를 설정합니다
pub fn configure_routes<S: Store>(
    cfg: &mut web::ServiceConfig,
    store: Arc<S>,
    tokens: TokenService,
    uploads: UploadService,
) {
    let executor = TransactionalExecutor::new(Arc::clone(&store));

    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::Data::from(store));

    // Health check endpoint
    cfg.service(web::resource("/health").route(web::get().to(health_check::<S>)));

    configure_entity_routes(cfg, &executor);
    configure_auth_routes(cfg, &executor, tokens);
    configure_upload_routes(cfg, uploads);
}

fn service_for<E: Entity, S: Store>(executor: &TransactionalExecutor<S>) -> EntityService<E, S> {
    EntityService::new(EntityRepository::new(executor.clone()))
}

/// 일곱 가지 엔티티의 CRUD 라우트를 설정합니다
fn configure_entity_routes<S: Store>(cfg: &mut web::ServiceConfig, executor: &TransactionalExecutor<S>) {
    use handlers::entities::entity_scope;

    cfg.service(entity_scope("/api/v1/users", service_for::<User, S>(executor)))
        .service(entity_scope("/api/v1/candidates", service_for::<Candidate, S>(executor)))
        .service(entity_scope("/api/v1/companies", service_for::<Company, S>(executor)))
        .service(entity_scope("/api/v1/contracts", service_for::<Contract, S>(executor)))
        .service(entity_scope("/api/v1/job-offers", service_for::<JobOffer, S>(executor)))
        .service(entity_scope("/api/v1/resumes", service_for::<Resume, S>(executor)))
        .service(entity_scope("/api/v1/applies", service_for::<Apply, S>(executor)));
}

/// 인증 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
fn configure_auth_routes<S: Store>(
    cfg: &mut web::ServiceConfig,
    executor: &TransactionalExecutor<S>,
    tokens: TokenService,
) {
    let auth = AuthService::new(EntityRepository::new(executor.clone()), tokens);

    cfg.service(
        web::scope("/api/v1/auth")
            .app_data(web::Data::new(auth))
            .service(web::resource("/login").route(web::post().to(handlers::auth::local_login::<S>))),
    );
}

fn configure_upload_routes(cfg: &mut web::ServiceConfig, uploads: UploadService) {
    cfg.service(
        web::resource("/api/v1/uploads")
            .app_data(web::PayloadConfig::new(uploads.max_bytes()))
            .app_data(web::Data::new(uploads))
            .route(web::post().to(handlers::uploads::upload_file)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소 ping이 실패하면 503을 반환합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "job_board_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "database": "mongodb"
/// }
/// ```
async fn health_check<S: Store>(store: web::Data<S>) -> HttpResponse {
    let (mut response, status) = match store.ping().await {
        Ok(()) => (HttpResponse::Ok(), "healthy"),
        Err(e) => {
            log::error!("❌ 저장소 헬스체크 실패: {}", e);
            (HttpResponse::ServiceUnavailable(), "unhealthy")
        }
    };

    response.json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": store.backend_name(),
    }))
}
