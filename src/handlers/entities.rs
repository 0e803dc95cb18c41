//! # Entity CRUD HTTP Handlers
//!
//! 일곱 가지 엔티티가 공유하는 제네릭 핸들러입니다.
//! 엔티티 타입마다 [`entity_scope`]로 하나의 스코프가 만들어집니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/` | 목록 조회 | 200 OK |
//! | `POST` | `/` | 생성 (필수 + 필드별 검증) | 201 Created |
//! | `GET` | `/{id}` | 단건 조회 | 200 OK / 404 |
//! | `PUT` | `/{id}` | 수정 (필수 + 필드별 검증, 부분 병합) | 200 OK |
//! | `PATCH` | `/{id}` | 수정 (필드별 검증, 부분 병합) | 200 OK |
//! | `DELETE` | `/{id}` | 삭제 | 204 No Content / 404 |
//!
//! 본문은 먼저 `serde_json::Value`로 디코딩된 뒤 페이로드로 변환되므로,
//! 엔티티 필드의 타입 검사는 검증기가 담당합니다.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::db::Store;
use crate::domain::entities::Entity;
use crate::domain::validation::payload_from_value;
use crate::services::entities::EntityService;

type Service<E, S> = web::Data<EntityService<E, S>>;

fn respond<E: Entity>(entity: &E) -> Result<Value, AppError> {
    entity
        .to_response()
        .map_err(|e| AppError::InternalError(format!("{} 직렬화 실패: {}", E::NAME, e)))
}

/// 엔티티 `E`의 CRUD 스코프를 만듭니다.
///
/// ```rust,ignore
/// cfg.service(entity_scope("/api/v1/job-offers", job_offer_service));
/// ```
pub fn entity_scope<E: Entity, S: Store>(path: &str, service: EntityService<E, S>) -> actix_web::Scope {
    web::scope(path)
        .app_data(web::Data::new(service))
        .service(
            web::resource("")
                .route(web::get().to(list::<E, S>))
                .route(web::post().to(create::<E, S>)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(get::<E, S>))
                .route(web::put().to(replace::<E, S>))
                .route(web::patch().to(patch::<E, S>))
                .route(web::delete().to(delete::<E, S>)),
        )
}

pub async fn list<E: Entity, S: Store>(service: Service<E, S>) -> Result<HttpResponse, AppError> {
    let body = service
        .list()
        .await?
        .iter()
        .map(respond)
        .collect::<Result<Vec<Value>, AppError>>()?;

    Ok(HttpResponse::Ok().json(body))
}

pub async fn create<E: Entity, S: Store>(
    service: Service<E, S>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = payload_from_value(body.into_inner())?;
    let created = service.create(&payload).await?;

    Ok(HttpResponse::Created().json(respond(&created)?))
}

pub async fn get<E: Entity, S: Store>(
    service: Service<E, S>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let entity = service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(respond(&entity)?))
}

pub async fn replace<E: Entity, S: Store>(
    service: Service<E, S>,
    id: web::Path<i64>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = payload_from_value(body.into_inner())?;
    let updated = service.replace(id.into_inner(), &payload).await?;

    Ok(HttpResponse::Ok().json(respond(&updated)?))
}

pub async fn patch<E: Entity, S: Store>(
    service: Service<E, S>,
    id: web::Path<i64>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = payload_from_value(body.into_inner())?;
    let updated = service.patch(id.into_inner(), &payload).await?;

    Ok(HttpResponse::Ok().json(respond(&updated)?))
}

pub async fn delete<E: Entity, S: Store>(
    service: Service<E, S>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
