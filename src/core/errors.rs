//! # Application Error Handling System
//!
//! 요청 파이프라인 전체에서 사용하는 통합 에러 타입과 HTTP 응답 매핑입니다.
//! 검증기, 엔티티 빌더, 트랜잭션 실행기에서 발생한 타입 에러는
//! 중간 계층에서 재해석되지 않고 그대로 전파되며,
//! `actix_web::ResponseError` 구현이 유일한 응답 변환 지점이 됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `InvalidRequest` | 400 Bad Request | 필드별 에러 배열 |
//! | `NotFound` | 404 Not Found | `{"error": "..."}` |
//! | `DatabaseError` | 에러에 담긴 코드 (기본 500) | `{"error": "..."}` |
//! | `AuthenticationError` | 401 Unauthorized | `{"error": "..."}` |
//! | `InternalError` | 500 Internal Server Error | 고정 메시지 (내부 정보 비노출) |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_offer(id: i64) -> AppResult<JobOffer> {
//!     repository.read(id).await?
//!         .ok_or_else(|| AppError::not_found::<JobOffer>(id))
//! }
//! ```

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::db::StorageError;
use crate::domain::entities::Entity;
use crate::domain::validation::ValidationError;

/// 외부에 노출되는 일반 내부 오류 메시지
pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 파이프라인이 의도적으로 만들어내는 실패는 `InvalidRequest`, `NotFound`,
/// `DatabaseError` 세 가지입니다. `AuthenticationError`는 로그인 협력자 전용이고,
/// `InternalError`는 분류되지 않은 결함을 나타냅니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 클라이언트 입력 결함
    ///
    /// 필수 필드 누락, 제약 조건 위반, 세터의 값 거부를 모두 포함합니다.
    /// 본문은 검증기가 만든 에러 목록 그대로 직렬화됩니다.
    #[error("Invalid request: {} error(s)", .0.len())]
    InvalidRequest(Vec<ValidationError>),

    /// 식별자로 조회한 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 계층 실패
    ///
    /// 트랜잭션은 이 에러가 만들어지기 전에 이미 롤백되어 있습니다.
    /// `code`는 발생 시점에 지정된 HTTP 상태 코드입니다.
    #[error("Database error ({code}): {message}")]
    DatabaseError { code: u16, message: String },

    /// 인증 실패 (잘못된 자격 증명)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 예상하지 못한 시스템 오류
    ///
    /// 메시지는 로그에만 남고 응답 본문에는 포함되지 않습니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 애플리케이션 공통 Result 타입
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 단일 필드 에러로 `InvalidRequest`를 생성합니다.
    pub fn invalid(error: ValidationError) -> Self {
        AppError::InvalidRequest(vec![error])
    }

    /// 엔티티 이름과 식별자로 404 에러를 생성합니다.
    ///
    /// ```rust,ignore
    /// let err = AppError::not_found::<JobOffer>(42);
    /// assert_eq!(err.to_string(), "Not found: JobOffer with id 42 not found");
    /// ```
    pub fn not_found<E: Entity>(id: i64) -> Self {
        AppError::NotFound(format!("{} with id {} not found", E::NAME, id))
    }

    /// 기본 코드 500의 데이터베이스 에러를 생성합니다.
    pub fn database(message: impl Into<String>) -> Self {
        AppError::DatabaseError {
            code: 500,
            message: message.into(),
        }
    }

    /// 유니크 필드 충돌을 나타내는 409 데이터베이스 에러를 생성합니다.
    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::DatabaseError {
            code: 409,
            message: message.into(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::database(error.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::invalid(ValidationError::request_body(format!(
            "The request body could not be parsed: {}",
            error
        )))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let list = fields
            .into_iter()
            .filter_map(|(field, field_errors)| {
                field_errors.first().map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    let passed = error.params.get("value").cloned().unwrap_or_default();
                    ValidationError::field(field.to_string(), message, passed)
                })
            })
            .collect();

        AppError::InvalidRequest(list)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError { code, .. } => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::InvalidRequest(errors) => HttpResponse::build(status).json(errors),
            AppError::NotFound(message)
            | AppError::AuthenticationError(message)
            | AppError::DatabaseError { message, .. } => {
                HttpResponse::build(status).json(json!({ "error": message }))
            }
            AppError::InternalError(detail) => {
                log::error!("❌ 처리되지 않은 내부 오류: {}", detail);
                generic_error_response()
            }
        }
    }
}

/// 임의의 에러를 응답으로 변환하는 테스트 도우미입니다.
///
/// 운영 경로의 변환은 `ResponseError` 구현이 담당합니다.
/// `AppError`가 아닌 에러는 내부 정보 없이 고정된 500 응답이 됩니다.
#[cfg(test)]
pub(crate) fn map_failure(error: &(dyn std::error::Error + 'static)) -> HttpResponse {
    match error.downcast_ref::<AppError>() {
        Some(app_error) => app_error.error_response(),
        None => {
            log::error!("❌ 분류되지 않은 오류: {}", error);
            generic_error_response()
        }
    }
}

fn generic_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": GENERIC_ERROR_MESSAGE }))
}

/// JSON 본문 파싱 실패를 400 응답으로 변환하는 extractor 에러 핸들러
pub fn json_error_handler(
    error: JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    log::debug!("요청 본문 파싱 실패: {}", error);
    AppError::from(error).into()
}

/// 경로 파라미터 파싱 실패(정수가 아닌 id)를 404 응답으로 변환합니다.
pub fn path_error_handler(error: PathError, req: &actix_web::HttpRequest) -> actix_web::Error {
    log::debug!("경로 파라미터 파싱 실패: {} ({})", error, req.path());
    AppError::NotFound(format!("No resource matches {}", req.path())).into()
}
