//! # File Upload HTTP Handlers
//!
//! 요청 본문 전체를 하나의 파일로 받습니다. 파일 형식은 `Content-Type` 헤더로 판단합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/uploads \
//!   -H "Content-Type: application/pdf" \
//!   --data-binary @resume.pdf
//! ```

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::services::uploads::UploadService;

pub async fn upload_file(
    uploads: web::Data<UploadService>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let stored = uploads.store(content_type, body).await?;
    Ok(HttpResponse::Created().json(stored))
}
