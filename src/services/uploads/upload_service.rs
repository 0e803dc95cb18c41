//! 파일 업로드 서비스
//!
//! 이력서와 회사 로고 파일을 업로드 디렉터리에 저장합니다.
//! 파일 이름은 클라이언트가 보낸 이름 대신 UUID로 새로 만들고,
//! 확장자는 `Content-Type`에서 결정합니다.

use std::path::PathBuf;

use actix_web::web;
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::UploadResponse;
use crate::domain::validation::ValidationError;

const FILE_FIELD: &str = "file";

/// 허용된 MIME 타입과 저장 확장자
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("application/pdf", "pdf"),
    ("application/msword", "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
];

#[derive(Clone)]
pub struct UploadService {
    directory: PathBuf,
    max_bytes: usize,
}

/// `Content-Type` 헤더 값에서 저장 확장자를 찾습니다. 파라미터(`; charset=...`)는 무시합니다.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or_default().trim().to_lowercase();
    ALLOWED_TYPES
        .iter()
        .find(|(allowed, _)| *allowed == mime)
        .map(|(_, extension)| *extension)
}

fn rejected(message: impl Into<String>, passed: serde_json::Value) -> AppError {
    AppError::invalid(ValidationError::field(FILE_FIELD, message, passed))
}

impl UploadService {
    pub fn new(directory: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            directory: directory.into(),
            max_bytes,
        }
    }

    pub fn from_config() -> Self {
        Self::new(UploadConfig::directory(), UploadConfig::max_bytes())
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// 업로드된 본문을 검사하고 디스크에 기록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 빈 본문, 허용되지 않은 타입, 크기 초과
    /// * `AppError::InternalError` - 디스크 쓰기 실패
    pub async fn store(&self, content_type: Option<&str>, bytes: web::Bytes) -> AppResult<UploadResponse> {
        let content_type = content_type.unwrap_or_default();
        let extension = extension_for(content_type).ok_or_else(|| {
            rejected(
                "File must be one of the following types: pdf, doc, docx, png, jpeg",
                json!(content_type),
            )
        })?;

        if bytes.is_empty() {
            return Err(rejected("File should not be blank", json!(0)));
        }
        if bytes.len() > self.max_bytes {
            return Err(rejected(
                format!("File cannot be larger than {} bytes", self.max_bytes),
                json!(bytes.len()),
            ));
        }

        let checksum = format!("{:x}", Sha256::digest(&bytes));
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let directory = self.directory.clone();
        let path = directory.join(&filename);
        let size = bytes.len();

        web::block(move || {
            std::fs::create_dir_all(&directory)?;
            std::fs::write(&path, &bytes)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("업로드 작업 실행 실패: {}", e)))?
        .map_err(|e| AppError::InternalError(format!("업로드 파일 저장 실패: {}", e)))?;

        log::info!("📎 파일 업로드 완료: {} ({} bytes)", filename, size);

        Ok(UploadResponse {
            filename,
            content_type: content_type.split(';').next().unwrap_or_default().trim().to_string(),
            size,
            checksum,
        })
    }
}
