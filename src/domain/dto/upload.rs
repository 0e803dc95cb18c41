//! 파일 업로드 응답 DTO

use serde::Serialize;

/// 저장된 업로드 파일 정보
///
/// `filename`은 이력서 엔티티의 `filename` 필드에 그대로 사용할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub filename: String,
    pub content_type: String,
    pub size: usize,
    /// SHA-256 hex digest
    pub checksum: String,
}
