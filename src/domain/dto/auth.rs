//! 인증 요청/응답 DTO
//!
//! 로그인 엔드포인트의 요청 본문과 발급된 토큰 응답을 정의합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password should not be blank"))]
    pub password: String,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 ID
/// - `email`, `role`: 클라이언트 편의용 사용자 정보
/// - `iat`, `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// 로그인 성공 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
    pub user: Value,
}
