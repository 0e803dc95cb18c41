//! # Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/auth/login` | 이메일/비밀번호 로그인 | 200 OK / 401 |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/auth/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"jane@example.com","password":"correct-horse"}'
//! ```

use actix_web::{web, HttpResponse};

use crate::core::errors::AppError;
use crate::db::Store;
use crate::domain::dto::LoginRequest;
use crate::services::auth::AuthService;

/// 로컬 로그인 핸들러
///
/// 성공 시 `{accessToken, tokenType, expiresIn, user}`를 반환합니다.
pub async fn local_login<S: Store>(
    auth: web::Data<AuthService<S>>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = auth.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
