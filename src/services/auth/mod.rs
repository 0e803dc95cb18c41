//! 인증 서비스 모듈
//!
//! 로컬 이메일/비밀번호 로그인과 JWT 액세스 토큰 발급을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 검증
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let auth = AuthService::new(users, TokenService::from_config());
//! let response = auth.login(request).await?;
//! ```

pub mod auth_service;
pub mod token_service;

pub use auth_service::*;
pub use token_service::*;
