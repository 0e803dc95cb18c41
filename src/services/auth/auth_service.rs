//! 로그인 서비스
//!
//! 이메일/비밀번호 자격 증명을 저장된 사용자와 대조하고 액세스 토큰을 발급합니다.

use validator::Validate;

use super::TokenService;
use crate::core::errors::{AppError, AppResult};
use crate::db::Store;
use crate::domain::dto::{LoginRequest, LoginResponse};
use crate::domain::entities::Entity;
use crate::repositories::UserRepository;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService<S: Store> {
    users: UserRepository<S>,
    tokens: TokenService,
}

impl<S: Store> Clone for AuthService<S> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<S: Store> AuthService<S> {
    pub fn new(users: UserRepository<S>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// 자격 증명을 확인하고 토큰을 발급합니다.
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 응답합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 요청 형식 오류
    /// * `AppError::AuthenticationError` - 자격 증명 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = match self.users.find_by_email(&request.email).await? {
            Some(user) if user.verify_password(&request.password) => user,
            _ => {
                log::warn!("🔒 로그인 실패: {}", request.email);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        let access_token = self.tokens.generate_access_token(&user)?;
        let body = user
            .to_response()
            .map_err(|e| AppError::InternalError(format!("사용자 직렬화 실패: {}", e)))?;

        log::info!("🔑 로그인 성공: user id {:?}", user.id());

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer",
            expires_in: self.tokens.expires_in(),
            user: body,
        })
    }
}
