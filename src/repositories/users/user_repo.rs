//! # 사용자 리포지토리 확장
//!
//! 로그인 흐름이 사용하는 이메일 조회를 제네릭 리포지토리에 더합니다.

use serde_json::Value;

use crate::core::errors::AppResult;
use crate::db::Store;
use crate::domain::entities::User;
use crate::repositories::EntityRepository;

/// 사용자 데이터 액세스 리포지토리
pub type UserRepository<S> = EntityRepository<User, S>;

impl<S: Store> EntityRepository<User, S> {
    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 세터에서 소문자로 정규화되어 저장되므로 조회 전에 같은 정규화를 적용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 저장소 오류
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let normalized = Value::String(email.trim().to_lowercase());
        self.find_by("email", &normalized).await
    }
}
