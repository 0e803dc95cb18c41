//! # Authentication Configuration Module
//!
//! 로그인 엔드포인트가 발급하는 JWT 토큰 설정입니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! ```

use std::env;

/// JWT 토큰 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명(HS256)에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본 키를 사용하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "job-board-dev-secret".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 24시간. 1 미만이거나 숫자가 아닌 값은 기본값으로 대체됩니다.
    pub fn expiration_hours() -> i64 {
        Self::parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok().as_deref())
    }

    fn parse_expiration_hours(raw: Option<&str>) -> i64 {
        match raw.map(str::parse::<i64>) {
            Some(Ok(hours)) if hours >= 1 => hours,
            Some(_) => {
                log::error!("JWT_EXPIRATION_HOURS 파싱 실패. 기본값 24 사용");
                24
            }
            None => 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_parsing() {
        assert_eq!(JwtConfig::parse_expiration_hours(None), 24);
        assert_eq!(JwtConfig::parse_expiration_hours(Some("2")), 2);
        assert_eq!(JwtConfig::parse_expiration_hours(Some("0")), 24);
        assert_eq!(JwtConfig::parse_expiration_hours(Some("soon")), 24);
    }
}
