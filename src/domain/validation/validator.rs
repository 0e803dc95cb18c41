//! 요청 검증기
//!
//! 두 단계로 페이로드를 검사하고, 실패 시 하나의 `InvalidRequest` 에러를 만듭니다.
//!
//! 1. **필수 필드 존재 여부**: JSON 키의 부재만 누락으로 봅니다. 빈 문자열은
//!    "존재하지만 유효하지 않은 값"이므로 2단계에서 걸러집니다.
//! 2. **필드별 유효성**: 1단계를 통과한 경우에만 수행합니다. 페이로드에 있는 키 중
//!    세터가 있는 것만 검사하며, 모든 필드의 에러를 페이로드 순서대로 모읍니다.
//!
//! 검증은 페이로드나 엔티티를 변경하지 않습니다.

use super::schema::RuleProvider;
use super::{Payload, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;

/// 검증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// 필수 필드 검사 + 필드별 검사 (생성, PUT)
    Full,
    /// 필드별 검사만 수행 (PATCH)
    Partial,
}

pub struct RequestValidator;

impl RequestValidator {
    /// 엔티티 `E`의 규칙으로 페이로드 전체를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 필수 필드 누락 또는 필드 제약 위반
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let payload = payload_from_value(json!({"title": "az"}))?;
    /// let err = RequestValidator::validate::<JobOffer>(&payload).unwrap_err();
    /// ```
    pub fn validate<E: Entity>(payload: &Payload) -> AppResult<()> {
        Self::validate_with(E::schema(), payload, ValidationMode::Full)
    }

    /// 필수 필드 검사를 생략하고 전달된 필드만 검증합니다.
    pub fn validate_partial<E: Entity>(payload: &Payload) -> AppResult<()> {
        Self::validate_with(E::schema(), payload, ValidationMode::Partial)
    }

    pub fn validate_with(
        rules: &dyn RuleProvider,
        payload: &Payload,
        mode: ValidationMode,
    ) -> AppResult<()> {
        if mode == ValidationMode::Full {
            Self::check_required(rules, payload)?;
        }

        let errors: Vec<ValidationError> = payload
            .iter()
            .filter(|(key, _)| rules.is_settable(key))
            .filter_map(|(key, value)| rules.check_field(key, value))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("필드 검증 실패: {}건", errors.len());
            Err(AppError::InvalidRequest(errors))
        }
    }

    fn check_required(rules: &dyn RuleProvider, payload: &Payload) -> AppResult<()> {
        let required = rules.required_fields();
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|field| !payload.contains_key(*field))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        log::debug!("필수 필드 누락: {}", missing.join(", "));
        Err(AppError::invalid(ValidationError::missing_fields(required, &missing)))
    }
}
