//! # Core Module
//!
//! 요청 파이프라인 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증, 조회 실패, 저장소 실패를 표현하는 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 응답 변환을 한 곳에서 수행
//! - **GENERIC_ERROR_MESSAGE**: 분류되지 않은 실패에 대한 고정 응답 문구
//!
//! ## 에러 흐름
//!
//! ```text
//! Validator ─┐
//! Builder ───┼──▶ AppError ──▶ ResponseError::error_response() ──▶ HTTP 응답
//! Executor ──┘
//! ```

pub mod errors;
