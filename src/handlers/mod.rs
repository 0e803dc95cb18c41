//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 옮기는 얇은 계층입니다.
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러 응답 변환은 `AppError`의 `ResponseError` 구현이 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 → 빌드 → 저장 파이프라인          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Store - MongoDB / Memory                    ← Storage Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`entities`**: 일곱 가지 엔티티의 제네릭 CRUD 엔드포인트
//! - **`auth`**: 로컬 로그인
//! - **`uploads`**: 파일 업로드
//!
//! 서비스는 `web::Data`로 주입됩니다. 저장소 타입 `S`에 대해 제네릭이므로
//! `#[post]` 같은 속성 매크로 대신 `web::resource(...).route(...)`로 등록합니다.

pub mod auth;
pub mod entities;
pub mod uploads;
