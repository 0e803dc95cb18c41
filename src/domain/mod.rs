//! # Domain Layer Module
//!
//! 잡보드의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities    - 일곱 가지 엔티티와 정적 스키마 테이블
//! ├── Validation  - 규칙 제공자, 요청 검증기, 엔티티 빌더
//! └── DTOs        - 로그인/업로드 요청·응답
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Store)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 각 엔티티는 필드 이름 → (제약 목록, 세터) 테이블을 정적으로 한 번 만들고,
//! 검증과 병합 모두 이 테이블만 참조합니다. 런타임 리플렉션은 없습니다.
//!
//! ### [`validation`] - 검증 파이프라인
//!
//! 필수 필드 검사 → 필드별 검사 → 세터 병합 순서로 동작하며,
//! 실패는 모두 `AppError::InvalidRequest`로 전파됩니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 스키마 파이프라인 밖의 고정 형식 요청/응답입니다.

pub mod dto;
pub mod entities;
pub mod validation;

pub use dto::*;
pub use entities::*;
