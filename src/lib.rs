//! 잡보드 백엔드
//!
//! 구직자, 회사, 채용 공고, 지원서를 다루는 REST API입니다.
//! 모든 쓰기 요청은 엔티티 스키마 기반의 검증 → 빌드 → 트랜잭션 저장 파이프라인을 거칩니다.
//!
//! # Features
//!
//! - **스키마 기반 검증**: 엔티티별 정적 규칙 테이블 (필수 필드, 타입, 길이, 패턴, 범위, 선택지)
//! - **세터 테이블 빌더**: 페이로드 키를 엔티티 필드로 병합, 알 수 없는 키는 무시
//! - **트랜잭션 실행기**: 작업 단위별 begin/commit/rollback
//! - **단일 에러 매핑**: `AppError` → HTTP 응답
//! - **저장소**: MongoDB (세션 트랜잭션) 또는 인메모리
//! - **JWT 로그인**, **파일 업로드**
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 → 빌드 → 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← TransactionalExecutor
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← Store
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use job_board_backend::db::MemoryStore;
//! use job_board_backend::routes::configure_all_routes;
//!
//! let store = Arc::new(MemoryStore::new());
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, store));
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
