//! 엔티티 CRUD 서비스 모듈
//!
//! 검증 → 빌드 → 저장 파이프라인을 일곱 가지 엔티티에 공통으로 적용합니다.

pub mod entity_service;

pub use entity_service::EntityService;
