//! # Data Transfer Objects (DTO) Module
//!
//! 엔티티 파이프라인을 거치지 않는 엔드포인트의 요청/응답 구조체입니다.
//! 엔티티 CRUD 요청은 [`Payload`](crate::domain::validation::Payload)로 받아
//! 스키마 기반 검증기를 통과하고, 로그인처럼 고정된 형식의 요청만
//! `validator` derive 기반 DTO를 사용합니다.
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | [`auth`] | `LoginRequest`, `LoginResponse`, `TokenClaims` |
//! | [`upload`] | `UploadResponse` |

pub mod auth;
pub mod upload;

pub use auth::{LoginRequest, LoginResponse, TokenClaims};
pub use upload::UploadResponse;
