//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 애플리케이션 시작 시 저장소 핸들로 만들어져
//! `web::Data`로 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 엔티티 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 이메일/비밀번호 로그인과 JWT 발급
//! - 파일 업로드 저장
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::entities::EntityService;
//!
//! let offers = EntityService::<JobOffer, _>::new(EntityRepository::new(executor));
//! let created = offers.create(&payload).await?;
//! ```

pub mod auth;
pub mod entities;
pub mod uploads;
