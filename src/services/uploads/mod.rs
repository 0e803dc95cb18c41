//! 파일 업로드 서비스 모듈

pub mod upload_service;

pub use upload_service::*;
