//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 각 설정 구조체가 값을 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 업로드, Rate Limiting, 환경 관련 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 잘못된 값은 에러 로그를 남기고 기본값으로 대체
//! - 기본값은 개발 환경에서만 안전
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export DATABASE_BACKEND="mongodb"   # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="job_board"
//!
//! # 보안
//! export ENVIRONMENT="production"     # development, test, staging, production
//! export BCRYPT_COST="12"             # 4-15 범위
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 업로드
//! export UPLOAD_DIR="uploads"
//! export UPLOAD_MAX_BYTES="5242880"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
