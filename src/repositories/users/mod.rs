//! 사용자 엔티티 전용 리포지토리 확장
//!
//! [`UserRepository`](user_repo::UserRepository)는 제네릭 [`EntityRepository`](crate::repositories::EntityRepository)의
//! 별칭이며 이메일 조회를 추가로 제공합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
