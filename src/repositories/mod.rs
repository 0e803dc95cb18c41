//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티 타입마다 하나의 [`EntityRepository`]가 create/read/update/delete/list를 제공합니다.
//! 상태 변경은 모두 [`TransactionalExecutor`](crate::db::TransactionalExecutor)를 거치며,
//! 저장소 핸들은 전역 싱글톤이 아니라 생성자로 명시적으로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{EntityRepository, UserRepository};
//!
//! let executor = TransactionalExecutor::new(store.clone());
//! let offers = EntityRepository::<JobOffer, _>::new(executor.clone());
//! let users: UserRepository<_> = EntityRepository::new(executor);
//!
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod entity_repo;
pub mod users;

pub use entity_repo::EntityRepository;
pub use users::UserRepository;
