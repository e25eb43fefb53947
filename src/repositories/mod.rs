//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`DashboardStore`] trait 뒤에 두 가지 구현을 제공합니다.
//!
//! - [`MongoDashboardRepository`]: 운영용 MongoDB 저장소
//! - [`InMemoryDashboardRepository`]: 테스트용 인메모리 저장소
//!
//! `SeedStrategy::Swap` 교체 순서는 [`swap`] 모듈이 두 구현에 공통으로 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dashboard_backend::repositories::{DashboardStore, MongoDashboardRepository};
//!
//! let store: Arc<dyn DashboardStore> = Arc::new(MongoDashboardRepository::new(db));
//! let admins = store.find_users_by_role(Role::Admin).await?;
//! ```

pub mod store;
pub mod mongo_repo;
pub mod memory_repo;
pub mod swap;

pub use store::DashboardStore;
pub use mongo_repo::MongoDashboardRepository;
pub use memory_repo::InMemoryDashboardRepository;
pub use swap::{swap_all, SwapSteps};
