//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 [`DashboardStore`](crate::repositories::DashboardStore) trait 객체를
//! 보유하며, 애플리케이션 시작 시 한 번 생성되어 `web::Data`로 공유됩니다.
//!
//! - [`SeedService`] - 픽스처 검증, 자격 증명 해싱, 컬렉션 교체
//! - [`DashboardService`] - 대시보드 조회와 응답 조합
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dashboard_backend::services::{DashboardService, SeedService};
//!
//! let dashboard = DashboardService::new(store.clone());
//! let admins = dashboard.get_admins().await?;
//! ```

pub mod seed_service;
pub mod dashboard_service;

pub use seed_service::{SeedReport, SeedService};
pub use dashboard_service::DashboardService;
