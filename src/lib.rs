//! 대시보드 분석 백엔드
//!
//! 관리자 대시보드 프론트엔드가 사용하는 읽기 전용 REST API입니다.
//! MongoDB에 저장된 사용자, 상품, 거래, 판매 집계를 JSON으로 제공하며,
//! 시작 시 선택적으로 픽스처 데이터로 모든 컬렉션을 교체합니다.
//!
//! # Features
//!
//! - **조회 API**: `/client`, `/general`, `/management`, `/sales` 범위의 GET 엔드포인트
//! - **시드 로더**: 검증, bcrypt 해싱, 일관된 컬렉션 교체 (swap / transaction)
//! - **부트스트랩 상태 기계**: 연결 → (시드) → 리스닝
//! - **저장소 추상화**: MongoDB와 인메모리 구현을 같은 trait 뒤에 둠
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
//! │    Services     │ ← 조회 조합, 시드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← DashboardStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dashboard_backend::repositories::MongoDashboardRepository;
//! use dashboard_backend::services::DashboardService;
//!
//! let store = Arc::new(MongoDashboardRepository::new(database));
//! let service = DashboardService::new(store);
//! let admins = service.get_admins().await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
