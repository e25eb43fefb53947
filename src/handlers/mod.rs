//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 각 핸들러는 `web::Data<DashboardService>`를 주입받아 한 번의 조회를 수행하고
//! 결과를 JSON으로 응답합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Dashboard Client (React)
//! └─────────────────────┬───────────────────────┘
//!                       │ GET + JSON
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                  ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   DashboardService                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   DashboardStore (MongoDB / InMemory) ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`client`**: `/client/products`, `/client/customers`,
//!   `/client/transactions`, `/client/geography`
//! - **`general`**: `/general/user/{id}`
//! - **`management`**: `/management/admins`, `/management/performance/{id}`
//! - **`sales`**: `/sales/sales`
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고 `?`로 에러를
//! 전파합니다. 상태 코드와 `{ "message": ... }` 본문은
//! [`AppError`](crate::errors::AppError)의 `ResponseError` 구현이 결정합니다.
//!
//! ```rust,ignore
//! #[get("/admins")]
//! pub async fn get_admins(
//!     service: web::Data<DashboardService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let admins = service.get_admins().await?;
//!     Ok(HttpResponse::Ok().json(admins))
//! }
//! ```

pub mod client;
pub mod general;
pub mod management;
pub mod sales;
