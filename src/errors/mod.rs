//! 에러 타입 모듈
//!
//! HTTP 계층으로 전달되는 [`AppError`]와 시드 로더 전용 [`SeedError`]를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, SeedError};
