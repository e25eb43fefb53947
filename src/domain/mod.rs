//! # Domain Layer
//!
//! 대시보드 백엔드의 도메인 타입을 정의합니다.
//!
//! - [`entities`] - 저장소와 매핑되는 여섯 가지 레코드 타입
//! - [`dto`] - HTTP 응답 형태

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
