//! Users Entity Module
//!
//! 사용자 도메인 엔티티와 역할 정의를 제공합니다.

pub mod user;

pub use user::{Role, User};
