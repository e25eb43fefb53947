//! # Data Transfer Objects
//!
//! HTTP 응답으로 나가는 형태를 정의합니다. 엔티티를 그대로 응답하지 않아야 하는
//! 경우(사용자 자격 증명)와 여러 컬렉션을 조합하는 경우에만 DTO를 둡니다.

pub mod users;
pub mod dashboard;

pub use users::UserResponse;
pub use dashboard::{AffiliatePerformance, GeographyEntry, ProductWithStats};
