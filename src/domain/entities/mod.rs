//! # Domain Entities
//!
//! MongoDB 컬렉션과 1:1로 매핑되는 여섯 가지 레코드 타입을 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`User`] | `users` | 고객/관리자 계정 (자격 증명 포함) |
//! | [`Product`] | `products` | 상품 정보 |
//! | [`ProductStat`] | `productstats` | 상품별 판매 지표 |
//! | [`Transaction`] | `transactions` | 거래 내역 |
//! | [`OverallStat`] | `overallstats` | 전체 판매 집계 |
//! | [`AffiliateStat`] | `affiliatestats` | 제휴 실적 |
//!
//! ## 식별자
//!
//! 모든 엔티티는 `_id`에 24자리 16진수 문자열을 사용합니다. 픽스처 데이터의
//! 참조 관계(`productId`, `userId` 등)도 같은 형식이며, 참조 무결성은
//! 런타임에 검증하지 않고 픽스처 데이터가 보장합니다.
//!
//! ## 직렬화
//!
//! 필드 이름은 `camelCase`로 저장/응답됩니다.
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Transaction {
//!     #[serde(rename = "_id")]
//!     pub id: String,
//!     pub user_id: String,   // → "userId"
//! }
//! ```

pub mod users;
pub mod products;
pub mod transactions;
pub mod stats;
pub mod validation;

pub use users::{Role, User};
pub use products::{DailyData, MonthlyData, Product, ProductStat};
pub use transactions::Transaction;
pub use stats::{AffiliateStat, OverallStat};

/// 엔티티 종류별 컬렉션
///
/// [`CollectionKind::SEED_ORDER`]는 시드 로더가 삭제/삽입하는 고정 순서입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKind {
    Users,
    Products,
    ProductStats,
    Transactions,
    OverallStats,
    AffiliateStats,
}

impl CollectionKind {
    pub const SEED_ORDER: [CollectionKind; 6] = [
        CollectionKind::Users,
        CollectionKind::Products,
        CollectionKind::ProductStats,
        CollectionKind::Transactions,
        CollectionKind::OverallStats,
        CollectionKind::AffiliateStats,
    ];

    /// MongoDB 컬렉션 이름
    pub fn collection_name(&self) -> &'static str {
        match self {
            CollectionKind::Users => "users",
            CollectionKind::Products => "products",
            CollectionKind::ProductStats => "productstats",
            CollectionKind::Transactions => "transactions",
            CollectionKind::OverallStats => "overallstats",
            CollectionKind::AffiliateStats => "affiliatestats",
        }
    }

    /// 스테이징(섀도) 컬렉션 이름
    pub fn staging_name(&self) -> String {
        format!("{}__staging", self.collection_name())
    }

    /// 교체 중 운영 데이터를 잠시 보관하는 백업 컬렉션 이름
    pub fn backup_name(&self) -> String {
        format!("{}__previous", self.collection_name())
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection_name())
    }
}
