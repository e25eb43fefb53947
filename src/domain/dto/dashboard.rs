//! 대시보드 조회 응답 DTO
//!
//! 여러 컬렉션을 조합하는 응답(상품+통계, 제휴 실적, 지역 분포)에 사용됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::{Product, ProductStat, Transaction};

/// 통계가 포함된 상품 (`GET /client/products`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithStats {
    #[serde(flatten)]
    pub product: Product,
    pub stat: Vec<ProductStat>,
}

/// 제휴 사용자 실적 (`GET /management/performance/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliatePerformance {
    pub user: UserResponse,
    pub sales: Vec<Transaction>,
}

/// 국가별 사용자 수 (`GET /client/geography`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographyEntry {
    /// 국가 코드
    pub id: String,
    pub value: u64,
}
