//! Product Statistics Entity
//!
//! 상품별 연간/월간/일간 판매 지표입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::validation::validate_object_id;

/// 월별 판매 집계
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    pub month: String,
    pub total_sales: f64,
    pub total_units: u32,
}

/// 일별 판매 집계 (`date`는 `YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    pub date: String,
    pub total_sales: f64,
    pub total_units: u32,
}

/// 상품 통계 엔티티 (`productstats` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductStat {
    #[serde(rename = "_id")]
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,
    /// 참조하는 상품 ID
    #[validate(custom(function = "validate_object_id"))]
    pub product_id: String,
    #[validate(range(min = 0.0))]
    pub yearly_sales_total: f64,
    pub yearly_total_sold_units: u32,
    pub year: u32,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyData>,
    #[serde(default)]
    pub daily_data: Vec<DailyData>,
}
