//! Overall Statistics Entity
//!
//! 시스템 전체의 연도별 판매 집계입니다. 카테고리별 매출은
//! 키 순서가 고정되도록 `BTreeMap`으로 보관합니다.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::products::{DailyData, MonthlyData};
use crate::domain::entities::validation::validate_object_id;

/// 전체 통계 엔티티 (`overallstats` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OverallStat {
    #[serde(rename = "_id")]
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,
    pub total_customers: u32,
    #[validate(range(min = 0.0))]
    pub yearly_sales_total: f64,
    pub yearly_total_sold_units: u32,
    pub year: u32,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyData>,
    #[serde(default)]
    pub daily_data: Vec<DailyData>,
    #[serde(default)]
    pub sales_by_category: BTreeMap<String, f64>,
}
