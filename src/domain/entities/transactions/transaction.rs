//! Transaction Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::validation::{validate_decimal_amount, validate_object_id, validate_object_ids};

/// 거래 엔티티 (`transactions` 컬렉션)
///
/// `cost`는 원본 데이터와 동일하게 소수 문자열로 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,
    /// 구매자 ID
    #[validate(custom(function = "validate_object_id"))]
    pub user_id: String,
    #[validate(custom(function = "validate_decimal_amount"))]
    pub cost: String,
    /// 구매한 상품 ID 목록
    #[serde(default)]
    #[validate(custom(function = "validate_object_ids"))]
    pub products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
