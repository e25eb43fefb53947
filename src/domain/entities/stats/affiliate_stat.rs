//! Affiliate Statistics Entity

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::validation::{validate_object_id, validate_object_ids};

/// 제휴 실적 엔티티 (`affiliatestats` 컬렉션)
///
/// `user_id`는 제휴 사용자, `affiliate_sales`는 그 사용자를 통해 발생한 거래 ID 목록입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateStat {
    #[serde(rename = "_id")]
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,
    #[validate(custom(function = "validate_object_id"))]
    pub user_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_object_ids"))]
    pub affiliate_sales: Vec<String>,
}
