//! Product Entity

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::validation::validate_object_id;

/// 상품 엔티티 (`products` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub supply: u32,
}
