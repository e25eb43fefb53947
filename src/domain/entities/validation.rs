//! 엔티티 필드용 커스텀 검증 함수
//!
//! `validator`의 `#[validate(custom(function = "..."))]`에서 사용됩니다.

use std::borrow::Cow;
use validator::ValidationError;

/// 24자리 16진수 문자열인지 확인합니다 (MongoDB ObjectId 표기와 동일한 형식).
pub fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if is_object_id(value) {
        Ok(())
    } else {
        Err(ValidationError::new("object_id")
            .with_message(Cow::Owned(format!("유효하지 않은 ID 형식입니다: {}", value))))
    }
}

pub fn validate_object_ids(values: &[String]) -> Result<(), ValidationError> {
    values.iter().try_for_each(|v| validate_object_id(v))
}

/// 금액 문자열이 0 이상의 소수인지 확인합니다.
pub fn validate_decimal_amount(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("decimal_amount")
            .with_message(Cow::Owned(format!("유효하지 않은 금액입니다: {}", value)))),
    }
}
