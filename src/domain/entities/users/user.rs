//! User Entity Implementation
//!
//! 대시보드의 고객/관리자 계정을 표현하는 엔티티입니다.
//! `password` 필드는 저장소에는 기록되지만 어떤 응답에도 노출되지 않습니다.
//! 응답은 항상 [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 거칩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::validation::{validate_object_id, validate_object_ids};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// 저장소 필터에 사용하는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

/// 사용자 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// 자격 증명. 조회 시 프로젝션으로 제외되므로 `None`이 기본값입니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5))]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 2))]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// 이 사용자가 만든 거래 ID 목록
    #[serde(default)]
    #[validate(custom(function = "validate_object_ids"))]
    pub transactions: Vec<String>,
    pub role: Role,
}

impl User {
    /// 자격 증명을 제거한 사본을 반환합니다.
    pub fn without_password(self) -> Self {
        Self { password: None, ..self }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
