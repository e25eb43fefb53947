use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Role, User};

/// 사용자 응답 DTO
///
/// 자격 증명 필드가 아예 존재하지 않는 타입입니다. 저장소가 프로젝션을
/// 빠뜨리더라도 `From<User>` 변환에서 `password`가 버려집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub occupation: Option<String>,
    pub phone_number: Option<String>,
    pub transactions: Vec<String>,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            city,
            state,
            country,
            occupation,
            phone_number,
            transactions,
            role,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            city,
            state,
            country,
            occupation,
            phone_number,
            transactions,
            role,
        }
    }
}
