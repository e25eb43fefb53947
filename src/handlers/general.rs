//! 공통 핸들러 (`/general`)

use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;
use crate::services::DashboardService;

/// ID로 사용자 조회
///
/// # Errors
///
/// * `400` - ID 형식 오류
/// * `404` - 사용자 없음
#[get("/user/{id}")]
pub async fn get_user(
    service: web::Data<DashboardService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}
