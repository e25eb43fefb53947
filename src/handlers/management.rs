//! 관리자 화면 핸들러 (`/management`)

use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;
use crate::services::DashboardService;

/// 관리자 목록
///
/// `role == "admin"` 인 사용자를 자격 증명 없이 반환합니다.
///
/// ```bash
/// curl http://localhost:9000/management/admins
/// ```
#[get("/admins")]
pub async fn get_admins(
    service: web::Data<DashboardService>,
) -> Result<HttpResponse, AppError> {
    let admins = service.get_admins().await?;
    Ok(HttpResponse::Ok().json(admins))
}

/// 제휴 사용자 실적
///
/// 사용자 정보와 `affiliateSales`에 포함된 거래 목록을 반환합니다.
#[get("/performance/{id}")]
pub async fn get_user_performance(
    service: web::Data<DashboardService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let performance = service.get_performance(&id).await?;
    Ok(HttpResponse::Ok().json(performance))
}
