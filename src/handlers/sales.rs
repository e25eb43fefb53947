//! 판매 집계 핸들러 (`/sales`)

use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;
use crate::services::DashboardService;

#[get("/sales")]
pub async fn get_sales(
    service: web::Data<DashboardService>,
) -> Result<HttpResponse, AppError> {
    let overall = service.get_sales().await?;
    Ok(HttpResponse::Ok().json(overall))
}
