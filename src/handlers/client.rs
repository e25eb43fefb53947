//! 고객용 화면 핸들러 (`/client`)

use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;
use crate::services::DashboardService;

/// 통계가 포함된 상품 목록
#[get("/products")]
pub async fn get_products(
    service: web::Data<DashboardService>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// 일반 사용자(`role == "user"`) 목록
#[get("/customers")]
pub async fn get_customers(
    service: web::Data<DashboardService>,
) -> Result<HttpResponse, AppError> {
    let customers = service.get_customers().await?;
    Ok(HttpResponse::Ok().json(customers))
}

#[get("/transactions")]
pub async fn get_transactions(
    service: web::Data<DashboardService>,
) -> Result<HttpResponse, AppError> {
    let transactions = service.get_transactions().await?;
    Ok(HttpResponse::Ok().json(transactions))
}

/// 국가별 사용자 분포 (`[{ "id": "US", "value": 3 }]`)
///
/// `id`는 사용자에 저장된 ISO-3166 alpha-2 코드 그대로입니다. alpha-3 변환은
/// 하지 않으므로 alpha-3 키를 쓰는 지도 컴포넌트는 클라이언트에서 변환해야 합니다.
#[get("/geography")]
pub async fn get_geography(
    service: web::Data<DashboardService>,
) -> Result<HttpResponse, AppError> {
    let geography = service.get_geography().await?;
    Ok(HttpResponse::Ok().json(geography))
}
