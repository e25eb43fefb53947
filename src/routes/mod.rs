//! API 라우트 설정 모듈
//!
//! 대시보드 화면 단위로 엔드포인트를 그룹화합니다.
//!
//! | Scope | Routes |
//! |-------|--------|
//! | `/client` | `products`, `customers`, `transactions`, `geography` |
//! | `/general` | `user/{id}` |
//! | `/management` | `admins`, `performance/{id}` |
//! | `/sales` | `sales` |
//! | (root) | `health` |
//!
//! 모든 라우트는 `GET`이며 인증 없이 접근할 수 있습니다. 핸들러는
//! `web::Data<DashboardService>`가 앱 데이터로 등록되어 있어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(dashboard_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_client_routes(cfg);
    configure_general_routes(cfg);
    configure_management_routes(cfg);
    configure_sales_routes(cfg);
}

/// 고객용 화면 라우트
///
/// ```bash
/// curl http://localhost:9000/client/products
/// curl http://localhost:9000/client/geography
/// ```
fn configure_client_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/client")
            .service(handlers::client::get_products)
            .service(handlers::client::get_customers)
            .service(handlers::client::get_transactions)
            .service(handlers::client::get_geography)
    );
}

fn configure_general_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/general")
            .service(handlers::general::get_user)
    );
}

/// 관리자 화면 라우트
///
/// ```bash
/// curl http://localhost:9000/management/admins
/// curl http://localhost:9000/management/performance/63701cc1f03239c72c000181
/// ```
fn configure_management_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/management")
            .service(handlers::management::get_admins)
            .service(handlers::management::get_user_performance)
    );
}

fn configure_sales_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .service(handlers::sales::get_sales)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소 상태는 확인하지 않으며 프로세스가 요청을 받을 수 있는지만 알려줍니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "dashboard_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "dashboard_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::Value;
    use super::*;
    use crate::domain::entities::{Role, User};
    use crate::fixtures::FixtureSet;
    use crate::repositories::InMemoryDashboardRepository;
    use crate::services::DashboardService;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: format!("user {}", id),
            email: format!("{}@example.com", id),
            password: Some("plain-secret".to_string()),
            city: None,
            state: None,
            country: Some("KR".to_string()),
            occupation: None,
            phone_number: None,
            transactions: vec![],
            role,
        }
    }

    fn service_for(store: Arc<InMemoryDashboardRepository>) -> web::Data<DashboardService> {
        web::Data::new(DashboardService::new(store))
    }

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(service_for($store))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_admins_excludes_non_admins_and_password() {
        let data = FixtureSet {
            users: vec![
                user("000000000000000000000001", Role::Admin),
                user("000000000000000000000002", Role::User),
                user("000000000000000000000003", Role::Admin),
                user("000000000000000000000004", Role::User),
                user("000000000000000000000005", Role::Superadmin),
            ],
            ..FixtureSet::default()
        };
        let app = app!(Arc::new(InMemoryDashboardRepository::with_data(data)));

        let req = test::TestRequest::get().uri("/management/admins").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 2);
        for admin in &body {
            assert_eq!(admin["role"], "admin");
            assert!(admin.get("password").is_none());
        }
    }

    #[actix_web::test]
    async fn test_empty_collection_returns_empty_array() {
        let app = app!(Arc::new(InMemoryDashboardRepository::new()));

        for uri in ["/management/admins", "/client/products", "/client/customers", "/client/transactions", "/client/geography"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);

            let body: Vec<Value> = test::read_body_json(resp).await;
            assert!(body.is_empty(), "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_store_failure_is_service_unavailable() {
        let store = Arc::new(InMemoryDashboardRepository::new());
        store.set_unavailable(true);
        let app = app!(store);

        let req = test::TestRequest::get().uri("/management/admins").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        let message = body["message"].as_str().unwrap();
        assert!(!message.is_empty());
    }

    #[actix_web::test]
    async fn test_user_lookup_status_codes() {
        let app = app!(Arc::new(InMemoryDashboardRepository::with_data(FixtureSet::embedded().unwrap())));

        let req = test::TestRequest::get().uri("/general/user/not-an-id").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/general/user/000000000000000000000000").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/general/user/63701cc1f03239c72c00017f").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["_id"], "63701cc1f03239c72c00017f");
        assert!(body.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_no_user_endpoint_leaks_password() {
        let app = app!(Arc::new(InMemoryDashboardRepository::with_data(FixtureSet::embedded().unwrap())));

        for uri in ["/management/admins", "/client/customers"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
            assert!(!body.is_empty());
            assert!(body.iter().all(|u| u.get("password").is_none()), "{}", uri);
        }

        let req = test::TestRequest::get()
            .uri("/management/performance/63701cc1f03239c72c000181")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["user"].get("password").is_none());
        assert_eq!(body["sales"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_sales_returns_overall_stat() {
        let app = app!(Arc::new(InMemoryDashboardRepository::with_data(FixtureSet::embedded().unwrap())));

        let req = test::TestRequest::get().uri("/sales/sales").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["_id"], "636ffd4fc7195768677097d7");
        assert!(body["salesByCategory"].is_object());
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "dashboard_backend");
    }
}
