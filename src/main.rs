//! 대시보드 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤, 필요하면 시드를 실행하고
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use dashboard_backend::bootstrap::Bootstrap;
use dashboard_backend::config::{AppConfig, RateLimitConfig, ServerConfig};
use dashboard_backend::repositories::{DashboardStore, MongoDashboardRepository};
use dashboard_backend::routes::configure_all_routes;
use dashboard_backend::services::DashboardService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 대시보드 백엔드 시작중...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    let mut bootstrap = Bootstrap::new(config);

    let database = match bootstrap.connect().await {
        Ok(database) => database,
        Err(_) => std::process::exit(1),
    };

    let store: Arc<dyn DashboardStore> = Arc::new(MongoDashboardRepository::new(database));

    // 리스너 바인딩 전에 시드를 끝낸다
    if let Err(e) = bootstrap.seed_if_enabled(store.clone()).await {
        error!("❌ 부트스트랩 오류: {}", e);
        std::process::exit(1);
    }

    let service = web::Data::new(DashboardService::new(store));

    start_http_server(&mut bootstrap, service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 보안 헤더, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
/// 포트 바인딩이 성공한 뒤에 부트스트랩을 `Listening`으로 전이합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    bootstrap: &mut Bootstrap,
    service: web::Data<DashboardService>,
) -> std::io::Result<()> {
    let server: ServerConfig = bootstrap.config().server.clone();
    let rate_limit: RateLimitConfig = bootstrap.config().rate_limit.clone();
    let bind_address = server.bind_address();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(security_headers())
            // 공통 로그 형식 접근 로그
            .wrap(middleware::Logger::new(r#"%a - - [%t] "%r" %s %b"#))
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .workers(server.workers)
        .bind(&bind_address)
        .inspect_err(|e| error!("❌ {} 바인딩 실패: {}", bind_address, e))?;

    if let Err(e) = bootstrap.mark_listening(&http_server.addrs()) {
        error!("❌ 부트스트랩 오류: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    info!("📍 Health check: http://{}/health", bind_address);

    http_server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 대시보드 API는 공개 읽기 전용이므로 모든 Origin의 GET 요청을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

/// 응답 보안 헤더
fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add(("Cross-Origin-Resource-Policy", "cross-origin"))
}
