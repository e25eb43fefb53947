//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ID 형식 등 입력값 오류 |
//! | `NotFound` | 404 Not Found | 단건 조회 대상 없음 |
//! | `StoreUnavailable` | 503 Service Unavailable | MongoDB 서버 선택 실패, 네트워크 오류 |
//! | `DatabaseError` | 500 Internal Server Error | 그 외 드라이버 오류 |
//! | `PartialReplace` | 500 Internal Server Error | 시드 교체 롤백 실패 |
//! | `ConfigurationError` | 500 Internal Server Error | 설정 누락/오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 조회 실패를 모두 404로 돌려주지 않습니다. "없음"과 "저장소 장애"는
//! 서로 다른 상태 코드로 구분됩니다.
//!
//! 모든 에러 응답 본문은 `{ "message": "..." }` 형식입니다.

use actix_web::http::StatusCode;
use mongodb::error::ErrorKind;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 저장소 연결 불가 (503 Service Unavailable)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 컬렉션 교체가 중간에 실패했고 롤백도 완료되지 못함 (500 Internal Server Error)
    ///
    /// 일부 컬렉션은 새 데이터, 나머지는 이전 데이터를 담고 있을 수 있습니다.
    #[error("Partial replace: {0}")]
    PartialReplace(String),

    /// 설정 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<mongodb::error::Error> for AppError {
    /// 드라이버 에러를 종류별로 분류합니다.
    ///
    /// 서버 선택 실패, IO 에러, 커넥션 풀 초기화는 저장소 장애로,
    /// 나머지는 일반 데이터베이스 에러로 변환됩니다.
    fn from(e: mongodb::error::Error) -> Self {
        match e.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => AppError::StoreUnavailable(e.to_string()),
            _ => AppError::DatabaseError(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// 시드 로더 에러
///
/// 시드 실패는 호출자에게 HTTP로 전달되지 않고 부트스트랩 단계에서 로그로만 남습니다.
#[derive(Error, Debug)]
pub enum SeedError {
    /// 픽스처 파일을 읽거나 파싱할 수 없음
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// 픽스처 레코드 검증 실패 (삭제 전에 중단됨)
    #[error("Fixture validation failed: {0}")]
    Validation(String),

    /// 자격 증명 해싱 실패
    #[error("Credential hashing failed: {0}")]
    Hashing(String),

    /// 저장소 작업 실패
    #[error(transparent)]
    Store(#[from] AppError),
}

impl SeedError {
    /// 실패 후에도 운영 컬렉션이 시드 이전 상태 그대로인지 여부
    pub fn live_data_intact(&self) -> bool {
        !matches!(self, SeedError::Store(AppError::PartialReplace(_)))
    }
}
