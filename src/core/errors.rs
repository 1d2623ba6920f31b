//! # Application Error Handling
//!
//! API 전역에서 사용하는 에러 타입과 HTTP 응답 매핑을 정의합니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `actix_web::ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ObjectId, 페이지 파라미터, 요청 본문 |
//! | `NotFound` | 404 Not Found | 조회 결과 없음, 복합 키 불일치 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "invalid movie ID format" }
//! ```
//!
//! 5xx 응답에는 내부 정보를 노출하지 않고, 상세 원인은 서버 로그에만 기록합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 5xx 응답 본문에 사용하는 고정 메시지
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 입력 오류, 리소스 없음, 저장소 오류를 구분하여
/// 핸들러가 400/404/500을 정확히 반환할 수 있도록 합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// collection.find_one(doc! { "_id": id }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 실패, 타임아웃, 디코딩 실패 등 MongoDB 드라이버가 돌려준
    /// 모든 오류를 포함합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 데이터베이스 호출 전에 발생하며 재시도 대상이 아닙니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원본 메시지를 그대로, 5xx 에러는 고정 메시지를 사용합니다.
    pub fn client_message(&self) -> &str {
        match self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) => msg,
            AppError::DatabaseError(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.client_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
