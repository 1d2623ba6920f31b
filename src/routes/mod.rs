//! API 라우트 설정 모듈
//!
//! 영화/댓글 REST 엔드포인트를 `/api/v1` 하위에 등록하고,
//! 헬스체크 엔드포인트와 추출기(JSON/쿼리) 에러 처리기를 설정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(movie_service))
//!     .app_data(web::Data::new(comment_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 서비스(`web::Data<MovieService>`, `web::Data<CommentService>`)는
/// 호출 측에서 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(configure_movie_routes)
            .configure(configure_comment_routes),
    );
}

/// 본문/쿼리 바인딩 실패를 `{"error": ...}` 형식의 400으로 통일합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
}

/// 영화 라우트
///
/// - `GET /api/v1/movies/{movie_id}`
/// - `GET /api/v1/movies?title=&page=&limit=`
fn configure_movie_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::movies::get_movies)
        .service(handlers::movies::get_movie);
}

/// 댓글 라우트
///
/// ```bash
/// # 영화별 댓글 목록
/// curl http://localhost:8080/api/v1/movies/573a1390f29313caabcd4135/comments
///
/// # 댓글 삭제
/// curl -X DELETE http://localhost:8080/api/v1/movies/573a1390f29313caabcd4135/comments/5a9427648b0beebeb69579cc
/// ```
fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::comments::get_movie_comments)
        .service(handlers::comments::get_movie_comment)
        .service(handlers::comments::create_comment)
        .service(handlers::comments::update_comment)
        .service(handlers::comments::delete_comment);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스에 접근하지 않으며 프로세스가 요청을 처리할 수 있는지만 알립니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "movies_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
