//! 영화 카탈로그 API 메인 애플리케이션
//!
//! 설정을 로드하고 MongoDB 연결을 확인한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::process::ExitCode;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use movies_api::config::{AppConfig, CONFIG_PATH_ENV, resolve_config_path};
use movies_api::db::Database;
use movies_api::repositories::{MongoCommentRepository, MongoMovieRepository};
use movies_api::routes::configure_all_routes;
use movies_api::services::{CommentService, MovieService};

type StartupResult<T> = Result<T, Box<dyn std::error::Error>>;

#[actix_web::main]
async fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 영화 카탈로그 API 시작중...");

    match run().await {
        Ok(()) => {
            info!("👋 서버가 정상적으로 종료되었습니다");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 서버 시작 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> StartupResult<()> {
    let config_path = resolve_config_path(std::env::args().skip(1), std::env::var(CONFIG_PATH_ENV).ok());
    info!("📄 설정 파일: {}", config_path);

    let config = AppConfig::load(&config_path)?;

    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::connect(&config.mongodb).await?);

    let comment_repo = MongoCommentRepository::new(database.clone());
    if let Err(e) = comment_repo.create_indexes().await {
        warn!("⚠️ 댓글 인덱스 생성 실패, 인덱스 없이 계속합니다: {}", e);
    }

    let movie_service = web::Data::new(MovieService::new(Arc::new(MongoMovieRepository::new(
        database.clone(),
    ))));
    let comment_service = web::Data::new(CommentService::new(Arc::new(comment_repo)));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let server_result = start_http_server(&config, movie_service, comment_service).await;

    database.shutdown().await;
    server_result?;

    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// SIGINT/SIGTERM을 받으면 진행 중인 요청을 마친 뒤 반환합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: &AppConfig,
    movie_service: web::Data<MovieService>,
    comment_service: web::Data<CommentService>,
) -> std::io::Result<()> {
    let bind_address = config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/movies", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(movie_service.clone())
            .app_data(comment_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(config.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로드된 값은 `MOVIES_API_` 접두사 환경 변수로 YAML 설정을 덮어씁니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 표준 에러로만 남깁니다
    if let Err(e) = result {
        eprintln!("env file not loaded (profile {}): {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=movies_api::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버에서의 접근을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
