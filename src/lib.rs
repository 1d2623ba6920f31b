//! 영화 카탈로그 REST API
//!
//! MongoDB 샘플 데이터셋(`sample_mflix`)을 기반으로 영화 조회와
//! 영화별 댓글 CRUD를 제공하는 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **영화 조회**: 단건 조회, 제목 부분 일치 검색, 페이지네이션
//! - **댓글 관리**: 영화별 댓글 생성/조회/수정/삭제
//! - **입력 검증**: ObjectId와 페이지 파라미터는 데이터베이스 호출 전에 검증
//! - **MongoDB**: 공식 드라이버의 커넥션 풀 사용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 파라미터 검증, 응답 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 결과 없음 → NotFound 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 쿼리 한 번 (삭제 시 카운터 감소 추가)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← movies, comments 컬렉션
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use movies_api::repositories::MongoMovieRepository;
//! use movies_api::services::MovieService;
//!
//! let movie_service = MovieService::new(Arc::new(MongoMovieRepository::new(database)));
//! let app = App::new()
//!     .app_data(web::Data::new(movie_service))
//!     .configure(movies_api::routes::configure_all_routes);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
