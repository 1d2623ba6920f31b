//! # HTTP Handlers
//!
//! 영화와 댓글 REST 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 경로/쿼리 파라미터를 검증한 뒤 서비스에 위임하고,
//! 결과를 JSON으로 직렬화합니다.
//!
//! ## 엔드포인트 (`/api/v1` 하위)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/movies/{movie_id}` | 영화 단건 조회 | 200 / 400 / 404 |
//! | `GET` | `/movies?title=&page=&limit=` | 영화 목록 조회 | 200 / 400 |
//! | `GET` | `/movies/{movie_id}/comments/{comment_id}` | 댓글 단건 조회 | 200 / 400 / 404 |
//! | `GET` | `/movies/{movie_id}/comments` | 영화별 댓글 목록 | 200 / 400 |
//! | `POST` | `/movies/{movie_id}/comments` | 댓글 생성 | 201 / 400 |
//! | `PUT` | `/movies/{movie_id}/comments/{comment_id}` | 댓글 수정 | 200 / 400 / 404 |
//! | `DELETE` | `/movies/{movie_id}/comments/{comment_id}` | 댓글 삭제 | 204 / 400 / 404 |
//!
//! ## 입력 검증 순서
//!
//! 식별자 검증은 서비스 호출 전에 수행되므로, 잘못된 ID는
//! 데이터베이스에 도달하지 않고 400으로 끝납니다.
//!
//! ```rust,ignore
//! #[get("/movies/{movie_id}")]
//! pub async fn get_movie(
//!     path: web::Path<String>,
//!     movie_service: web::Data<MovieService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let movie_id = parse_object_id(&path, "movie")?;
//!     let movie = movie_service.get_movie(movie_id).await?;
//!     Ok(HttpResponse::Ok().json(movie))
//! }
//! ```

pub mod comments;
pub mod movies;
