//! 영화 조회 핸들러

use actix_web::{HttpResponse, get, web};

use crate::core::errors::AppError;
use crate::domain::dto::movies::MovieListQuery;
use crate::services::MovieService;
use crate::utils::object_id::parse_object_id;

/// 영화 단건 조회
///
/// # Errors
///
/// * `400` - `movie_id`가 24자리 16진수 ObjectId가 아닌 경우
/// * `404` - 영화가 없는 경우
#[get("/movies/{movie_id}")]
pub async fn get_movie(
    path: web::Path<String>,
    movie_service: web::Data<MovieService>,
) -> Result<HttpResponse, AppError> {
    let movie_id = parse_object_id(&path, "movie")?;
    let movie = movie_service.get_movie(movie_id).await?;

    Ok(HttpResponse::Ok().json(movie))
}

/// 영화 목록 조회
///
/// 제목은 대소문자를 무시하는 부분 일치이며, 결과는 항상 JSON 배열입니다.
///
/// ```bash
/// curl "http://localhost:8080/api/v1/movies?title=matrix&page=2&limit=5"
/// ```
#[get("/movies")]
pub async fn get_movies(
    query: web::Query<MovieListQuery>,
    movie_service: web::Data<MovieService>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.pagination()?;
    let movies = movie_service
        .get_movies(query.title_filter(), pagination)
        .await?;

    Ok(HttpResponse::Ok().json(movies))
}
