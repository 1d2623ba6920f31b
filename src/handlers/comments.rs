//! 댓글 CRUD 핸들러
//!
//! 모든 댓글 경로는 `movie_id`를 먼저, `comment_id`를 다음으로 검증합니다.
//! 요청 본문은 `name`, `email`, `text`만 사용하며 나머지 필드는 무시합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::comments::CommentRequest;
use crate::services::CommentService;
use crate::utils::object_id::parse_object_id;

fn parse_comment_path(path: &(String, String)) -> AppResult<(ObjectId, ObjectId)> {
    let movie_id = parse_object_id(&path.0, "movie")?;
    let comment_id = parse_object_id(&path.1, "comment")?;

    Ok((movie_id, comment_id))
}

fn validated(payload: web::Json<CommentRequest>) -> AppResult<CommentRequest> {
    let request = payload.into_inner();
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(request)
}

#[get("/movies/{movie_id}/comments/{comment_id}")]
pub async fn get_movie_comment(
    path: web::Path<(String, String)>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (movie_id, comment_id) = parse_comment_path(&path)?;
    let comment = comment_service
        .get_movie_comment(movie_id, comment_id)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[get("/movies/{movie_id}/comments")]
pub async fn get_movie_comments(
    path: web::Path<String>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let movie_id = parse_object_id(&path, "movie")?;
    let comments = comment_service.get_movie_comments(movie_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// 댓글 생성
///
/// 영화 존재 여부는 확인하지 않으며, 작성 시각은 서버가 기록합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/movies/573a1390f29313caabcd4135/comments \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john@example.com","text":"Great movie!"}'
/// ```
#[post("/movies/{movie_id}/comments")]
pub async fn create_comment(
    path: web::Path<String>,
    payload: web::Json<CommentRequest>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let movie_id = parse_object_id(&path, "movie")?;
    let request = validated(payload)?;
    let comment = comment_service.create_comment(movie_id, request).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// 댓글 수정
///
/// (영화 ID, 댓글 ID)가 함께 일치하지 않으면 아무것도 변경하지 않고 404를 반환합니다.
#[put("/movies/{movie_id}/comments/{comment_id}")]
pub async fn update_comment(
    path: web::Path<(String, String)>,
    payload: web::Json<CommentRequest>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (movie_id, comment_id) = parse_comment_path(&path)?;
    let request = validated(payload)?;
    let comment = comment_service
        .update_comment(movie_id, comment_id, request)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// 댓글 삭제
///
/// 성공 시 본문 없이 204를 반환하고, 영화의 `num_mflix_comments`가 1 감소합니다.
#[delete("/movies/{movie_id}/comments/{comment_id}")]
pub async fn delete_comment(
    path: web::Path<(String, String)>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (movie_id, comment_id) = parse_comment_path(&path)?;
    comment_service.delete_comment(movie_id, comment_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
