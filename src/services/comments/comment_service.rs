//! # 댓글 관리 서비스 구현
//!
//! 댓글 리포지토리로 요청을 위임합니다.
//! 복합 키 불일치(수정/삭제)는 `comment not found for movie`,
//! 단건 조회 실패는 `comment not found`로 구분됩니다.

use std::sync::Arc;

use log::info;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::comments::CommentRequest;
use crate::domain::entities::Comment;
use crate::repositories::comments::CommentRepository;

/// 복합 키와 일치하는 댓글이 없을 때의 메시지
pub const COMMENT_NOT_FOUND_FOR_MOVIE: &str = "comment not found for movie";

/// 댓글 관리 서비스
pub struct CommentService {
    /// 댓글 데이터 액세스 리포지토리
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// 댓글을 생성합니다.
    ///
    /// 영화 존재 여부는 확인하지 않습니다. 샘플 데이터에는 존재하지 않는
    /// 영화를 참조하는 댓글이 있으므로 같은 규칙을 따릅니다.
    pub async fn create_comment(&self, movie_id: ObjectId, request: CommentRequest) -> AppResult<Comment> {
        let comment = self.comment_repo.create(movie_id, request).await?;
        info!("💬 댓글 생성: {} (movie {})", comment.id, movie_id);

        Ok(comment)
    }

    /// 댓글을 수정합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Comment)` - 수정된 댓글 (시각은 서버 시각)
    /// * `Err(AppError::NotFound)` - (영화 ID, 댓글 ID)가 함께 일치하는 댓글이 없음
    pub async fn update_comment(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
        request: CommentRequest,
    ) -> AppResult<Comment> {
        self.comment_repo
            .update(movie_id, comment_id, request)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND_FOR_MOVIE.to_string()))
    }

    /// 댓글을 삭제합니다. 영화의 댓글 수 감소는 리포지토리가 수행합니다.
    pub async fn delete_comment(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<()> {
        let deleted = self.comment_repo.delete(movie_id, comment_id).await?;

        if !deleted {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND_FOR_MOVIE.to_string()));
        }

        info!("🗑️ 댓글 삭제: {} (movie {})", comment_id, movie_id);
        Ok(())
    }

    pub async fn get_movie_comment(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<Comment> {
        self.comment_repo
            .find_movie_comment(movie_id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("comment not found".to_string()))
    }

    pub async fn get_movie_comments(&self, movie_id: ObjectId) -> AppResult<Vec<Comment>> {
        self.comment_repo.find_movie_comments(movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// 모든 조회가 비어 있는 리포지토리
    struct EmptyCommentRepository;

    #[async_trait]
    impl CommentRepository for EmptyCommentRepository {
        async fn create(&self, movie_id: ObjectId, request: CommentRequest) -> AppResult<Comment> {
            Ok(Comment::new(movie_id, request.name, request.email, request.text))
        }

        async fn update(
            &self,
            _movie_id: ObjectId,
            _comment_id: ObjectId,
            _request: CommentRequest,
        ) -> AppResult<Option<Comment>> {
            Ok(None)
        }

        async fn delete(&self, _movie_id: ObjectId, _comment_id: ObjectId) -> AppResult<bool> {
            Ok(false)
        }

        async fn find_movie_comment(
            &self,
            _movie_id: ObjectId,
            _comment_id: ObjectId,
        ) -> AppResult<Option<Comment>> {
            Ok(None)
        }

        async fn find_movie_comments(&self, _movie_id: ObjectId) -> AppResult<Vec<Comment>> {
            Ok(Vec::new())
        }
    }

    fn request() -> CommentRequest {
        CommentRequest {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            text: "Great movie!".into(),
        }
    }

    fn not_found_message<T: std::fmt::Debug>(result: AppResult<T>) -> String {
        match result {
            Err(AppError::NotFound(msg)) => msg,
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_create_comment_uses_path_movie_id() {
        let service = CommentService::new(Arc::new(EmptyCommentRepository));
        let movie_id = ObjectId::new();

        let comment = service.create_comment(movie_id, request()).await.unwrap();

        assert_eq!(comment.movie_id, movie_id);
        assert_eq!(comment.name, "John Doe");
    }

    #[actix_web::test]
    async fn test_update_without_match_is_not_found() {
        let service = CommentService::new(Arc::new(EmptyCommentRepository));

        let result = service
            .update_comment(ObjectId::new(), ObjectId::new(), request())
            .await;

        assert_eq!(not_found_message(result), COMMENT_NOT_FOUND_FOR_MOVIE);
    }

    #[actix_web::test]
    async fn test_delete_without_match_is_not_found() {
        let service = CommentService::new(Arc::new(EmptyCommentRepository));

        let result = service.delete_comment(ObjectId::new(), ObjectId::new()).await;

        assert_eq!(not_found_message(result), COMMENT_NOT_FOUND_FOR_MOVIE);
    }

    #[actix_web::test]
    async fn test_get_missing_comment_is_not_found() {
        let service = CommentService::new(Arc::new(EmptyCommentRepository));

        let result = service.get_movie_comment(ObjectId::new(), ObjectId::new()).await;

        assert_eq!(not_found_message(result), "comment not found");
    }
}
