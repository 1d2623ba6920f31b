//! 댓글 데이터 액세스 계층
//!
//! [`CommentRepository`] 트레이트와 MongoDB 구현인
//! [`MongoCommentRepository`](comment_repo::MongoCommentRepository)를 제공합니다.
//! 모든 변경 연산은 (영화 ID, 댓글 ID) 복합 키로 문서를 선택합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::dto::comments::CommentRequest;
use crate::domain::entities::Comment;

pub mod comment_repo;

pub use comment_repo::MongoCommentRepository;

/// 댓글 저장소 접근 트레이트
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 새 ID와 현재 서버 시각을 부여하여 댓글을 저장합니다.
    async fn create(&self, movie_id: ObjectId, request: CommentRequest) -> AppResult<Comment>;

    /// 이름, 이메일, 본문, 시각(서버 시각)을 덮어씁니다.
    ///
    /// 복합 키와 일치하는 문서가 없으면 `Ok(None)`이며 아무것도 변경하지 않습니다.
    async fn update(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
        request: CommentRequest,
    ) -> AppResult<Option<Comment>>;

    /// 복합 키로 댓글을 삭제하고 영화의 댓글 수를 1 감소시킵니다.
    ///
    /// 삭제된 문서가 없으면 `Ok(false)`이며 댓글 수는 변경되지 않습니다.
    /// 댓글 수 감소는 삭제와 원자적이지 않습니다.
    async fn delete(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<bool>;

    async fn find_movie_comment(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
    ) -> AppResult<Option<Comment>>;

    /// 영화의 모든 댓글 (필터/페이지 없음)
    async fn find_movie_comments(&self, movie_id: ObjectId) -> AppResult<Vec<Comment>>;
}
