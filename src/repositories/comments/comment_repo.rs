//! # 댓글 리포지토리 구현
//!
//! `comments` 컬렉션에 대한 MongoDB 연산을 담당합니다.
//!
//! ## 쿼리 매핑
//!
//! | 연산 | MongoDB 호출 |
//! |------|--------------|
//! | `create` | `insert_one` |
//! | `update` | `update_one({_id, movie_id}, {$set})` |
//! | `delete` | `delete_one({_id, movie_id})` 후 `movies.update_one({$inc: -1})` |
//! | `find_movie_comment` | `find_one({_id, movie_id})` |
//! | `find_movie_comments` | `find({movie_id})` |
//!
//! ## 일관성
//!
//! 삭제 후 댓글 수 감소는 별도 쓰기입니다. 두 번째 쓰기가 실패하면 댓글은
//! 이미 삭제된 상태로 남고, 호출자에게는 데이터베이스 에러가 전파됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::CommentRepository;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::dto::comments::CommentRequest;
use crate::domain::entities::Comment;
use crate::repositories::movies::movie_repo::MOVIES_COLLECTION;

/// 댓글 컬렉션 이름
pub const COMMENTS_COLLECTION: &str = "comments";

/// MongoDB 기반 댓글 리포지토리
pub struct MongoCommentRepository {
    /// 공유 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoCommentRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(COMMENTS_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 영화별 댓글 목록 조회에 쓰이는 `movie_id` 인덱스를 보장합니다.
    /// 이미 같은 인덱스가 있으면 MongoDB가 무시합니다.
    ///
    /// # 호출 시점
    ///
    /// ```rust,ignore
    /// let comment_repo = MongoCommentRepository::new(database.clone());
    /// comment_repo.create_indexes().await?;
    /// ```
    pub async fn create_indexes(&self) -> AppResult<()> {
        let movie_id_index = IndexModel::builder()
            .keys(doc! { "movie_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("movie_id_asc".to_string())
                    .build(),
            )
            .build();

        self.collection::<Document>()
            .create_index(movie_id_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("📇 comments.movie_id 인덱스 확인 완료");
        Ok(())
    }
}

/// 복합 키 필터
fn compound_key(movie_id: ObjectId, comment_id: ObjectId) -> Document {
    doc! {
        "_id": comment_id,
        "movie_id": movie_id,
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn create(&self, movie_id: ObjectId, request: CommentRequest) -> AppResult<Comment> {
        let comment = Comment::new(movie_id, request.name, request.email, request.text);

        self.collection::<Document>()
            .insert_one(comment.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to insert comment: {}", e)))?;

        Ok(comment)
    }

    async fn update(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
        request: CommentRequest,
    ) -> AppResult<Option<Comment>> {
        let date = DateTime::now();
        let update = doc! {
            "$set": {
                "name": request.name.clone(),
                "email": request.email.clone(),
                "text": request.text.clone(),
                "date": date,
            }
        };

        let result = self
            .collection::<Document>()
            .update_one(compound_key(movie_id, comment_id), update)
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to update comment: {}", e)))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(Some(Comment {
            id: comment_id,
            movie_id,
            name: request.name,
            email: request.email,
            text: request.text,
            date,
        }))
    }

    async fn delete(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<bool> {
        let result = self
            .collection::<Document>()
            .delete_one(compound_key(movie_id, comment_id))
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to delete comment: {}", e)))?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        // 삭제된 댓글만큼 영화의 비정규화 댓글 수 감소
        self.db
            .get_database()
            .collection::<Document>(MOVIES_COLLECTION)
            .update_one(
                doc! { "_id": movie_id },
                doc! { "$inc": { "num_mflix_comments": -1 } },
            )
            .await
            .map_err(|e| {
                warn!(
                    "⚠️ 댓글 {} 삭제 후 영화 {} 댓글 수 감소 실패: {}",
                    comment_id, movie_id, e
                );
                AppError::DatabaseError(format!("failed to update movie comment count: {}", e))
            })?;

        Ok(true)
    }

    async fn find_movie_comment(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
    ) -> AppResult<Option<Comment>> {
        self.collection::<Comment>()
            .find_one(compound_key(movie_id, comment_id))
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to find comment: {}", e)))
    }

    async fn find_movie_comments(&self, movie_id: ObjectId) -> AppResult<Vec<Comment>> {
        let cursor = self
            .collection::<Comment>()
            .find(doc! { "movie_id": movie_id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to find comments: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to read comments: {}", e)))
    }
}
