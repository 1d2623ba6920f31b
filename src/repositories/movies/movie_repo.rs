//! # 영화 리포지토리 구현
//!
//! `movies` 컬렉션에 대한 MongoDB 조회를 담당합니다.
//! 영화는 API에서 읽기 전용이므로 쓰기 연산은 없습니다.
//!
//! ## 쿼리 매핑
//!
//! | 연산 | MongoDB 호출 |
//! |------|--------------|
//! | `find_by_id` | `find_one({_id})` |
//! | `find_movies` | `find({title: /escaped/i}).skip(n).limit(m)` |

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};

use super::MovieRepository;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::dto::movies::Pagination;
use crate::domain::entities::Movie;

/// 영화 컬렉션 이름
pub const MOVIES_COLLECTION: &str = "movies";

/// MongoDB 기반 영화 리포지토리
pub struct MongoMovieRepository {
    /// 공유 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoMovieRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Movie> {
        self.db.get_database().collection::<Movie>(MOVIES_COLLECTION)
    }
}

/// 제목 필터 문서를 만듭니다.
///
/// 입력 문자열은 정규식 메타문자를 이스케이프하여 리터럴 부분 문자열로 취급하고,
/// `i` 옵션으로 대소문자를 무시합니다. 빈 문자열은 빈 필터(`{}`)가 됩니다.
///
/// ```rust,ignore
/// title_filter("matrix");
/// // { "title": { "$regex": "matrix", "$options": "i" } }
/// ```
pub fn title_filter(title: &str) -> Document {
    if title.is_empty() {
        return doc! {};
    }

    doc! {
        "title": {
            "$regex": regex::escape(title),
            "$options": "i",
        }
    }
}

#[async_trait]
impl MovieRepository for MongoMovieRepository {
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to find movie: {}", e)))
    }

    async fn find_movies(
        &self,
        title: &str,
        pagination: Pagination,
    ) -> AppResult<Vec<Movie>> {
        let cursor = self
            .collection()
            .find(title_filter(title))
            .skip(pagination.skip())
            .limit(pagination.limit())
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to find movies: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to read movies: {}", e)))
    }
}
