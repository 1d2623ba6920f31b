//! 영화 데이터 액세스 계층
//!
//! [`MovieRepository`] 트레이트와 MongoDB 구현인
//! [`MongoMovieRepository`](movie_repo::MongoMovieRepository)를 제공합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::dto::movies::Pagination;
use crate::domain::entities::Movie;

pub mod movie_repo;

pub use movie_repo::MongoMovieRepository;

/// 영화 저장소 접근 트레이트
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// `_id` 일치 조회. 없으면 `Ok(None)`.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Movie>>;

    /// 제목 필터와 오프셋 페이지로 영화 목록을 조회합니다.
    ///
    /// 빈 필터는 모든 문서와 일치합니다. 정렬 순서는 저장소가 돌려주는 순서를 따릅니다.
    async fn find_movies(&self, title_filter: &str, pagination: Pagination)
    -> AppResult<Vec<Movie>>;
}
