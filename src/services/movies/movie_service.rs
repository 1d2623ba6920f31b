//! # 영화 조회 서비스 구현
//!
//! 영화 리포지토리로 요청을 위임합니다. 단건 조회에서 문서가 없으면
//! `AppError::NotFound`를 반환하고, 저장소 오류는 그대로 전파합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::movies::Pagination;
use crate::domain::entities::Movie;
use crate::repositories::movies::MovieRepository;

/// 영화 조회 서비스
pub struct MovieService {
    /// 영화 데이터 액세스 리포지토리
    movie_repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// ID로 영화를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Movie)` - 영화를 찾은 경우
    /// * `Err(AppError::NotFound)` - 해당 ID의 영화가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn get_movie(&self, id: ObjectId) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("movie not found".to_string()))
    }

    /// 제목 필터와 페이지로 영화 목록을 조회합니다. 범위를 벗어난 페이지는 빈 목록입니다.
    pub async fn get_movies(&self, title_filter: &str, pagination: Pagination) -> AppResult<Vec<Movie>> {
        self.movie_repo.find_movies(title_filter, pagination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongodb::bson::{self, doc};

    struct StubMovieRepository {
        movie: Option<Movie>,
        fail: bool,
    }

    #[async_trait]
    impl MovieRepository for StubMovieRepository {
        async fn find_by_id(&self, _id: ObjectId) -> AppResult<Option<Movie>> {
            if self.fail {
                return Err(AppError::DatabaseError("server selection timeout".to_string()));
            }
            Ok(self.movie.clone())
        }

        async fn find_movies(&self, _title: &str, _pagination: Pagination) -> AppResult<Vec<Movie>> {
            Ok(self.movie.clone().into_iter().collect())
        }
    }

    fn movie(title: &str) -> Movie {
        bson::from_document(doc! { "_id": ObjectId::new(), "title": title }).unwrap()
    }

    #[actix_web::test]
    async fn test_get_movie_found() {
        let expected = movie("The Great Train Robbery");
        let service = MovieService::new(Arc::new(StubMovieRepository {
            movie: Some(expected.clone()),
            fail: false,
        }));

        let found = service.get_movie(expected.id).await.unwrap();
        assert_eq!(found, expected);
    }

    #[actix_web::test]
    async fn test_get_movie_missing_is_not_found() {
        let service = MovieService::new(Arc::new(StubMovieRepository {
            movie: None,
            fail: false,
        }));

        let result = service.get_movie(ObjectId::new()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_movie_storage_failure_is_not_masked() {
        let service = MovieService::new(Arc::new(StubMovieRepository {
            movie: None,
            fail: true,
        }));

        let result = service.get_movie(ObjectId::new()).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
