//! 인메모리 리포지토리 기반 테스트 픽스처

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use actix_web::web;
use async_trait::async_trait;
use mongodb::bson::{self, DateTime, doc, oid::ObjectId};

use movies_api::core::errors::AppResult;
use movies_api::domain::dto::comments::CommentRequest;
use movies_api::domain::dto::movies::Pagination;
use movies_api::domain::entities::{Comment, Movie};
use movies_api::repositories::{CommentRepository, MovieRepository};
use movies_api::services::{CommentService, MovieService};

#[derive(Default)]
pub struct Store {
    pub movies: Vec<Movie>,
    pub comments: Vec<Comment>,
}

/// 두 리포지토리가 공유하는 저장소와 호출 횟수
#[derive(Clone, Default)]
pub struct Fixture {
    store: Arc<Mutex<Store>>,
    calls: Arc<AtomicUsize>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }

    /// 리포지토리 메서드가 호출된 총 횟수
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn add_movie(&self, title: &str, num_mflix_comments: i64) -> ObjectId {
        let id = ObjectId::new();
        let movie: Movie = bson::from_document(doc! {
            "_id": id,
            "title": title,
            "num_mflix_comments": num_mflix_comments,
        })
        .unwrap();
        self.store().movies.push(movie);
        id
    }

    pub fn add_comment(&self, movie_id: ObjectId, text: &str) -> ObjectId {
        let comment = Comment::new(
            movie_id,
            "Ned Stark".to_string(),
            "sean_bean@gameofthron.es".to_string(),
            text.to_string(),
        );
        let id = comment.id;
        self.store().comments.push(comment);
        id
    }

    pub fn comment_count(&self, movie_id: ObjectId) -> i64 {
        self.store()
            .movies
            .iter()
            .find(|m| m.id == movie_id)
            .map(|m| m.num_mflix_comments)
            .unwrap()
    }

    pub fn comment(&self, comment_id: ObjectId) -> Option<Comment> {
        self.store()
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .cloned()
    }

    pub fn movie_service(&self) -> web::Data<MovieService> {
        web::Data::new(MovieService::new(Arc::new(InMemoryMovieRepository(self.clone()))))
    }

    pub fn comment_service(&self) -> web::Data<CommentService> {
        web::Data::new(CommentService::new(Arc::new(InMemoryCommentRepository(self.clone()))))
    }
}

pub struct InMemoryMovieRepository(Fixture);

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        self.0.record_call();
        Ok(self.0.store().movies.iter().find(|m| m.id == id).cloned())
    }

    async fn find_movies(&self, title_filter: &str, pagination: Pagination) -> AppResult<Vec<Movie>> {
        self.0.record_call();
        let needle = title_filter.to_lowercase();

        Ok(self
            .0
            .store()
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .skip(pagination.skip() as usize)
            .take(pagination.limit() as usize)
            .cloned()
            .collect())
    }
}

pub struct InMemoryCommentRepository(Fixture);

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, movie_id: ObjectId, request: CommentRequest) -> AppResult<Comment> {
        self.0.record_call();
        let comment = Comment::new(movie_id, request.name, request.email, request.text);
        self.0.store().comments.push(comment.clone());
        Ok(comment)
    }

    async fn update(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
        request: CommentRequest,
    ) -> AppResult<Option<Comment>> {
        self.0.record_call();
        let mut store = self.0.store();

        Ok(store
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id && c.movie_id == movie_id)
            .map(|c| {
                c.name = request.name;
                c.email = request.email;
                c.text = request.text;
                c.date = DateTime::now();
                c.clone()
            }))
    }

    async fn delete(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<bool> {
        self.0.record_call();
        let mut store = self.0.store();

        let before = store.comments.len();
        store
            .comments
            .retain(|c| !(c.id == comment_id && c.movie_id == movie_id));
        if store.comments.len() == before {
            return Ok(false);
        }

        if let Some(movie) = store.movies.iter_mut().find(|m| m.id == movie_id) {
            movie.num_mflix_comments -= 1;
        }
        Ok(true)
    }

    async fn find_movie_comment(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
    ) -> AppResult<Option<Comment>> {
        self.0.record_call();
        Ok(self
            .0
            .store()
            .comments
            .iter()
            .find(|c| c.id == comment_id && c.movie_id == movie_id)
            .cloned())
    }

    async fn find_movie_comments(&self, movie_id: ObjectId) -> AppResult<Vec<Comment>> {
        self.0.record_call();
        Ok(self
            .0
            .store()
            .comments
            .iter()
            .filter(|c| c.movie_id == movie_id)
            .cloned()
            .collect())
    }
}
