//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별로 `async_trait` 트레이트와 MongoDB 구현을 하나씩 제공합니다.
//! 서비스 계층은 `Arc<dyn MovieRepository>` 형태의 트레이트 객체에만 의존하므로
//! 테스트에서는 인메모리 구현으로 교체할 수 있습니다.
//!
//! # Features
//!
//! - 연산 하나당 MongoDB 호출 하나 (댓글 삭제는 댓글 수 감소 쓰기 추가)
//! - 재시도, 캐싱, 트랜잭션 없음
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movies_api::repositories::movies::{MovieRepository, MongoMovieRepository};
//!
//! let repo: Arc<dyn MovieRepository> = Arc::new(MongoMovieRepository::new(database));
//! let movie = repo.find_by_id(movie_id).await?;
//! ```

pub mod comments;
pub mod movies;

pub use comments::{CommentRepository, MongoCommentRepository};
pub use movies::{MongoMovieRepository, MovieRepository};
