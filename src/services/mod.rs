//! 서비스 계층 모듈
//!
//! 핸들러와 리포지토리 사이의 위임 계층입니다. 별도 비즈니스 규칙은 없고,
//! 리포지토리의 "결과 없음"(`None`, `false`)을 `AppError::NotFound`로 바꿔
//! 핸들러가 404와 500을 구분할 수 있게 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use movies_api::services::{MovieService, CommentService};
//!
//! let movie_service = MovieService::new(movie_repo);
//! let movie = movie_service.get_movie(movie_id).await?;
//! ```

pub mod comments;
pub mod movies;

pub use comments::CommentService;
pub use movies::MovieService;
