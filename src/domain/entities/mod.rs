//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응하는 문서 구조체입니다.
//!
//! ## 직렬화 규칙
//!
//! - **읽기**: BSON 문서에서 역직렬화 (`_id`, BSON datetime)
//! - **응답**: JSON으로 직렬화 (ObjectId는 16진수 문자열, 날짜는 RFC 3339)
//! - **쓰기**: 엔티티를 그대로 저장하지 않고 리포지토리에서 `doc!`로 문서를 구성
//!
//! ```text
//! entities/
//! ├── movies/     ← Movie 및 중첩 집계 (Awards, Imdb, Tomatoes)
//! └── comments/   ← Comment
//! ```

pub mod comments;
pub mod movies;

pub use comments::comment::Comment;
pub use movies::movie::{Awards, Imdb, Movie, Tomatoes, TomatoesRating};
