//! 영화 목록 조회 DTO 모듈

pub mod query;

pub use query::{MovieListQuery, Pagination};
