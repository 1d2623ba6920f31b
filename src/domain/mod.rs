//! # Domain Layer Module
//!
//! 영화 카탈로그와 댓글 도메인의 데이터 구조를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 Movie, Comment
//! └── dto       - 요청 본문과 쿼리 파라미터
//! ```
//!
//! 엔티티는 동작을 갖지 않으며, BSON에서 읽고 JSON으로 내보내는 규칙만 가집니다.

pub mod dto;
pub mod entities;

pub use entities::*;
