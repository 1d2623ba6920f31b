//! Comments Entity Module
//!
//! 영화별 댓글 문서(`comments` 컬렉션)를 정의합니다.
//! 댓글은 소유 영화의 ID(`movie_id`)를 참조하며, 모든 변경은
//! (영화 ID, 댓글 ID) 복합 키로 범위가 제한됩니다.

pub mod comment;
