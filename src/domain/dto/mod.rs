//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 들어오는 데이터를 표현하는 객체들입니다.
//! 응답은 엔티티를 그대로 직렬화하므로 별도 응답 DTO를 두지 않습니다.
//!
//! | 구분 | 타입 | 역할 |
//! |------|------|------|
//! | 요청 본문 | [`comments::CommentRequest`] | 댓글 생성/수정 본문 |
//! | 쿼리 | [`movies::MovieListQuery`] | 영화 목록 필터와 페이지 |
//! | 값 객체 | [`movies::Pagination`] | 검증된 페이지/크기 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── comments/   # 댓글 요청 본문
//! └── movies/     # 영화 목록 쿼리 파라미터
//! ```

pub mod comments;
pub mod movies;
