//! 댓글 관리 서비스 모듈

pub mod comment_service;

pub use comment_service::CommentService;
