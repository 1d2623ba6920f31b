//! 댓글 생성/수정 요청 DTO
//!
//! 클라이언트가 보낼 수 있는 필드는 작성자 이름, 이메일, 본문뿐입니다.
//! 본문에 `id`, `movie_id`, `date`가 있어도 무시되며,
//! 식별자는 URL 경로에서, 시각은 서버에서 결정됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 댓글 생성/수정 요청 본문
///
/// ```json
/// { "name": "John Doe", "email": "john@example.com", "text": "Great movie!" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    /// 작성자 이름
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// 작성자 이메일
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    /// 댓글 본문
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}
