//! ObjectId 파싱 유틸리티
//!
//! URL 경로의 식별자를 데이터베이스 호출 전에 검증합니다.

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};

/// 24자리 16진수 문자열을 ObjectId로 변환합니다.
///
/// 실패 시 `invalid {kind} ID format` 메시지의 `ValidationError`를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let movie_id = parse_object_id("573a1390f29313caabcd4eaf", "movie")?;
/// assert!(parse_object_id("12345", "movie").is_err());
/// ```
pub fn parse_object_id(raw: &str, kind: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::ValidationError(format!("invalid {} ID format", kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = parse_object_id("573a1390f29313caabcd4eaf", "movie").unwrap();
        assert_eq!(id.to_hex(), "573a1390f29313caabcd4eaf");
    }

    #[test]
    fn test_parse_invalid_object_id() {
        for raw in ["12345", "", "573a1390f29313caabcd4eazz", "573a1390f29313caabcd4eaf00"] {
            match parse_object_id(raw, "comment") {
                Err(AppError::ValidationError(msg)) => {
                    assert_eq!(msg, "invalid comment ID format")
                }
                other => panic!("Expected ValidationError for {:?}, got {:?}", raw, other),
            }
        }
    }
}
