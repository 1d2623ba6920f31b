//! 영화 목록 쿼리 파라미터
//!
//! `GET /movies?title=&page=&limit=` 의 쿼리 문자열을 받아
//! 검증된 [`Pagination`]으로 변환합니다. 숫자 파싱은 직접 수행하여
//! 잘못된 값마다 정확한 에러 메시지를 돌려줍니다.

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};

/// 영화 목록 쿼리 문자열
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListQuery {
    /// 제목 부분 일치 필터 (대소문자 무시)
    pub title: Option<String>,
    /// 1부터 시작하는 페이지 번호. 기본값: 1
    pub page: Option<String>,
    /// 페이지 크기. 기본값: 10
    pub limit: Option<String>,
}

impl MovieListQuery {
    /// 제목 필터. 없으면 빈 문자열입니다.
    pub fn title_filter(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// 페이지 파라미터를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `invalid page parameter` - 숫자가 아니거나 0 이하, 오프셋 오버플로
    /// * `invalid limit parameter` - 숫자가 아니거나 0 이하
    pub fn pagination(&self) -> AppResult<Pagination> {
        let page = parse_positive(self.page.as_deref(), Pagination::DEFAULT_PAGE, "page")?;
        let limit = parse_positive(self.limit.as_deref(), Pagination::DEFAULT_LIMIT, "limit")?;

        Pagination::new(page, limit)
    }
}

fn parse_positive(raw: Option<&str>, default: u64, name: &str) -> AppResult<u64> {
    let invalid = || AppError::ValidationError(format!("invalid {} parameter", name));

    match raw {
        None => Ok(default),
        Some(value) => match value.parse::<i64>() {
            Ok(parsed) if parsed > 0 => Ok(parsed as u64),
            _ => Err(invalid()),
        },
    }
}

/// 오프셋 기반 페이지 정보
///
/// 오프셋 = (page - 1) × limit, 최대 행 수 = limit.
/// 생성 시점에 오프셋 계산이 오버플로하지 않음을 보장합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;

    pub fn new(page: u64, limit: u64) -> AppResult<Self> {
        if page == 0 {
            return Err(AppError::ValidationError("invalid page parameter".to_string()));
        }
        if limit == 0 || limit > i64::MAX as u64 {
            return Err(AppError::ValidationError("invalid limit parameter".to_string()));
        }
        // MongoDB는 skip을 i64로 전송합니다
        let within_i64 = (page - 1)
            .checked_mul(limit)
            .is_some_and(|skip| skip <= i64::MAX as u64);
        if !within_i64 {
            return Err(AppError::ValidationError("invalid page parameter".to_string()));
        }

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// 건너뛸 문서 수
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// 최대 반환 문서 수 (MongoDB `limit`은 i64)
    pub fn limit(&self) -> i64 {
        self.limit as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> MovieListQuery {
        MovieListQuery {
            title: None,
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    fn error_message(result: AppResult<Pagination>) -> String {
        match result {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_when_absent() {
        let pagination = query(None, None).pagination().unwrap();

        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.skip(), 0);
        assert_eq!(pagination.limit(), 10);
    }

    #[test]
    fn test_second_page_offset() {
        let pagination = query(Some("2"), Some("10")).pagination().unwrap();

        assert_eq!(pagination.page(), 2);
        assert_eq!(pagination.skip(), 10);
        assert_eq!(pagination.limit(), 10);
    }

    #[test]
    fn test_invalid_page_values() {
        for page in ["qwefqwefqwf", "0", "-1", "", "1.5"] {
            assert_eq!(
                error_message(query(Some(page), None).pagination()),
                "invalid page parameter"
            );
        }
    }

    #[test]
    fn test_invalid_limit_values() {
        for limit in ["invalid", "0", "-10", ""] {
            assert_eq!(
                error_message(query(None, Some(limit)).pagination()),
                "invalid limit parameter"
            );
        }
    }

    #[test]
    fn test_offset_overflow_is_rejected() {
        let result = query(Some("9223372036854775807"), Some("9223372036854775807")).pagination();
        assert_eq!(error_message(result), "invalid page parameter");
    }

    #[test]
    fn test_offset_beyond_i64_is_rejected() {
        let result = query(Some("3"), Some("9223372036854775807")).pagination();
        assert_eq!(error_message(result), "invalid page parameter");

        let first_page = query(Some("1"), Some("9223372036854775807"))
            .pagination()
            .unwrap();
        assert_eq!(first_page.skip(), 0);
        assert_eq!(first_page.limit(), i64::MAX);

        let largest = query(Some("2"), Some("9223372036854775807"))
            .pagination()
            .unwrap();
        assert_eq!(largest.skip(), i64::MAX as u64);
    }

    #[test]
    fn test_title_filter_defaults_to_empty() {
        assert_eq!(query(None, None).title_filter(), "");

        let with_title = MovieListQuery {
            title: Some("matrix".to_string()),
            ..Default::default()
        };
        assert_eq!(with_title.title_filter(), "matrix");
    }
}
