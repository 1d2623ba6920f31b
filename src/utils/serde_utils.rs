//! BSON 타입 직렬화 보조 함수
//!
//! 엔티티는 MongoDB에서 BSON으로 읽고 API에서 JSON으로 내보냅니다.
//! JSON 출력에서 ObjectId는 16진수 문자열, 날짜는 RFC 3339 문자열로 표현합니다.
//! 필수 값은 `mongodb::bson::serde_helpers`를 그대로 쓰고,
//! 여기에는 `Option` 필드용 함수만 둡니다.

use mongodb::bson::DateTime;
use mongodb::bson::serde_helpers::serialize_bson_datetime_as_rfc3339_string;
use serde::Serializer;

/// `Option<DateTime>`을 RFC 3339 문자열 또는 `null`로 직렬화합니다.
///
/// ```rust,ignore
/// #[serde(default, serialize_with = "serialize_optional_datetime_as_rfc3339")]
/// pub released: Option<DateTime>,
/// // JSON: "released": "1903-12-01T00:00:00Z"
/// ```
pub fn serialize_optional_datetime_as_rfc3339<S>(
    value: &Option<DateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serialize_bson_datetime_as_rfc3339_string(date, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Dated {
        #[serde(serialize_with = "serialize_optional_datetime_as_rfc3339")]
        date: Option<DateTime>,
    }

    #[test]
    fn test_serialize_some_datetime() {
        let dated = Dated {
            date: Some(DateTime::from_millis(0)),
        };
        let json = serde_json::to_value(&dated).unwrap();

        assert_eq!(json["date"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_serialize_none_datetime() {
        let json = serde_json::to_value(Dated { date: None }).unwrap();
        assert!(json["date"].is_null());
    }
}
