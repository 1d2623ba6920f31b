//! Movie Entity Implementation
//!
//! `sample_mflix.movies` 문서 구조를 그대로 따르는 읽기 전용 엔티티입니다.
//! 저장된 문서에는 필드가 빠져 있는 경우가 많으므로 `_id`를 제외한 모든 필드는
//! 기본값(빈 문자열, 빈 배열, 0, `null`)으로 채워집니다.

use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::utils::serde_utils::serialize_optional_datetime_as_rfc3339;

/// 영화 엔티티
///
/// JSON 키는 BSON 키와 동일합니다. 식별자 키는 `_id`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// 상영 시간 (분)
    #[serde(default)]
    pub runtime: i64,
    #[serde(default)]
    pub cast: Vec<String>,
    /// 비정규화된 댓글 수. 댓글 삭제 시 1씩 감소합니다.
    #[serde(default)]
    pub num_mflix_comments: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fullplot: String,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default, serialize_with = "serialize_optional_datetime_as_rfc3339")]
    pub released: Option<DateTime>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub rated: String,
    #[serde(default)]
    pub awards: Awards,
    /// 원본 데이터에서 문자열로 저장된 갱신 시각
    #[serde(default, rename = "lastupdated")]
    pub last_updated: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub imdb: Imdb,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tomatoes: Tomatoes,
    #[serde(default)]
    pub poster: String,
}

/// 수상 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Awards {
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub nominations: i64,
    /// 사람이 읽는 요약 (예: "1 win.")
    #[serde(default)]
    pub text: String,
}

/// IMDb 평점 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Imdb {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub votes: i64,
    /// IMDb 외부 식별자
    #[serde(default)]
    pub id: i64,
}

/// Rotten Tomatoes 평론가/관객 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tomatoes {
    #[serde(default)]
    pub viewer: TomatoesRating,
    #[serde(default)]
    pub fresh: i64,
    #[serde(default)]
    pub critic: TomatoesRating,
    #[serde(default)]
    pub rotten: i64,
    #[serde(
        default,
        rename = "lastUpdated",
        serialize_with = "serialize_optional_datetime_as_rfc3339"
    )]
    pub last_updated: Option<DateTime>,
    #[serde(default, serialize_with = "serialize_optional_datetime_as_rfc3339")]
    pub dvd: Option<DateTime>,
}

/// 평점, 리뷰 수, 신선도 점수(%)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomatoesRating {
    #[serde(default)]
    pub rating: f64,
    #[serde(default, rename = "numReviews")]
    pub num_reviews: i64,
    #[serde(default)]
    pub meter: i64,
}
