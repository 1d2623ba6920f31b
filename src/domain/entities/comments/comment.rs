//! Comment Entity Implementation
//!
//! 영화 댓글 엔티티입니다. 식별자와 작성 시각은 항상 서버가 부여합니다.

use mongodb::bson::serde_helpers::{
    serialize_bson_datetime_as_rfc3339_string, serialize_object_id_as_hex_string,
};
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티
///
/// BSON에서는 `_id`, JSON 응답에서는 `id` 키를 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    pub id: ObjectId,
    /// 소유 영화 ID (URL 경로에서 가져오며 영화 존재 여부는 검증하지 않음)
    #[serde(serialize_with = "serialize_object_id_as_hex_string")]
    pub movie_id: ObjectId,
    /// 작성자 이름
    pub name: String,
    /// 작성자 이메일
    pub email: String,
    /// 본문
    pub text: String,
    /// 생성 또는 마지막 수정 시각
    #[serde(serialize_with = "serialize_bson_datetime_as_rfc3339_string")]
    pub date: DateTime,
}

impl Comment {
    /// 새 ID와 현재 서버 시각으로 댓글을 생성합니다.
    pub fn new(movie_id: ObjectId, name: String, email: String, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            movie_id,
            name,
            email,
            text,
            date: DateTime::now(),
        }
    }

    /// 저장용 BSON 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        doc! {
            "_id": self.id,
            "movie_id": self.movie_id,
            "name": self.name.clone(),
            "email": self.email.clone(),
            "text": self.text.clone(),
            "date": self.date,
        }
    }
}
