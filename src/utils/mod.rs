//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`object_id`] - 경로 파라미터의 ObjectId 파싱
//! - [`serde_utils`] - BSON 타입의 JSON 직렬화 보조 함수

pub mod object_id;
pub mod serde_utils;
