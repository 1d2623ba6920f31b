//! Movies Entity Module
//!
//! 영화 카탈로그 문서(`movies` 컬렉션)를 정의합니다.
//! API 관점에서 읽기 전용이며, 데이터는 외부에서 미리 적재됩니다.

pub mod movie;
