//! # Configuration Module
//!
//! 서비스 설정 로딩을 담당하는 모듈입니다.
//! 시작 시점에 YAML 설정 파일을 한 번 읽고, 같은 키를 환경 변수로 덮어쓸 수 있습니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 서버 바인딩 및 MongoDB 연결 설정
//!
//! ## 설정 파일 예시
//!
//! ```yaml
//! port: 8080
//! host: "0.0.0.0"
//! workers: 4
//! mongodb:
//!   uri: "mongodb://localhost:27017"
//!   database: "sample_mflix"
//! ```
//!
//! ## 환경 변수 오버라이드
//!
//! ```bash
//! # 설정 파일 경로
//! export CONFIG_PATH="config/config.yaml"
//!
//! # 개별 키 덮어쓰기 (중첩 키는 `__`로 구분)
//! export MOVIES_API_PORT="9090"
//! export MOVIES_API_MONGODB__URI="mongodb://db:27017"
//! ```

pub mod app_config;

pub use app_config::*;
