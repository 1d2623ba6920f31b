//! 서버 및 데이터베이스 설정
//!
//! YAML 파일과 환경 변수에서 설정을 읽어 검증된 [`AppConfig`]를 만듭니다.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// 설정 파일 경로 기본값
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// 설정 파일 경로 플래그 이름 (`-` 또는 `--` 접두사)
const CONFIG_PATH_FLAGS: [&str; 2] = ["config-path", "configPath"];

/// 환경 변수 오버라이드 접두사
const ENV_PREFIX: &str = "MOVIES_API";

/// 설정 로딩 실패
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// 파일을 읽지 못했거나 YAML/타입 변환에 실패한 경우
    #[error("failed to read config: {0}")]
    Read(#[from] config::ConfigError),

    /// 필수 값이 비어 있거나 범위를 벗어난 경우
    #[error("invalid config: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// 애플리케이션 설정
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct AppConfig {
    /// HTTP 리스닝 포트 (필수)
    #[validate(range(min = 1, message = "port must be greater than 0"))]
    pub port: u16,

    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    #[serde(default = "default_host")]
    pub host: String,

    /// actix 워커 스레드 수. 기본값: 4
    #[serde(default = "default_workers")]
    #[validate(range(min = 1, message = "workers must be at least 1"))]
    pub workers: usize,

    /// MongoDB 연결 설정 (필수)
    #[validate(nested)]
    pub mongodb: MongoConfig,
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct MongoConfig {
    /// 연결 URI
    #[validate(length(min = 1, message = "mongodb.uri is required"))]
    pub uri: String,

    /// 사용할 데이터베이스 이름
    #[validate(length(min = 1, message = "mongodb.database is required"))]
    pub database: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_workers() -> usize {
    4
}

impl AppConfig {
    /// 설정 파일을 읽고 검증합니다.
    ///
    /// `MOVIES_API_` 접두사 환경 변수가 파일 값보다 우선합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigLoadError::Read` - 파일 없음, YAML 문법 오류, 필수 키 누락
    /// * `ConfigLoadError::Invalid` - 빈 문자열 등 검증 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = AppConfig::load("config/config.yaml")?;
    /// println!("{}", config.bind_address());
    /// ```
    pub fn load(path: &str) -> Result<Self, ConfigLoadError> {
        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Yaml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 설정 파일 경로를 결정합니다.
///
/// 우선순위: `--config-path <path>` 또는 `--config-path=<path>` 인자,
/// `CONFIG_PATH` 환경 변수, 기본값 `config/config.yaml`.
/// 기존 배포 스크립트의 `-configPath`, `--configPath` 표기도 받습니다.
pub fn resolve_config_path<I>(args: I, env_path: Option<String>) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            continue;
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };
        if !CONFIG_PATH_FLAGS.contains(&name) {
            continue;
        }

        if let Some(path) = inline_value.or_else(|| args.next()) {
            return path;
        }
    }

    env_path
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}
